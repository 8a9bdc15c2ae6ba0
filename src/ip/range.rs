//! Address arithmetic and network enumeration.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error_handling::NetworkError;

fn to_bits(ip: IpAddr) -> (u128, u8) {
    match ip {
        IpAddr::V4(v4) => (u128::from(u32::from(v4)), 32),
        IpAddr::V6(v6) => (u128::from(v6), 128),
    }
}

fn from_bits(bits: u128, width: u8) -> IpAddr {
    if width == 32 {
        // Only called with values inside the 32-bit space
        IpAddr::V4(Ipv4Addr::from(bits as u32))
    } else {
        IpAddr::V6(Ipv6Addr::from(bits))
    }
}

fn all_ones(width: u8) -> u128 {
    u128::MAX >> (128 - u32::from(width))
}

/// Returns the address following `ip`, or `None` past the last address.
pub fn next_addr(ip: IpAddr) -> Option<IpAddr> {
    let (bits, width) = to_bits(ip);
    if bits == all_ones(width) {
        return None;
    }
    Some(from_bits(bits + 1, width))
}

/// Parses `address/prefix` notation.
///
/// # Errors
///
/// Returns `NetworkError::InvalidCidr` for malformed text and
/// `NetworkError::InvalidPrefix` for a prefix longer than the address.
pub fn parse_cidr(text: &str) -> Result<(IpAddr, u8), NetworkError> {
    let invalid = || NetworkError::InvalidCidr(text.to_string());
    let (addr, prefix) = text.split_once('/').ok_or_else(invalid)?;
    let addr: IpAddr = addr.parse().map_err(|_| invalid())?;
    let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
    let max = to_bits(addr).1;
    if prefix > max {
        return Err(NetworkError::InvalidPrefix { prefix, max });
    }
    Ok((addr, prefix))
}

/// The addresses of a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Network (identification) address.
    pub first: IpAddr,
    /// Broadcast address; `None` for a single-address network.
    pub last: Option<IpAddr>,
    /// Hosts between `first` and `last`; `None` for /31, /32, /127 and /128.
    pub usable: Option<UsableAddrs>,
}

impl Network {
    /// Describes the network containing `addr` with the given prefix length.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidPrefix` if `prefix` exceeds 32 for IPv4
    /// or 128 for IPv6.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, NetworkError> {
        let (bits, width) = to_bits(addr);
        if prefix > width {
            return Err(NetworkError::InvalidPrefix { prefix, max: width });
        }

        let host_bits = u32::from(width - prefix);
        let host_mask = u128::MAX.checked_shr(128 - host_bits).unwrap_or(0);
        let first = bits & !host_mask;
        let last = first | host_mask;

        let network = match host_bits {
            0 => Network {
                first: from_bits(first, width),
                last: None,
                usable: None,
            },
            1 => Network {
                first: from_bits(first, width),
                last: Some(from_bits(last, width)),
                usable: None,
            },
            _ => Network {
                first: from_bits(first, width),
                last: Some(from_bits(last, width)),
                usable: Some(UsableAddrs {
                    next: first + 1,
                    end: last,
                    width,
                }),
            },
        };
        Ok(network)
    }

    /// Parses and describes a network in `address/prefix` notation.
    pub fn from_cidr(text: &str) -> Result<Self, NetworkError> {
        let (addr, prefix) = parse_cidr(text)?;
        Self::new(addr, prefix)
    }
}

/// Lazy iterator over the usable addresses of a network.
///
/// Large networks (a /8, or any IPv6 network) are never materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsableAddrs {
    next: u128,
    end: u128,
    width: u8,
}

impl UsableAddrs {
    /// Number of addresses left.
    pub fn remaining(&self) -> u128 {
        self.end - self.next
    }
}

impl Iterator for UsableAddrs {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        if self.next >= self.end {
            return None;
        }
        let ip = from_bits(self.next, self.width);
        self.next += 1;
        Some(ip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_next_addr() {
        assert_eq!(next_addr(ip("10.0.0.255")), Some(ip("10.0.1.0")));
        assert_eq!(next_addr(ip("::ffff")), Some(ip("::1:0")));
        assert_eq!(next_addr(ip("255.255.255.255")), None);
        assert_eq!(
            next_addr(ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff")),
            None
        );
    }

    #[test]
    fn test_network_v4() {
        let net = Network::from_cidr("192.168.1.77/29").unwrap();
        assert_eq!(net.first, ip("192.168.1.72"));
        assert_eq!(net.last, Some(ip("192.168.1.79")));
        let usable: Vec<IpAddr> = net.usable.unwrap().collect();
        assert_eq!(usable.len(), 6);
        assert_eq!(usable[0], ip("192.168.1.73"));
        assert_eq!(usable[5], ip("192.168.1.78"));
    }

    #[test]
    fn test_network_small_prefixes() {
        let single = Network::from_cidr("10.0.0.1/32").unwrap();
        assert_eq!(single.first, ip("10.0.0.1"));
        assert_eq!(single.last, None);
        assert!(single.usable.is_none());

        let pair = Network::from_cidr("10.0.0.1/31").unwrap();
        assert_eq!(pair.first, ip("10.0.0.0"));
        assert_eq!(pair.last, Some(ip("10.0.0.1")));
        assert!(pair.usable.is_none());

        let pair6 = Network::from_cidr("2001:db8::1/127").unwrap();
        assert_eq!(pair6.last, Some(ip("2001:db8::1")));
        assert!(pair6.usable.is_none());
        assert!(Network::from_cidr("::1/128").unwrap().last.is_none());
    }

    #[test]
    fn test_network_large_is_lazy() {
        let net = Network::from_cidr("10.0.0.0/8").unwrap();
        let usable = net.usable.unwrap();
        assert_eq!(usable.remaining(), (1 << 24) - 2);
        let firsts: Vec<IpAddr> = usable.take(2).collect();
        assert_eq!(firsts, vec![ip("10.0.0.1"), ip("10.0.0.2")]);

        let all = Network::from_cidr("::/0").unwrap();
        assert_eq!(all.last, Some(ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff")));
        assert_eq!(all.usable.unwrap().size_hint().1, None);
    }

    #[test]
    fn test_parse_cidr_errors() {
        assert!(matches!(
            parse_cidr("10.0.0.0"),
            Err(NetworkError::InvalidCidr(_))
        ));
        assert!(matches!(
            parse_cidr("10.0.0.0/x"),
            Err(NetworkError::InvalidCidr(_))
        ));
        assert_eq!(
            parse_cidr("10.0.0.0/33"),
            Err(NetworkError::InvalidPrefix { prefix: 33, max: 32 })
        );
        assert_eq!(parse_cidr("fe80::/10"), Ok((ip("fe80::"), 10)));
    }
}
