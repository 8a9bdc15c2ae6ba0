//! Random address generation.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::{is_reserved_v4, is_reserved_v6};

/// Returns a uniformly random IPv4 address, possibly reserved.
pub fn random_v4() -> Ipv4Addr {
    Ipv4Addr::from(rand::random::<u32>())
}

/// Returns a uniformly random IPv6 address, possibly reserved.
pub fn random_v6() -> Ipv6Addr {
    Ipv6Addr::from(rand::random::<u128>())
}

/// Returns a random address of a random IP version, possibly reserved.
pub fn random_ip() -> IpAddr {
    if rand::random::<bool>() {
        IpAddr::V4(random_v4())
    } else {
        IpAddr::V6(random_v6())
    }
}

/// Returns a random IPv4 address outside every reserved range.
pub fn public_v4() -> Ipv4Addr {
    loop {
        let ip = random_v4();
        if !is_reserved_v4(ip) {
            return ip;
        }
    }
}

/// Returns a random IPv6 address outside every reserved range.
pub fn public_v6() -> Ipv6Addr {
    loop {
        let ip = random_v6();
        if !is_reserved_v6(ip) {
            return ip;
        }
    }
}

/// Returns a random public address of a random IP version.
pub fn public_ip() -> IpAddr {
    if rand::random::<bool>() {
        IpAddr::V4(public_v4())
    } else {
        IpAddr::V6(public_v6())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ip::is_reserved;

    #[test]
    fn test_public_addresses_are_not_reserved() {
        for _ in 0..200 {
            assert!(!is_reserved_v4(public_v4()));
            assert!(!is_reserved_v6(public_v6()));
            assert!(!is_reserved(public_ip()));
        }
    }

    #[test]
    fn test_random_ip_uses_both_versions() {
        let ips: Vec<IpAddr> = (0..200).map(|_| random_ip()).collect();
        assert!(ips.iter().any(IpAddr::is_ipv4));
        assert!(ips.iter().any(IpAddr::is_ipv6));
    }
}
