//! IANA special-purpose address registries.
//!
//! Sources:
//! - <https://www.iana.org/assignments/iana-ipv4-special-registry/>
//! - <https://www.iana.org/assignments/iana-ipv6-special-registry/>

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::Serialize;

/// A special-purpose network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReservedRange {
    pub network: IpAddr,
    pub prefix: u8,
    pub description: &'static str,
}

impl ReservedRange {
    const fn v4(a: u8, b: u8, c: u8, d: u8, prefix: u8, description: &'static str) -> Self {
        Self {
            network: IpAddr::V4(Ipv4Addr::new(a, b, c, d)),
            prefix,
            description,
        }
    }

    const fn v6(segments: [u16; 8], prefix: u8, description: &'static str) -> Self {
        let [a, b, c, d, e, f, g, h] = segments;
        Self {
            network: IpAddr::V6(Ipv6Addr::new(a, b, c, d, e, f, g, h)),
            prefix,
            description,
        }
    }

    /// Returns whether `ip` is inside this network.
    ///
    /// Addresses of the other IP version are never contained.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.network, ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => {
                let mask = u32::MAX.checked_shl(32 - u32::from(self.prefix)).unwrap_or(0);
                u32::from(net) & mask == u32::from(ip) & mask
            }
            (IpAddr::V6(net), IpAddr::V6(ip)) => {
                let mask = u128::MAX.checked_shl(128 - u32::from(self.prefix)).unwrap_or(0);
                u128::from(net) & mask == u128::from(ip) & mask
            }
            _ => false,
        }
    }
}

/// Reserved IPv4 networks.
pub const RESERVED_V4: &[ReservedRange] = &[
    ReservedRange::v4(0, 0, 0, 0, 8, "\"This\" network"),
    ReservedRange::v4(10, 0, 0, 0, 8, "Private-Use"),
    ReservedRange::v4(100, 64, 0, 0, 10, "Shared Address Space"),
    ReservedRange::v4(127, 0, 0, 0, 8, "Loopback"),
    ReservedRange::v4(169, 254, 0, 0, 16, "Link Local"),
    ReservedRange::v4(172, 16, 0, 0, 12, "Private-Use"),
    ReservedRange::v4(192, 0, 0, 0, 24, "IETF Protocol Assignments"),
    ReservedRange::v4(192, 0, 2, 0, 24, "Documentation (TEST-NET-1)"),
    ReservedRange::v4(192, 88, 99, 0, 24, "Deprecated (6to4 Relay Anycast)"),
    ReservedRange::v4(192, 168, 0, 0, 16, "Private-Use"),
    ReservedRange::v4(198, 18, 0, 0, 15, "Benchmarking"),
    ReservedRange::v4(198, 51, 100, 0, 24, "Documentation (TEST-NET-2)"),
    ReservedRange::v4(203, 0, 113, 0, 24, "Documentation (TEST-NET-3)"),
    ReservedRange::v4(224, 0, 0, 0, 4, "Multicast"),
    ReservedRange::v4(233, 252, 0, 0, 24, "Documentation (MCAST-TEST-NET)"),
    ReservedRange::v4(240, 0, 0, 0, 4, "Reserved"),
    ReservedRange::v4(255, 255, 255, 255, 32, "Limited Broadcast"),
];

/// Reserved IPv6 networks.
pub const RESERVED_V6: &[ReservedRange] = &[
    ReservedRange::v6([0, 0, 0, 0, 0, 0, 0, 0], 128, "Unspecified Address"),
    ReservedRange::v6([0, 0, 0, 0, 0, 0, 0, 1], 128, "Loopback Address"),
    ReservedRange::v6([0, 0, 0, 0, 0, 0xffff, 0, 0], 96, "IPv4-mapped Address"),
    ReservedRange::v6([0, 0, 0, 0, 0xffff, 0, 0, 0], 96, "IPv4-translated Address"),
    ReservedRange::v6([0x64, 0xff9b, 0, 0, 0, 0, 0, 0], 96, "IPv4-IPv6 Translation"),
    ReservedRange::v6([0x64, 0xff9b, 1, 0, 0, 0, 0, 0], 48, "IPv4-IPv6 Translation"),
    ReservedRange::v6([0x100, 0, 0, 0, 0, 0, 0, 0], 64, "Discard-Only Address Block"),
    ReservedRange::v6([0x2001, 0, 0, 0, 0, 0, 0, 0], 32, "IETF Protocol Assignments"),
    ReservedRange::v6([0x2001, 0x20, 0, 0, 0, 0, 0, 0], 28, "ORCHIDv2"),
    ReservedRange::v6([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0], 32, "Documentation"),
    ReservedRange::v6([0x2002, 0, 0, 0, 0, 0, 0, 0], 16, "6to4"),
    ReservedRange::v6([0xfc00, 0, 0, 0, 0, 0, 0, 0], 7, "Unique-Local"),
    ReservedRange::v6([0xfe80, 0, 0, 0, 0, 0, 0, 0], 10, "Link-Local Unicast"),
    ReservedRange::v6([0xff00, 0, 0, 0, 0, 0, 0, 0], 8, "Multicast"),
];

/// Returns the first reserved network containing `ip`.
pub fn reserved_range(ip: IpAddr) -> Option<&'static ReservedRange> {
    let table = match ip {
        IpAddr::V4(_) => RESERVED_V4,
        IpAddr::V6(_) => RESERVED_V6,
    };
    table.iter().find(|range| range.contains(ip))
}

pub fn is_reserved_v4(ip: Ipv4Addr) -> bool {
    reserved_range(IpAddr::V4(ip)).is_some()
}

pub fn is_reserved_v6(ip: Ipv6Addr) -> bool {
    reserved_range(IpAddr::V6(ip)).is_some()
}

/// Returns whether `ip` is in a special-purpose range of its IP version.
pub fn is_reserved(ip: IpAddr) -> bool {
    reserved_range(ip).is_some()
}
