//! IP address helpers.
//!
//! This module provides:
//! - Validity checks for textual addresses
//! - Membership in the IANA special-purpose (reserved) ranges
//! - Random and random public address generation
//! - Address increment and network enumeration

mod random;
mod range;
mod reserved;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub use random::{public_ip, public_v4, public_v6, random_ip, random_v4, random_v6};
pub use range::{next_addr, parse_cidr, Network, UsableAddrs};
pub use reserved::{
    is_reserved, is_reserved_v4, is_reserved_v6, reserved_range, ReservedRange, RESERVED_V4,
    RESERVED_V6,
};

/// Returns whether `text` is an IPv4 address in dotted-decimal notation.
pub fn is_valid_v4(text: &str) -> bool {
    text.parse::<Ipv4Addr>().is_ok()
}

/// Returns whether `text` is an IPv6 address.
pub fn is_valid_v6(text: &str) -> bool {
    text.parse::<Ipv6Addr>().is_ok()
}

/// Returns whether `text` is an IPv4 or IPv6 address.
pub fn is_valid(text: &str) -> bool {
    text.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid_v4("192.0.2.1"));
        assert!(!is_valid_v4("::1"));
        assert!(!is_valid_v4("256.0.0.1"));
        assert!(!is_valid_v4("1.2.3"));

        assert!(is_valid_v6("::1"));
        assert!(is_valid_v6("::ffff:192.0.2.1"));
        assert!(!is_valid_v6("192.0.2.1"));
        assert!(!is_valid_v6("2001:db8::g"));

        assert!(is_valid("10.0.0.1"));
        assert!(is_valid("fe80::1"));
        assert!(!is_valid("example.com"));
        assert!(!is_valid(""));
    }
}
