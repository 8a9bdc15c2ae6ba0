//! IP range, reserved address and input validator helpers.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use domain_probe::cli::write_ip_report;
use domain_probe::ip::{is_reserved, next_addr, public_ip, Network};
use domain_probe::validators::{is_valid_email, is_valid_port, is_valid_url};

#[test]
fn test_network_enumeration() {
    let network = Network::from_cidr("10.1.2.77/29").unwrap();
    assert_eq!(network.first, IpAddr::V4(Ipv4Addr::new(10, 1, 2, 72)));
    assert_eq!(network.last, Some(IpAddr::V4(Ipv4Addr::new(10, 1, 2, 79))));

    let usable: Vec<IpAddr> = network.usable.unwrap().collect();
    assert_eq!(usable.len(), 6);
    assert_eq!(usable[0], IpAddr::V4(Ipv4Addr::new(10, 1, 2, 73)));
    assert_eq!(usable[5], IpAddr::V4(Ipv4Addr::new(10, 1, 2, 78)));
}

#[test]
fn test_walking_addresses_stops_at_the_top() {
    let mut ip = IpAddr::V4(Ipv4Addr::new(255, 255, 255, 253));
    let mut steps = 0;
    while let Some(next) = next_addr(ip) {
        ip = next;
        steps += 1;
    }
    assert_eq!(steps, 2);
    assert_eq!(next_addr(IpAddr::V6(Ipv6Addr::from(u128::MAX))), None);
}

#[test]
fn test_random_public_addresses_are_not_reserved() {
    for _ in 0..200 {
        assert!(!is_reserved(public_ip()));
    }
}

#[test]
fn test_ip_report_for_ipv6() {
    let inputs = vec!["2001:db8::1".to_string(), "2606:4700::1111".to_string()];
    let mut out = Vec::new();
    assert!(write_ip_report(&inputs, &mut out).unwrap());

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("2001:db8::1\tIPv6\treserved\t2001:db8::/32"));
    assert_eq!(lines[1], "2606:4700::1111\tIPv6\tpublic");
}

#[test]
fn test_input_validators() {
    assert!(is_valid_url("https://books.amazon.co.uk/path"));
    assert!(!is_valid_url("https://bad_host-.example.com/"));
    assert!(!is_valid_url("not a url"));

    assert!(is_valid_port("443"));
    assert!(!is_valid_port("65536"));
    assert!(!is_valid_port("+80"));

    assert!(is_valid_email("first.last+tag@example.co.uk"));
    assert!(!is_valid_email("first..last@example.com"));
    assert!(!is_valid_email("someone@localhost"));
}
