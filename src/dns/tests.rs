//! DNS module tests.

use super::*;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::rdata::{self, MX, SOA, SRV, TXT};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::Name;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Creates a test DNS client with short timeouts for faster test execution.
fn create_test_client() -> DnsClient {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(5);
    opts.attempts = 1; // Single attempt for faster failures in tests
    opts.ndots = 0;

    DnsClient::new(Arc::new(hickory_resolver::TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}

fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

#[test]
fn test_record_kind_names() {
    let names: Vec<String> = RecordKind::iter().map(|k| k.to_string()).collect();
    assert_eq!(
        names,
        ["A", "AAAA", "MX", "NS", "TXT", "CAA", "SRV", "SOA", "CNAME", "DNAME"]
    );
    for kind in RecordKind::iter().filter(|k| *k != RecordKind::Dname) {
        assert_eq!(kind.record_type().to_string(), kind.as_str());
    }
    assert_eq!(u16::from(RecordKind::Dname.record_type()), DNAME_TYPE_CODE);
}

#[test]
fn test_existence_order_skips_soa() {
    assert!(!RecordKind::EXISTENCE_ORDER.contains(&RecordKind::Soa));
    assert_eq!(RecordKind::EXISTENCE_ORDER[0], RecordKind::A);
}

#[test]
fn test_from_rdata_addresses() {
    let a = RData::A(rdata::A(Ipv4Addr::new(93, 184, 215, 14)));
    assert_eq!(
        ResourceRecord::from_rdata(&a),
        Some(ResourceRecord::A(Ipv4Addr::new(93, 184, 215, 14)))
    );

    let aaaa = RData::AAAA(rdata::AAAA(Ipv6Addr::LOCALHOST));
    let record = ResourceRecord::from_rdata(&aaaa).unwrap();
    assert_eq!(record.kind(), RecordKind::Aaaa);
    assert_eq!(record.to_string(), "::1");
}

#[test]
fn test_from_rdata_names() {
    let mx = RData::MX(MX::new(10, name("mail.example.com.")));
    let record = ResourceRecord::from_rdata(&mx).unwrap();
    assert_eq!(record.to_string(), "10 mail.example.com.");

    let ns = RData::NS(rdata::NS(name("ns1.example.com.")));
    assert_eq!(
        ResourceRecord::from_rdata(&ns),
        Some(ResourceRecord::Ns("ns1.example.com.".to_string()))
    );

    let cname = RData::CNAME(rdata::CNAME(name("www.example.net.")));
    assert_eq!(
        ResourceRecord::from_rdata(&cname).map(|r| r.kind()),
        Some(RecordKind::Cname)
    );
}

#[test]
fn test_from_rdata_txt_joins_strings() {
    let txt = RData::TXT(TXT::new(vec![
        "v=spf1 include:_spf.example.com ".to_string(),
        "~all".to_string(),
    ]));
    assert_eq!(
        ResourceRecord::from_rdata(&txt),
        Some(ResourceRecord::Txt(
            "v=spf1 include:_spf.example.com ~all".to_string()
        ))
    );
}

#[test]
fn test_from_rdata_srv_and_soa() {
    let srv = RData::SRV(SRV::new(10, 60, 5060, name("sip.example.com.")));
    assert_eq!(
        ResourceRecord::from_rdata(&srv).unwrap().to_string(),
        "10 60 5060 sip.example.com."
    );

    let soa = RData::SOA(SOA::new(
        name("ns.example.com."),
        name("hostmaster.example.com."),
        2024010101,
        7200,
        3600,
        1209600,
        3600,
    ));
    let record = ResourceRecord::from_rdata(&soa).unwrap();
    assert_eq!(record.kind(), RecordKind::Soa);
    assert_eq!(
        record.to_string(),
        "ns.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 3600"
    );
}

#[test]
fn test_from_rdata_dname() {
    let dname = RData::Unknown {
        code: RecordType::from(DNAME_TYPE_CODE),
        rdata: rdata::NULL::with(b"\x07example\x03net\x00".to_vec()),
    };
    let record = ResourceRecord::from_rdata(&dname).unwrap();
    assert_eq!(record, ResourceRecord::Dname("example.net.".to_string()));
    assert_eq!(record.kind(), RecordKind::Dname);
    assert_eq!(record.to_string(), "example.net.");

    // Truncated label
    let broken = RData::Unknown {
        code: RecordType::from(DNAME_TYPE_CODE),
        rdata: rdata::NULL::with(b"\x07exa".to_vec()),
    };
    assert_eq!(ResourceRecord::from_rdata(&broken), None);

    // Other unknown types stay unsupported
    let other = RData::Unknown {
        code: RecordType::from(65280),
        rdata: rdata::NULL::with(b"\x00".to_vec()),
    };
    assert_eq!(ResourceRecord::from_rdata(&other), None);
}

#[test]
fn test_from_rdata_unsupported() {
    let ptr = RData::PTR(rdata::PTR(name("host.example.com.")));
    assert_eq!(ResourceRecord::from_rdata(&ptr), None);
}

#[test]
fn test_record_json() {
    let record = ResourceRecord::Mx(Mx {
        preference: 5,
        exchange: "mx.example.com.".to_string(),
    });
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "MX");
    assert_eq!(json["value"]["preference"], 5);
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_lookup_ns_records_success() {
    let client = create_test_client();
    let nameservers = lookup_ns_records("google.com", &client).await.unwrap();
    assert!(!nameservers.is_empty(), "google.com should have nameservers");
    for ns in &nameservers {
        assert!(ns.contains('.'));
    }
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_lookup_nxdomain_is_empty() {
    let client = create_test_client();
    let records = lookup_a_records("definitely-does-not-exist-12345.invalid", &client)
        .await
        .unwrap();
    assert!(records.is_empty());
    assert!(!client
        .exists_any("definitely-does-not-exist-12345.invalid")
        .await
        .unwrap());
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_www_example_com_is_not_wildcard() {
    use crate::config::ParsePolicy;
    use crate::domain::DomainParser;
    use crate::suffix::BuiltinList;
    use crate::wildcard::WildcardProber;

    let client = create_test_client();
    let parser = DomainParser::new(Arc::new(BuiltinList), ParsePolicy::default());
    let prober = WildcardProber::new(parser, client.probe(Some(RecordKind::A)));
    assert!(!prober.is_wildcard("www.example.com").await.unwrap());
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_query_all_example_com() {
    use crate::config::ParsePolicy;
    use crate::domain::DomainParser;
    use crate::suffix::BuiltinList;

    let client = create_test_client();
    let parser = DomainParser::new(Arc::new(BuiltinList), ParsePolicy::default());
    let (records, errors) = query_all(&client, &parser, "example.com").await;
    assert!(errors.is_empty(), "{errors:?}");
    assert!(records.iter().any(|r| r.kind() == RecordKind::Ns));
}

#[tokio::test]
async fn test_query_all_invalid_name() {
    use crate::config::ParsePolicy;
    use crate::domain::DomainParser;
    use crate::suffix::FallbackList;

    let client = create_test_client();
    let parser = DomainParser::new(Arc::new(FallbackList::new()), ParsePolicy::default());
    let (records, errors) = query_all(&client, &parser, "-bad-.example.com").await;
    assert!(records.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], crate::error_handling::ProbeError::InvalidDomain(_)));
}
