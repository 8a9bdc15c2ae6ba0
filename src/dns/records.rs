//! Typed DNS record queries.
//!
//! One function per supported record type. Each returns an empty vector when
//! the name does not exist or has no records of that type, and an error when
//! no definite answer could be obtained.

use std::net::{Ipv4Addr, Ipv6Addr};

use super::{Caa, DnsClient, Mx, RecordKind, ResourceRecord, Soa, Srv};
use crate::error_handling::ResolverError;

/// Queries A (IPv4 address) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `client` - The DNS client
pub async fn lookup_a_records(
    domain: &str,
    client: &DnsClient,
) -> Result<Vec<Ipv4Addr>, ResolverError> {
    let records = client.lookup(domain, RecordKind::A).await?;
    Ok(records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::A(ip) => Some(ip),
            _ => None,
        })
        .collect())
}

/// Queries AAAA (IPv6 address) records for a domain.
pub async fn lookup_aaaa_records(
    domain: &str,
    client: &DnsClient,
) -> Result<Vec<Ipv6Addr>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Aaaa).await?;
    Ok(records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::Aaaa(ip) => Some(ip),
            _ => None,
        })
        .collect())
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Returns
///
/// The mail exchangers sorted by preference (lower = higher priority).
pub async fn lookup_mx_records(domain: &str, client: &DnsClient) -> Result<Vec<Mx>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Mx).await?;
    let mut mx_records: Vec<Mx> = records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::Mx(mx) => Some(mx),
            _ => None,
        })
        .collect();
    mx_records.sort_by_key(|mx| mx.preference);
    Ok(mx_records)
}

/// Queries NS (nameserver) records for a domain.
///
/// # Returns
///
/// Nameserver hostnames in presentation format (with the trailing dot).
pub async fn lookup_ns_records(
    domain: &str,
    client: &DnsClient,
) -> Result<Vec<String>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Ns).await?;
    Ok(records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::Ns(ns) => Some(ns),
            _ => None,
        })
        .collect())
}

/// Queries TXT (text) records for a domain.
///
/// The character strings of each record are joined, so one TXT record gives
/// one string.
pub async fn lookup_txt_records(
    domain: &str,
    client: &DnsClient,
) -> Result<Vec<String>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Txt).await?;
    Ok(records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::Txt(txt) => Some(txt),
            _ => None,
        })
        .collect())
}

/// Queries CAA (Certification Authority Authorization) records for a domain.
pub async fn lookup_caa_records(
    domain: &str,
    client: &DnsClient,
) -> Result<Vec<Caa>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Caa).await?;
    Ok(records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::Caa(caa) => Some(caa),
            _ => None,
        })
        .collect())
}

/// Queries SRV records, e.g. for `_sip._tcp.example.com`.
///
/// # Returns
///
/// Targets sorted by priority, then by descending weight.
pub async fn lookup_srv_records(
    domain: &str,
    client: &DnsClient,
) -> Result<Vec<Srv>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Srv).await?;
    let mut srv_records: Vec<Srv> = records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::Srv(srv) => Some(srv),
            _ => None,
        })
        .collect();
    srv_records.sort_by(|a, b| a.priority.cmp(&b.priority).then(b.weight.cmp(&a.weight)));
    Ok(srv_records)
}

/// Queries the SOA record of a zone.
///
/// # Returns
///
/// `None` if the name has no SOA record (it is not a zone apex).
pub async fn lookup_soa_record(
    domain: &str,
    client: &DnsClient,
) -> Result<Option<Soa>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Soa).await?;
    Ok(records.into_iter().find_map(|record| match record {
        ResourceRecord::Soa(soa) => Some(soa),
        _ => None,
    }))
}

/// Queries CNAME records for a domain.
pub async fn lookup_cname_records(
    domain: &str,
    client: &DnsClient,
) -> Result<Vec<String>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Cname).await?;
    Ok(records
        .into_iter()
        .filter_map(|record| match record {
            ResourceRecord::Cname(target) => Some(target),
            _ => None,
        })
        .collect())
}

/// Queries the DNAME record of a domain.
///
/// # Returns
///
/// The redirection target, or `None` if the name has no DNAME record.
pub async fn lookup_dname_record(
    domain: &str,
    client: &DnsClient,
) -> Result<Option<String>, ResolverError> {
    let records = client.lookup(domain, RecordKind::Dname).await?;
    Ok(records.into_iter().find_map(|record| match record {
        ResourceRecord::Dname(target) => Some(target),
        _ => None,
    }))
}
