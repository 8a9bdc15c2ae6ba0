//! DNS record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Typed queries for A, AAAA, MX, NS, TXT, CAA, SRV, SOA and CNAME records
//! - Existence checks per record type and across all types
//! - [`query_all`], which leaves out answers from wildcarded names
//!
//! NXDOMAIN and empty answers are negative results, never errors. Transient
//! failures are retried with exponential backoff.

mod all;
mod client;
mod records;
mod types;

// Re-export public API
pub use all::query_all;
pub use client::{DnsClient, RecordProbe};
pub use records::{
    lookup_a_records, lookup_aaaa_records, lookup_caa_records, lookup_cname_records,
    lookup_dname_record, lookup_mx_records, lookup_ns_records, lookup_soa_record,
    lookup_srv_records, lookup_txt_records,
};
pub use types::{Caa, Mx, RecordKind, ResourceRecord, Soa, Srv, DNAME_TYPE_CODE};

#[cfg(test)]
mod tests;
