//! domain_probe library: domain name decomposition and DNS wildcard detection
//!
//! This library splits fully-qualified domain names into subdomain, registrable
//! label and public suffix using the Public Suffix List, and detects whether a
//! name sits under a DNS wildcard by probing random sibling labels. A handful
//! of DNS record and IP address helpers round it out.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use domain_probe::{BuiltinList, DomainParser, ParsePolicy, WildcardProber};
//! use domain_probe::initialization::init_dns_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = DomainParser::new(Arc::new(BuiltinList), ParsePolicy::default());
//! let parts = parser.decompose("books.amazon.co.uk")?;
//! assert_eq!((parts.sub.as_str(), parts.domain.as_str(), parts.tld.as_str()),
//!            ("books", "amazon", "co.uk"));
//!
//! let client = init_dns_client(&domain_probe::Config::default());
//! let prober = WildcardProber::new(parser, client.probe(None));
//! println!("wildcard: {}", prober.is_wildcard("www.example.com").await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! DNS functionality requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async context.

pub mod cli;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod ip;
pub mod suffix;
pub mod validators;
pub mod wildcard;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ParsePolicy, SuffixSource};
pub use dns::{query_all, DnsClient, RecordKind, ResourceRecord};
pub use domain::{DomainParser, DomainParts};
pub use error_handling::{DomainError, InvalidReason, ProbeError, ResolverError};
pub use suffix::{BuiltinList, FallbackList, RuleList, SuffixLookup};
pub use wildcard::{NameExists, WildcardProber};
