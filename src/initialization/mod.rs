//! Application initialization and resource setup.
//!
//! This module builds the shared resources once, at the composition root:
//! - Logger
//! - Public Suffix List
//! - DNS resolver
//!
//! Everything downstream receives these by argument.

mod logger;
mod resolver;
mod suffix_list;

use crate::config::Config;
use crate::dns::DnsClient;
use crate::domain::DomainParser;
use crate::error_handling::InitializationError;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
pub use suffix_list::init_suffix_list;

/// Builds the domain parser for `config`.
///
/// # Errors
///
/// Returns `InitializationError::SuffixListError` if the suffix list cannot be
/// loaded.
pub fn init_parser(config: &Config) -> Result<DomainParser, InitializationError> {
    let suffixes = init_suffix_list(&config.suffix_source)?;
    Ok(DomainParser::new(suffixes, config.policy))
}

/// Builds the DNS client for `config`.
pub fn init_dns_client(config: &Config) -> DnsClient {
    DnsClient::new(init_resolver(config))
}
