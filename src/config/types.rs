//! Configuration types.
//!
//! This module defines the enums and structs that make up the library
//! configuration. The binary fills them from command-line flags; library users
//! construct them directly.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Where the Public Suffix List comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuffixSource {
    /// The list compiled into the `psl` crate.
    Builtin,
    /// A list in the publicsuffix.org text format, read once at startup.
    File(PathBuf),
    /// Only the hard-coded two-label allow-list.
    Fallback,
}

/// Policy switches for domain validation and decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePolicy {
    /// Accept the root name (".") and single-label names ("com").
    ///
    /// Off by default: both are rejected as invalid domains.
    pub accept_root_and_bare_tld: bool,

    /// Treat PRIVATE section suffixes (e.g. "github.io") as the TLD.
    ///
    /// When off, only ICANN suffixes end the walk and the label in front of the
    /// ICANN part is reported as the domain.
    pub private_suffixes: bool,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self {
            accept_root_and_bare_tld: false,
            private_suffixes: true,
        }
    }
}

/// Library configuration.
///
/// Built once at the composition root and passed by reference afterwards.
///
/// # Examples
///
/// ```
/// use domain_probe::config::{Config, SuffixSource};
///
/// let config = Config {
///     suffix_source: SuffixSource::Fallback,
///     concurrent_probes: true,
///     ..Default::default()
/// };
/// assert!(config.nameservers.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Public Suffix List source
    pub suffix_source: SuffixSource,

    /// Validation and decomposition policy
    pub policy: ParsePolicy,

    /// Nameservers to query; empty means the resolver defaults
    pub nameservers: Vec<IpAddr>,

    /// Per-query timeout in seconds
    pub dns_timeout_secs: u64,

    /// Attempts per query made by the resolver
    pub dns_attempts: usize,

    /// Issue wildcard probes concurrently instead of one by one
    pub concurrent_probes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            suffix_source: SuffixSource::Builtin,
            policy: ParsePolicy::default(),
            nameservers: Vec::new(),
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
            concurrent_probes: false,
        }
    }
}
