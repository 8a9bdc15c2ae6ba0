//! Configuration constants.
//!
//! This module defines the protocol limits, probe parameters, DNS timeouts and
//! retry parameters used throughout the crate.

// Domain name limits (RFC 1035, RFC 3696)
/// Maximum length of a presentation-format name without the trailing dot.
pub const MAX_DOMAIN_LEN: usize = 253;
/// Maximum length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Characters used to build random probe labels.
pub const PROBE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Two-label suffixes recognized when no Public Suffix List is loaded.
pub const FALLBACK_SUFFIXES: &[&str] = &[
    "co.uk", "com.br", "com.my", "com.tr", "com.pl", "com.tw", "com.ng", "com.au", "co.jp",
    "co.kr", "co.th", "co.za", "org.uk",
];

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Attempts per query made by the resolver itself (per nameserver)
pub const DNS_ATTEMPTS: usize = 2;
/// Port used for custom nameservers
pub const DNS_PORT: u16 = 53;

// Retry strategy for transient DNS failures
/// Initial delay in milliseconds before the first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 200;
/// Backoff multiplier
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Maximum number of attempts (initial + retries)
pub const RETRY_MAX_ATTEMPTS: usize = 3;
