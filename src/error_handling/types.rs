//! Error type definitions.
//!
//! This module defines the error types returned by the decomposer, the DNS
//! client, the wildcard prober and the initialization code.

use std::fmt;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::dns::RecordKind;

/// Why a name failed structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InvalidReason {
    /// Empty, or longer than 253 octets (254 with a trailing dot)
    Length,
    /// The root name "." alone
    Root,
    /// The name starts with a dot
    LeadingDot,
    /// A character outside `[A-Za-z0-9_-]` and `.`
    Character,
    /// A label starts or ends with a hyphen
    Hyphen,
    /// Two consecutive dots
    EmptyLabel,
    /// A label longer than 63 octets
    LabelLength,
    /// A single label without any dot
    BareTld,
    /// Only digits, hyphens and dots, no letter or underscore
    Numeric,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::Length => "name must be 1-253 characters long",
            InvalidReason::Root => "root name is not accepted",
            InvalidReason::LeadingDot => "name starts with a dot",
            InvalidReason::Character => "name contains an invalid character",
            InvalidReason::Hyphen => "label starts or ends with a hyphen",
            InvalidReason::EmptyLabel => "name contains an empty label",
            InvalidReason::LabelLength => "label is longer than 63 characters",
            InvalidReason::BareTld => "name has no dot",
            InvalidReason::Numeric => "name has no letter or underscore",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by domain validation and decomposition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input is not a presentation-format domain name.
    #[error("invalid domain '{name}': {reason}")]
    InvalidDomain {
        /// The rejected input, as given
        name: String,
        /// The first rule it broke
        reason: InvalidReason,
    },
}

impl DomainError {
    pub(crate) fn invalid(name: &str, reason: InvalidReason) -> Self {
        DomainError::InvalidDomain {
            name: name.to_string(),
            reason,
        }
    }

    /// The validation rule that rejected the name.
    pub fn reason(&self) -> InvalidReason {
        match self {
            DomainError::InvalidDomain { reason, .. } => *reason,
        }
    }
}

/// Failure of the DNS collaborator.
///
/// A negative answer (NXDOMAIN, or NOERROR without records) is never an error.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// No answer within the configured timeout.
    #[error("DNS {kind} query for {name} timed out")]
    Timeout {
        /// Queried name
        name: String,
        /// Queried record type
        kind: RecordKind,
    },

    /// The server answered with an error response code (SERVFAIL, REFUSED, ...).
    #[error("DNS {kind} query for {name} answered {code}")]
    ResponseCode {
        /// Queried name
        name: String,
        /// Queried record type
        kind: RecordKind,
        /// Response code as reported by the server
        code: String,
    },

    /// Any other resolver failure (network, malformed response, ...).
    #[error("DNS {kind} query for {name} failed: {source}")]
    Lookup {
        /// Queried name
        name: String,
        /// Queried record type
        kind: RecordKind,
        /// Underlying resolver error
        #[source]
        source: hickory_resolver::error::ResolveError,
    },
}

impl ResolverError {
    /// Returns true if retrying the same query may succeed.
    pub fn is_transient(&self) -> bool {
        !matches!(self, ResolverError::ResponseCode { .. })
    }
}

/// Error returned by the wildcard prober.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probed name failed validation.
    #[error(transparent)]
    InvalidDomain(#[from] DomainError),

    /// A probe query failed; the verdict is unknown.
    #[error(transparent)]
    Resolver(#[from] ResolverError),
}

/// Error loading a Public Suffix List.
#[derive(Error, Debug)]
pub enum SuffixListError {
    /// The list file could not be read.
    #[error("cannot read suffix list {path}: {source}")]
    Io {
        /// Path of the list file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The list contains no rules.
    #[error("suffix list contains no rules")]
    Empty,
}

/// Error describing a network in CIDR notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The text is not `address/prefix`.
    #[error("invalid network '{0}': expected address/prefix")]
    InvalidCidr(String),

    /// The prefix is longer than the address.
    #[error("invalid prefix /{prefix}: must be at most {max}")]
    InvalidPrefix {
        /// Requested prefix length
        prefix: u8,
        /// 32 for IPv4, 128 for IPv6
        max: u8,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error loading the Public Suffix List.
    #[error("Suffix list initialization error: {0}")]
    SuffixListError(#[from] SuffixListError),
}
