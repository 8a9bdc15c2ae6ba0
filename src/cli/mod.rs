//! Command-line interface.
//!
//! The binary is a thin wrapper: it parses [`Cli`], initializes the logger and
//! hands over to [`run`].

mod commands;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, LogFormat, LogLevel, ParsePolicy, SuffixSource, DNS_TIMEOUT_SECS};
use crate::dns::RecordKind;

pub use commands::{run, write_ip_report, write_parts};

/// Domain decomposition, wildcard detection and DNS/IP helpers.
#[derive(Debug, Parser)]
#[command(name = "domain_probe", version, about)]
pub struct Cli {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub log_format: LogFormat,

    /// Public Suffix List file (publicsuffix.org format) instead of the built-in list
    #[arg(long, value_name = "FILE", global = true, conflicts_with = "fallback_psl")]
    pub psl: Option<PathBuf>,

    /// Use only the hard-coded two-label suffixes
    #[arg(long, global = true)]
    pub fallback_psl: bool,

    /// Accept the root name and single-label names
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Ignore PRIVATE section suffixes such as github.io
    #[arg(long, global = true)]
    pub icann_only: bool,

    /// Nameserver to query (repeatable); defaults to the resolver's upstreams
    #[arg(long = "nameserver", value_name = "IP", global = true)]
    pub nameservers: Vec<IpAddr>,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split names into subdomain, domain and public suffix
    Parts {
        /// Names to split
        #[arg(required = true)]
        names: Vec<String>,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Check whether a name is covered by a wildcard record
    Wildcard {
        /// Name to probe (must have a subdomain)
        name: String,

        /// Probe this record type only; any type when omitted
        #[arg(long, value_enum)]
        record_type: Option<RecordKind>,

        /// Send all probes at once
        #[arg(long)]
        concurrent: bool,
    },

    /// Query DNS records, leaving out wildcard answers
    Records {
        /// Name to query
        name: String,

        /// Query this record type only; every supported type when omitted
        #[arg(long, value_enum)]
        record_type: Option<RecordKind>,
    },

    /// Classify IP addresses or enumerate networks (address/prefix)
    Ip {
        /// Addresses or networks
        #[arg(required = true)]
        addresses: Vec<String>,
    },
}

impl Cli {
    /// Builds the library configuration from the parsed flags.
    pub fn config(&self) -> Config {
        let suffix_source = match (&self.psl, self.fallback_psl) {
            (Some(path), _) => SuffixSource::File(path.clone()),
            (None, true) => SuffixSource::Fallback,
            (None, false) => SuffixSource::Builtin,
        };

        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            suffix_source,
            policy: ParsePolicy {
                accept_root_and_bare_tld: self.lenient,
                private_suffixes: !self.icann_only,
            },
            nameservers: self.nameservers.clone(),
            dns_timeout_secs: self.timeout_secs,
            concurrent_probes: matches!(
                self.command,
                Command::Wildcard {
                    concurrent: true,
                    ..
                }
            ),
            ..Default::default()
        }
    }
}
