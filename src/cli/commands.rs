//! Subcommand implementations.

use std::io::Write;
use std::net::IpAddr;

use anyhow::{Context, Result};

use super::{Cli, Command};
use crate::dns::{query_all, DnsClient, RecordKind};
use crate::domain::DomainParser;
use crate::initialization::{init_dns_client, init_parser};
use crate::ip::{reserved_range, Network};
use crate::wildcard::WildcardProber;

/// Runs the selected subcommand, printing results to stdout.
///
/// # Returns
///
/// `Ok(true)` if every input was handled, `Ok(false)` if some inputs failed
/// (they are reported on stderr).
///
/// # Errors
///
/// Returns an error if initialization fails or a single-name query fails.
pub async fn run(cli: &Cli) -> Result<bool> {
    let config = cli.config();
    let stdout = std::io::stdout();

    match &cli.command {
        Command::Parts { names, json } => {
            let parser = init_parser(&config).context("Failed to load suffix list")?;
            write_parts(&parser, names, *json, &mut stdout.lock())
        }
        Command::Wildcard {
            name, record_type, ..
        } => {
            let parser = init_parser(&config).context("Failed to load suffix list")?;
            let client = init_dns_client(&config);
            let prober = WildcardProber::new(parser, client.probe(*record_type));
            let verdict = if config.concurrent_probes {
                prober.is_wildcard_concurrent(name).await
            } else {
                prober.is_wildcard(name).await
            }
            .with_context(|| format!("Wildcard check failed for {name}"))?;

            let verdict = if verdict { "wildcard" } else { "not wildcard" };
            writeln!(stdout.lock(), "{name}\t{verdict}")?;
            Ok(true)
        }
        Command::Records { name, record_type } => {
            let parser = init_parser(&config).context("Failed to load suffix list")?;
            let client = init_dns_client(&config);
            match record_type {
                Some(kind) => records_of_kind(&client, parser, name, *kind).await,
                None => all_records(&client, &parser, name).await,
            }
        }
        Command::Ip { addresses } => write_ip_report(addresses, &mut stdout.lock()),
    }
}

async fn records_of_kind(
    client: &DnsClient,
    parser: DomainParser,
    name: &str,
    kind: RecordKind,
) -> Result<bool> {
    let records = client
        .lookup(name, kind)
        .await
        .with_context(|| format!("{kind} query failed for {name}"))?;
    if records.is_empty() {
        return Ok(true);
    }

    let prober = WildcardProber::new(parser, client.probe(Some(kind)));
    if prober
        .is_wildcard(name)
        .await
        .with_context(|| format!("Wildcard check failed for {name}"))?
    {
        log::info!("{name} is covered by a {kind} wildcard, answers left out");
        return Ok(true);
    }

    let mut out = std::io::stdout().lock();
    for record in records {
        writeln!(out, "{name}\t{kind}\t{record}")?;
    }
    Ok(true)
}

async fn all_records(client: &DnsClient, parser: &DomainParser, name: &str) -> Result<bool> {
    let (records, errors) = query_all(client, parser, name).await;

    let mut out = std::io::stdout().lock();
    for record in &records {
        writeln!(out, "{name}\t{}\t{record}", record.kind())?;
    }
    for error in &errors {
        eprintln!("domain_probe: {error}");
    }
    Ok(errors.is_empty())
}

/// Writes the decomposition of each name to `out`.
///
/// Text output is tab-separated `name sub domain tld`; JSON output is one
/// object per line. Invalid names are reported on stderr in text mode and as
/// `{"name":..,"error":..}` objects in JSON mode.
pub fn write_parts(
    parser: &DomainParser,
    names: &[String],
    json: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let mut all_ok = true;
    for name in names {
        match (parser.decompose(name), json) {
            (Ok(parts), true) => {
                let line = serde_json::json!({
                    "name": name,
                    "sub": parts.sub,
                    "domain": parts.domain,
                    "tld": parts.tld,
                });
                writeln!(out, "{line}")?;
            }
            (Ok(parts), false) => {
                writeln!(out, "{name}\t{}\t{}\t{}", parts.sub, parts.domain, parts.tld)?;
            }
            (Err(e), true) => {
                all_ok = false;
                let line = serde_json::json!({ "name": name, "error": e.to_string() });
                writeln!(out, "{line}")?;
            }
            (Err(e), false) => {
                all_ok = false;
                eprintln!("domain_probe: {e}");
            }
        }
    }
    Ok(all_ok)
}

/// Writes a line per address or network to `out`.
///
/// Addresses are classified as reserved (with the registry description) or
/// public. Networks in `address/prefix` notation are summarized by their
/// first, last and usable address count.
pub fn write_ip_report(inputs: &[String], out: &mut impl Write) -> Result<bool> {
    let mut all_ok = true;
    for input in inputs {
        if input.contains('/') {
            match Network::from_cidr(input) {
                Ok(network) => {
                    let last = network
                        .last
                        .map(|ip| ip.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let usable = network.usable.map(|u| u.remaining()).unwrap_or(0);
                    writeln!(
                        out,
                        "{input}\tfirst={}\tlast={last}\tusable={usable}",
                        network.first
                    )?;
                }
                Err(e) => {
                    all_ok = false;
                    eprintln!("domain_probe: {e}");
                }
            }
            continue;
        }

        match input.parse::<IpAddr>() {
            Ok(ip) => {
                let version = if ip.is_ipv4() { "IPv4" } else { "IPv6" };
                match reserved_range(ip) {
                    Some(range) => writeln!(
                        out,
                        "{ip}\t{version}\treserved\t{}/{} {}",
                        range.network, range.prefix, range.description
                    )?,
                    None => writeln!(out, "{ip}\t{version}\tpublic")?,
                }
            }
            Err(_) => {
                all_ok = false;
                eprintln!("domain_probe: invalid IP address '{input}'");
            }
        }
    }
    Ok(all_ok)
}
