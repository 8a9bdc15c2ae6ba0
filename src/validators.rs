//! Syntactic validators for network identifiers.
//!
//! These checks never touch the network. Domain names are checked with the
//! same rules as the decomposer (see [`crate::domain::validate`]).

use anyhow::{Context, Result};
use url::{Host, Url};

use crate::config::ParsePolicy;
use crate::domain::validate;

/// Longest local part of an e-mail address (RFC 5321 section 4.5.3.1.1).
const MAX_LOCAL_PART_LEN: usize = 64;
/// Longest e-mail address usable in a forward path.
const MAX_EMAIL_LEN: usize = 254;

/// Parses `url_str` as an absolute URL with a host.
///
/// Domain hosts must be valid domain names; `localhost` and other single
/// labels are accepted.
///
/// # Errors
///
/// Returns an error describing the first problem found.
///
/// # Examples
///
/// ```
/// use domain_probe::validators::parse_url;
///
/// assert!(parse_url("https://example.com/path?q=1").is_ok());
/// assert!(parse_url("example.com").is_err());
/// assert!(parse_url("mailto:someone@example.com").is_err());
/// ```
pub fn parse_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str).with_context(|| format!("Failed to parse URL: {url_str}"))?;

    let lenient = ParsePolicy {
        accept_root_and_bare_tld: true,
        ..Default::default()
    };
    match url.host() {
        Some(Host::Domain(domain)) => validate(domain, &lenient)
            .with_context(|| format!("Invalid host in URL: {url_str}"))?,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        None => anyhow::bail!("URL has no host: {url_str}"),
    }

    Ok(url)
}

/// Returns whether `url_str` is an absolute URL with a valid host.
pub fn is_valid_url(url_str: &str) -> bool {
    parse_url(url_str).is_ok()
}

/// Returns whether `text` is a port number (0-65535).
pub fn is_valid_port(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|c| c.is_ascii_digit()) && text.parse::<u16>().is_ok()
}

/// Returns whether `address` is a plain ASCII e-mail address.
///
/// The local part is a dot-atom (RFC 5322 `atext` separated by single dots);
/// quoted local parts and address literals are not accepted. The domain must
/// be a valid domain name with at least two labels.
pub fn is_valid_email(address: &str) -> bool {
    if address.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };
    is_dot_atom(local) && validate(domain, &ParsePolicy::default()).is_ok()
}

fn is_dot_atom(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.bytes().all(is_atext))
}

fn is_atext(c: u8) -> bool {
    c.is_ascii_alphanumeric() || b"!#$%&'*+-/=?^_`{|}~".contains(&c)
}
