//! Domain name validation and decomposition.
//!
//! This module splits a fully-qualified domain name into subdomain,
//! registrable domain and public suffix using a Public Suffix List.
//!
//! Key items:
//! - [`DomainParser::decompose`] - validates and splits a name into [`DomainParts`]
//! - [`validate`] - structural validation only
//! - [`clean`] - normalization (one trailing dot removed, lower case)

mod validate;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::ParsePolicy;
use crate::error_handling::DomainError;
use crate::suffix::{Suffix, SuffixKind, SuffixLookup};

pub use validate::{is_valid_label, is_wildcard_name, validate};

/// The parts of a domain name.
///
/// Joining the non-empty parts with dots gives back the cleaned input:
/// `books.amazon.co.uk` is `{sub: "books", domain: "amazon", tld: "co.uk"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DomainParts {
    /// Public suffix (e.g. "com", "co.uk"). Empty only for the root name.
    pub tld: String,
    /// Registrable label (e.g. "example"). Empty if the name is a suffix.
    pub domain: String,
    /// Everything left of the registrable label (e.g. "www"). Can be empty.
    pub sub: String,
}

impl DomainParts {
    /// Returns whether the name has a subdomain part.
    pub fn has_sub(&self) -> bool {
        !self.sub.is_empty()
    }

    /// The registrable domain, e.g. "amazon.co.uk".
    ///
    /// Returns the suffix alone if the name is a suffix.
    pub fn registrable(&self) -> String {
        if self.domain.is_empty() {
            self.tld.clone()
        } else {
            format!("{}.{}", self.domain, self.tld)
        }
    }
}

impl fmt::Display for DomainParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [&self.sub, &self.domain, &self.tld] {
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str(".")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// Removes one trailing dot and lower-cases `name`.
pub fn clean(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

/// Where the right-to-left suffix walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk<'a> {
    SeekingSuffix(&'a str),
    FoundIcannBoundary(&'a str),
    FoundUnmanaged(&'a str),
}

/// Validates and decomposes domain names against a suffix list.
///
/// The parser is immutable; clone it freely; the suffix list is shared.
#[derive(Clone)]
pub struct DomainParser {
    suffixes: Arc<dyn SuffixLookup>,
    policy: ParsePolicy,
}

impl fmt::Debug for DomainParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainParser")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl DomainParser {
    pub fn new(suffixes: Arc<dyn SuffixLookup>, policy: ParsePolicy) -> Self {
        Self { suffixes, policy }
    }

    pub fn policy(&self) -> &ParsePolicy {
        &self.policy
    }

    /// Checks that `name` is a valid domain name under this parser's policy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDomain` with the first broken rule.
    pub fn validate(&self, name: &str) -> Result<(), DomainError> {
        validate(name, &self.policy)
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.validate(name).is_ok()
    }

    /// Validates `name` and splits it into subdomain, domain and suffix.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDomain` if `name` fails validation. No
    /// partial result is ever returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use domain_probe::config::ParsePolicy;
    /// use domain_probe::domain::DomainParser;
    /// use domain_probe::suffix::FallbackList;
    ///
    /// let parser = DomainParser::new(Arc::new(FallbackList::new()), ParsePolicy::default());
    /// let parts = parser.decompose("books.amazon.co.uk").unwrap();
    /// assert_eq!(parts.sub, "books");
    /// assert_eq!(parts.domain, "amazon");
    /// assert_eq!(parts.tld, "co.uk");
    /// ```
    pub fn decompose(&self, name: &str) -> Result<DomainParts, DomainError> {
        self.validate(name)?;

        let cleaned = clean(name);
        if cleaned.is_empty() {
            // Root name, only reachable with accept_root_and_bare_tld
            return Ok(DomainParts::default());
        }

        let tld = self.find_suffix(&cleaned);
        if tld.len() == cleaned.len() {
            return Ok(DomainParts {
                tld: tld.to_string(),
                ..Default::default()
            });
        }

        // Everything left of ".<tld>"
        let rest = &cleaned[..cleaned.len() - tld.len() - 1];
        let (sub, domain) = match rest.rfind('.') {
            Some(dot) => (&rest[..dot], &rest[dot + 1..]),
            None => ("", rest),
        };

        Ok(DomainParts {
            tld: tld.to_string(),
            domain: domain.to_string(),
            sub: sub.to_string(),
        })
    }

    /// Walks the suffix list from the right until a managed suffix is found.
    ///
    /// Private suffixes end the walk only when the policy allows them;
    /// otherwise their leftmost label is dropped and the walk continues inwards.
    fn find_suffix<'a>(&self, name: &'a str) -> &'a str {
        let mut state = Walk::SeekingSuffix(name);
        loop {
            state = match state {
                Walk::SeekingSuffix(candidate) => self.step(candidate),
                Walk::FoundIcannBoundary(tld) | Walk::FoundUnmanaged(tld) => return tld,
            };
        }
    }

    fn step<'a>(&self, candidate: &'a str) -> Walk<'a> {
        let Suffix { name, kind } = self.suffixes.public_suffix(candidate);
        match kind {
            SuffixKind::Icann => Walk::FoundIcannBoundary(name),
            SuffixKind::Private if self.policy.private_suffixes => Walk::FoundIcannBoundary(name),
            _ => match name.find('.') {
                Some(dot) => Walk::SeekingSuffix(&name[dot + 1..]),
                None => Walk::FoundUnmanaged(name),
            },
        }
    }

    /// Returns the public suffix of `name`.
    pub fn tld(&self, name: &str) -> Result<String, DomainError> {
        Ok(self.decompose(name)?.tld)
    }

    /// Returns the registrable domain of `name` (e.g. "example.com").
    ///
    /// Returns `None` if `name` is itself a suffix.
    pub fn registrable_domain(&self, name: &str) -> Result<Option<String>, DomainError> {
        let parts = self.decompose(name)?;
        if parts.domain.is_empty() {
            return Ok(None);
        }
        Ok(Some(parts.registrable()))
    }

    /// Returns the subdomain part of `name`, empty if there is none.
    pub fn sub(&self, name: &str) -> Result<String, DomainError> {
        Ok(self.decompose(name)?.sub)
    }

    /// Returns whether `name` is valid and has a subdomain.
    pub fn has_sub(&self, name: &str) -> bool {
        self.decompose(name)
            .map(|parts| parts.has_sub())
            .unwrap_or(false)
    }
}
