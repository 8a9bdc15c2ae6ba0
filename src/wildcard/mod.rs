//! Wildcard DNS detection.
//!
//! A zone is treated as a wildcard zone when randomly generated names in it
//! resolve. The prober replaces the first label of a name with random labels
//! sized to fill the remaining room in the 253-character budget and asks the
//! resolver whether each candidate exists:
//! - every candidate exists: wildcard
//! - the first candidate that does not exist ends probing with a negative
//! - a resolver error ends probing with that error
//!
//! When the first label can only be one character long, all 36 possible
//! labels are probed instead of random samples.

mod labels;

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::config::{MAX_DOMAIN_LEN, MAX_LABEL_LEN, PROBE_CHARSET};
use crate::domain::{clean, DomainParser};
use crate::error_handling::{ProbeError, ResolverError};

pub use labels::{LabelGenerator, RandomLabels};

/// Existence check for a single name.
///
/// `Ok(false)` means the name does not exist (NXDOMAIN, or NOERROR without
/// answers). Anything that prevents a definite answer is an error.
pub trait NameExists: Send + Sync {
    fn exists(&self, name: &str) -> impl Future<Output = Result<bool, ResolverError>> + Send;
}

impl<T: NameExists + ?Sized> NameExists for &T {
    fn exists(&self, name: &str) -> impl Future<Output = Result<bool, ResolverError>> + Send {
        (**self).exists(name)
    }
}

/// Room left for the first label of a name.
///
/// `253 - name_len + first_label_len`, so a label of this length keeps the
/// candidate within the maximum name length.
pub fn part_size(name_len: usize, first_label_len: usize) -> usize {
    MAX_DOMAIN_LEN.saturating_sub(name_len) + first_label_len
}

/// Number of random samples to probe for a first label of `part_size`.
///
/// Short labels collide more often with real names, so they get more samples.
pub fn sample_count(part_size: usize) -> usize {
    match part_size {
        s if s > 31 => 3,
        s if s > 15 => 5,
        s if s > 8 => 10,
        _ => 15,
    }
}

/// Probes names for wildcard DNS answers.
#[derive(Debug, Clone)]
pub struct WildcardProber<E, G = RandomLabels> {
    parser: DomainParser,
    resolver: E,
    labels: G,
}

impl<E: NameExists> WildcardProber<E, RandomLabels> {
    pub fn new(parser: DomainParser, resolver: E) -> Self {
        Self::with_labels(parser, resolver, RandomLabels)
    }
}

impl<E: NameExists, G: LabelGenerator> WildcardProber<E, G> {
    /// Creates a prober with a custom label source.
    pub fn with_labels(parser: DomainParser, resolver: E, labels: G) -> Self {
        Self {
            parser,
            resolver,
            labels,
        }
    }

    /// Returns whether `name` belongs to a wildcard zone.
    ///
    /// Candidates are probed one at a time and probing stops at the first
    /// negative answer.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidDomain` if `name` fails validation and
    /// `ProbeError::Resolver` as soon as any probe fails.
    pub async fn is_wildcard(&self, name: &str) -> Result<bool, ProbeError> {
        let Some(candidates) = self.candidates(name)? else {
            return Ok(false);
        };

        for candidate in &candidates {
            if !self.resolver.exists(candidate).await? {
                log::debug!("{candidate} does not exist, {name} is not a wildcard");
                return Ok(false);
            }
        }

        log::debug!("All {} probes exist, {name} is a wildcard", candidates.len());
        Ok(true)
    }

    /// Same verdict as [`is_wildcard`](Self::is_wildcard), with every probe
    /// issued at once.
    ///
    /// The first negative answer or error cancels the probes still in flight.
    pub async fn is_wildcard_concurrent(&self, name: &str) -> Result<bool, ProbeError> {
        let Some(candidates) = self.candidates(name)? else {
            return Ok(false);
        };

        let token = CancellationToken::new();
        let mut pending: FuturesUnordered<_> = candidates
            .iter()
            .map(|candidate| {
                let token = token.clone();
                async move {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => None,
                        result = self.resolver.exists(candidate) => Some((candidate, result)),
                    }
                }
            })
            .collect();

        while let Some(outcome) = pending.next().await {
            match outcome {
                Some((_, Ok(true))) | None => {}
                Some((candidate, Ok(false))) => {
                    log::debug!("{candidate} does not exist, {name} is not a wildcard");
                    token.cancel();
                    return Ok(false);
                }
                Some((candidate, Err(e))) => {
                    log::warn!("Wildcard probe {candidate} failed: {e}");
                    token.cancel();
                    return Err(e.into());
                }
            }
        }

        log::debug!("All {} probes exist, {name} is a wildcard", candidates.len());
        Ok(true)
    }

    /// Builds the probe names for `name`.
    ///
    /// Returns `None` if `name` has no subdomain, since only names below a
    /// registrable domain can be covered by a wildcard record.
    fn candidates(&self, name: &str) -> Result<Option<Vec<String>>, ProbeError> {
        let parts = self.parser.decompose(name)?;
        if !parts.has_sub() {
            log::debug!("{name} has no subdomain, skipping wildcard probes");
            return Ok(None);
        }

        let cleaned = clean(name);
        let (first, rest) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
        let size = part_size(cleaned.len(), first.len());

        let candidates: Vec<String> = if size == 1 {
            PROBE_CHARSET
                .iter()
                .map(|&c| format!("{}.{rest}", c as char))
                .collect()
        } else {
            let size = size.min(MAX_LABEL_LEN);
            (0..sample_count(size))
                .map(|_| format!("{}.{rest}", self.labels.label(size)))
                .collect()
        };

        log::debug!(
            "Probing {name} with {} labels of length {}",
            candidates.len(),
            size.min(MAX_LABEL_LEN)
        );
        Ok(Some(candidates))
    }
}
