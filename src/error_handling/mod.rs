//! Error handling and retry strategy.
//!
//! This module provides:
//! - Error type definitions for every component
//! - The retry strategy used for transient DNS failures
//!
//! Errors are split by origin:
//! - **Domain errors**: deterministic validation failures, never retried
//! - **Resolver errors**: environment-dependent failures of the DNS client
//! - **Probe errors**: either of the above, surfaced unchanged by the prober

mod types;

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

pub use types::{
    DomainError, InitializationError, InvalidReason, NetworkError, ProbeError, ResolverError,
    SuffixListError,
};

/// Creates an exponential backoff retry strategy.
///
/// Returns a strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Maximum retries: `RETRY_MAX_ATTEMPTS - 1`
///
/// The iterator yields the delays between attempts, so the total number of
/// attempts made by `tokio_retry::RetryIf` is `RETRY_MAX_ATTEMPTS`.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS.saturating_sub(1))
}
