//! Resolver wrapper with negative-answer handling and retries.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use tokio_retry::RetryIf;

use super::{RecordKind, ResourceRecord};
use crate::error_handling::{get_retry_strategy, ResolverError};
use crate::wildcard::NameExists;

/// Shared DNS client.
///
/// Cloning is cheap; clones share the underlying resolver and its cache.
#[derive(Clone)]
pub struct DnsClient {
    resolver: Arc<TokioAsyncResolver>,
}

impl std::fmt::Debug for DnsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsClient").finish_non_exhaustive()
    }
}

impl DnsClient {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }

    /// Queries `name` for records of `kind`.
    ///
    /// Only records of the queried type are returned; CNAMEs followed on the
    /// way are dropped unless `kind` is `Cname`.
    ///
    /// # Returns
    ///
    /// The records found, or an empty vector on NXDOMAIN or a NOERROR answer
    /// without records.
    ///
    /// # Errors
    ///
    /// Returns a `ResolverError` for timeouts, error response codes and
    /// transport failures. Transient failures are retried with exponential
    /// backoff before giving up.
    pub async fn lookup(
        &self,
        name: &str,
        kind: RecordKind,
    ) -> Result<Vec<ResourceRecord>, ResolverError> {
        let Some(lookup) = self.lookup_with_retry(name, kind).await? else {
            return Ok(Vec::new());
        };
        Ok(lookup
            .iter()
            .filter_map(ResourceRecord::from_rdata)
            .filter(|record| record.kind() == kind)
            .collect())
    }

    /// Returns whether `name` has any answer for `kind`.
    ///
    /// NXDOMAIN is a negative answer here, not an error.
    pub async fn exists(&self, name: &str, kind: RecordKind) -> Result<bool, ResolverError> {
        Ok(self
            .lookup_with_retry(name, kind)
            .await?
            .is_some_and(|lookup| lookup.iter().next().is_some()))
    }

    /// Returns whether `name` has an answer for any of the types in
    /// [`RecordKind::EXISTENCE_ORDER`].
    ///
    /// Stops at the first type with an answer and at the first error.
    pub async fn exists_any(&self, name: &str) -> Result<bool, ResolverError> {
        for kind in RecordKind::EXISTENCE_ORDER {
            if self.exists(name, kind).await? {
                log::debug!("{name} has {kind} records");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Existence probe for a record type, or for any type with `None`.
    pub fn probe(&self, kind: Option<RecordKind>) -> RecordProbe {
        RecordProbe {
            client: self.clone(),
            kind,
        }
    }

    async fn lookup_with_retry(
        &self,
        name: &str,
        kind: RecordKind,
    ) -> Result<Option<Lookup>, ResolverError> {
        RetryIf::start(
            get_retry_strategy(),
            || self.lookup_once(name, kind),
            should_retry,
        )
        .await
    }

    async fn lookup_once(
        &self,
        name: &str,
        kind: RecordKind,
    ) -> Result<Option<Lookup>, ResolverError> {
        match self.resolver.lookup(name, kind.record_type()).await {
            Ok(lookup) => Ok(Some(lookup)),
            Err(e) => classify(name, kind, e).map(|()| None),
        }
    }
}

fn should_retry(error: &ResolverError) -> bool {
    let transient = error.is_transient();
    if transient {
        log::debug!("Retrying after transient failure: {error}");
    }
    transient
}

/// Maps a resolver failure to a negative answer (`Ok`) or an error.
fn classify(name: &str, kind: RecordKind, error: ResolveError) -> Result<(), ResolverError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NoError | ResponseCode::NXDomain => Ok(()),
            code => {
                log::warn!("{kind} lookup for {name} answered {code}");
                Err(ResolverError::ResponseCode {
                    name: name.to_string(),
                    kind,
                    code: code.to_string(),
                })
            }
        },
        ResolveErrorKind::Timeout => {
            log::warn!("{kind} lookup timed out for {name}");
            Err(ResolverError::Timeout {
                name: name.to_string(),
                kind,
            })
        }
        _ => {
            log::warn!("Failed to lookup {kind} records for {name}: {error}");
            Err(ResolverError::Lookup {
                name: name.to_string(),
                kind,
                source: error,
            })
        }
    }
}

/// [`NameExists`] over a [`DnsClient`].
#[derive(Debug, Clone)]
pub struct RecordProbe {
    client: DnsClient,
    kind: Option<RecordKind>,
}

impl NameExists for RecordProbe {
    fn exists(&self, name: &str) -> impl Future<Output = Result<bool, ResolverError>> + Send {
        async move {
            match self.kind {
                Some(kind) => self.client.exists(name, kind).await,
                None => self.client.exists_any(name).await,
            }
        }
    }
}
