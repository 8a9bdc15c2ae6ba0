//! Wildcard detection against scripted zones.

use std::collections::HashSet;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use domain_probe::dns::RecordKind;
use domain_probe::wildcard::LabelGenerator;
use domain_probe::{
    DomainParser, FallbackList, NameExists, ParsePolicy, ProbeError, ResolverError,
    WildcardProber,
};

/// A zone: names that exist explicitly, plus zones with a `*` record.
struct Zone {
    names: HashSet<String>,
    wildcards: Vec<String>,
    failing: bool,
    queries: AtomicUsize,
}

impl Zone {
    fn new(names: &[&str], wildcards: &[&str]) -> Self {
        Self {
            names: names.iter().map(|s| s.to_string()).collect(),
            wildcards: wildcards.iter().map(|s| s.to_string()).collect(),
            failing: false,
            queries: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(&[], &[])
        }
    }

    fn answer(&self, name: &str) -> Result<bool, ResolverError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ResolverError::ResponseCode {
                name: name.to_string(),
                kind: RecordKind::A,
                code: "SERVFAIL".to_string(),
            });
        }
        if self.names.contains(name) {
            return Ok(true);
        }
        // A wildcard covers names exactly one label below its owner
        Ok(name
            .split_once('.')
            .is_some_and(|(_, parent)| self.wildcards.iter().any(|w| w == parent)))
    }
}

impl NameExists for Zone {
    fn exists(&self, name: &str) -> impl Future<Output = Result<bool, ResolverError>> + Send {
        let result = self.answer(name);
        async move { result }
    }
}

/// Label source that always returns the same letter.
struct Fixed(char);

impl LabelGenerator for Fixed {
    fn label(&self, len: usize) -> String {
        std::iter::repeat(self.0).take(len).collect()
    }
}

fn parser() -> DomainParser {
    DomainParser::new(Arc::new(FallbackList::new()), ParsePolicy::default())
}

#[tokio::test]
async fn test_name_in_wildcard_zone() {
    let zone = Zone::new(&[], &["example.com"]);
    let prober = WildcardProber::new(parser(), &zone);
    assert!(prober.is_wildcard("www.example.com").await.unwrap());
    assert!(prober.is_wildcard_concurrent("www.example.com").await.unwrap());
}

#[tokio::test]
async fn test_real_name_in_plain_zone() {
    let zone = Zone::new(&["www.example.com"], &[]);
    let prober = WildcardProber::new(parser(), &zone);
    assert!(!prober.is_wildcard("www.example.com").await.unwrap());
    // The first random sibling is already missing
    assert_eq!(zone.queries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_registrable_domain_is_never_probed() {
    let zone = Zone::new(&[], &["com"]);
    let prober = WildcardProber::new(parser(), &zone);
    assert!(!prober.is_wildcard("example.com").await.unwrap());
    assert!(!prober.is_wildcard("amazon.co.uk").await.unwrap());
    assert_eq!(zone.queries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_colliding_label_is_still_a_wildcard() {
    // The fixed probe label happens to exist; the zone is still a wildcard
    let zone = Zone::new(&[], &["example.com"]);
    let prober = WildcardProber::with_labels(parser(), &zone, Fixed('z'));
    assert!(prober.is_wildcard("a.example.com").await.unwrap());
}

#[tokio::test]
async fn test_invalid_name_and_resolver_failure() {
    let zone = Zone::failing();
    let prober = WildcardProber::new(parser(), &zone);

    assert!(matches!(
        prober.is_wildcard("bad..example.com").await,
        Err(ProbeError::InvalidDomain(_))
    ));
    assert!(matches!(
        prober.is_wildcard("www.example.com").await,
        Err(ProbeError::Resolver(ResolverError::ResponseCode { .. }))
    ));
    assert!(matches!(
        prober.is_wildcard_concurrent("www.example.com").await,
        Err(ProbeError::Resolver(_))
    ));
}
