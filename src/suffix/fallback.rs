//! Minimal suffix list for running without a Public Suffix List.

use std::collections::HashSet;

use super::{last_label, tail_labels, Suffix, SuffixKind, SuffixLookup};
use crate::config::FALLBACK_SUFFIXES;

/// Recognizes the two-label suffixes in [`FALLBACK_SUFFIXES`].
///
/// Every other name gets its rightmost label as an unmanaged suffix.
#[derive(Debug, Clone)]
pub struct FallbackList {
    two_label: HashSet<&'static str>,
}

impl FallbackList {
    pub fn new() -> Self {
        Self {
            two_label: FALLBACK_SUFFIXES.iter().copied().collect(),
        }
    }
}

impl Default for FallbackList {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixLookup for FallbackList {
    fn public_suffix<'a>(&self, name: &'a str) -> Suffix<'a> {
        let tail = tail_labels(name, 2);
        if tail != last_label(name) && self.two_label.contains(tail) {
            return Suffix {
                name: tail,
                kind: SuffixKind::Icann,
            };
        }
        Suffix::unmanaged(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_two_label_suffixes() {
        let list = FallbackList::new();
        for suffix in FALLBACK_SUFFIXES {
            let name = format!("shop.example.{suffix}");
            let found = list.public_suffix(&name);
            assert_eq!(found.name, *suffix);
            assert_eq!(found.kind, SuffixKind::Icann);
        }
    }

    #[test]
    fn test_fallback_exact_suffix() {
        let list = FallbackList::new();
        assert_eq!(list.public_suffix("co.uk").name, "co.uk");
        assert_eq!(list.public_suffix("com.br").name, "com.br");
    }

    #[test]
    fn test_fallback_other_names() {
        let list = FallbackList::new();
        let found = list.public_suffix("www.example.com");
        assert_eq!(found.name, "com");
        assert_eq!(found.kind, SuffixKind::Unmanaged);

        // net.uk is not on the allow-list
        assert_eq!(list.public_suffix("example.net.uk").name, "uk");
        assert_eq!(list.public_suffix("uk").name, "uk");
    }
}
