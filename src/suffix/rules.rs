//! Public Suffix List text format.
//!
//! Parses the format published at <https://publicsuffix.org/list/>: one rule
//! per line, `//` comments, `*.` wildcard rules, `!` exception rules, and the
//! `===BEGIN ICANN DOMAINS===` / `===BEGIN PRIVATE DOMAINS===` section markers.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use super::{Suffix, SuffixKind, SuffixLookup};
use crate::error_handling::SuffixListError;

const BEGIN_ICANN: &str = "===BEGIN ICANN DOMAINS===";
const BEGIN_PRIVATE: &str = "===BEGIN PRIVATE DOMAINS===";

/// A suffix list loaded from rules.
///
/// Matching follows the publicsuffix.org algorithm: an exception rule always
/// prevails, otherwise the rule with the most labels wins, otherwise the
/// implicit `*` rule makes the rightmost label the suffix.
#[derive(Debug, Default, Clone)]
pub struct RuleList {
    exact: HashMap<String, SuffixKind>,
    // keyed by the part after "*."
    wildcard: HashMap<String, SuffixKind>,
    // keyed by the part after "!"
    exception: HashMap<String, SuffixKind>,
}

impl RuleList {
    /// Parses a list in the publicsuffix.org text format.
    ///
    /// Rules before the first section marker are treated as ICANN rules.
    ///
    /// # Errors
    ///
    /// Returns `SuffixListError::Empty` if the text contains no rule.
    pub fn parse(text: &str) -> Result<Self, SuffixListError> {
        let mut list = RuleList::default();
        let mut section = SuffixKind::Icann;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix("//") {
                if comment.contains(BEGIN_PRIVATE) {
                    section = SuffixKind::Private;
                } else if comment.contains(BEGIN_ICANN) {
                    section = SuffixKind::Icann;
                }
                continue;
            }

            // Only the first token of a line is the rule
            let Some(rule) = line.split_whitespace().next() else {
                continue;
            };
            list.insert(rule, section);
        }

        if list.is_empty() {
            return Err(SuffixListError::Empty);
        }

        log::debug!(
            "Loaded suffix list: {} rules, {} wildcard, {} exception",
            list.exact.len(),
            list.wildcard.len(),
            list.exception.len()
        );
        Ok(list)
    }

    /// Reads and parses a list file.
    ///
    /// # Errors
    ///
    /// Returns `SuffixListError::Io` if the file cannot be read, or
    /// `SuffixListError::Empty` if it contains no rule.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SuffixListError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SuffixListError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Adds a single rule (`example`, `*.example` or `!www.example`).
    pub fn insert(&mut self, rule: &str, kind: SuffixKind) {
        let rule = rule.trim_end_matches('.').to_ascii_lowercase();
        if let Some(base) = rule.strip_prefix('!') {
            self.exception.insert(base.to_string(), kind);
        } else if let Some(base) = rule.strip_prefix("*.") {
            self.wildcard.insert(base.to_string(), kind);
        } else if !rule.is_empty() {
            self.exact.insert(rule, kind);
        }
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len() + self.exception.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for RuleList {
    type Err = SuffixListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Tails of `name` from the rightmost label outwards: "c", "b.c", "a.b.c".
fn reverse_tails(name: &str) -> impl Iterator<Item = &str> {
    name.rmatch_indices('.')
        .map(move |(dot, _)| &name[dot + 1..])
        .chain(std::iter::once(name))
}

impl SuffixLookup for RuleList {
    fn public_suffix<'a>(&self, name: &'a str) -> Suffix<'a> {
        if name.is_empty() {
            return Suffix::unmanaged(name);
        }

        let mut best: Option<Suffix<'a>> = None;
        let mut parent: Option<&'a str> = None;

        for candidate in reverse_tails(name) {
            if let Some(&kind) = self.exception.get(candidate) {
                // "!www.ck" makes "ck" the suffix of "www.ck"
                return match parent {
                    Some(parent) => Suffix { name: parent, kind },
                    None => Suffix::unmanaged(name),
                };
            }

            if let Some(&kind) = self.exact.get(candidate) {
                best = Some(Suffix {
                    name: candidate,
                    kind,
                });
            }

            if let Some(&kind) = parent.and_then(|p| self.wildcard.get(p)) {
                best = Some(Suffix {
                    name: candidate,
                    kind,
                });
            }

            parent = Some(candidate);
        }

        best.unwrap_or_else(|| Suffix::unmanaged(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
// This Source Code Form is subject to the terms of the Mozilla Public License.

// ===BEGIN ICANN DOMAINS===
com
uk
co.uk
org.uk
jp
kawasaki.jp
*.kawasaki.jp
!city.kawasaki.jp
*.ck
!www.ck
// ===END ICANN DOMAINS===

// ===BEGIN PRIVATE DOMAINS===
blogspot.co.uk
dyndns.org   some trailing comment
// ===END PRIVATE DOMAINS===
";

    fn sample() -> RuleList {
        RuleList::parse(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_counts_rules() {
        let list = sample();
        assert_eq!(list.len(), 12);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_parse_empty_list_fails() {
        let result = RuleList::parse("// only a comment\n\n");
        assert!(matches!(result, Err(SuffixListError::Empty)));
    }

    #[test]
    fn test_exact_rule() {
        let list = sample();
        let suffix = list.public_suffix("www.example.co.uk");
        assert_eq!(suffix.name, "co.uk");
        assert_eq!(suffix.kind, SuffixKind::Icann);
    }

    #[test]
    fn test_longest_rule_wins() {
        let list = sample();
        assert_eq!(list.public_suffix("example.uk").name, "uk");
        assert_eq!(list.public_suffix("example.co.uk").name, "co.uk");
    }

    #[test]
    fn test_wildcard_rule() {
        let list = sample();
        let suffix = list.public_suffix("shop.example.ck");
        assert_eq!(suffix.name, "example.ck");
        assert_eq!(suffix.kind, SuffixKind::Icann);

        let suffix = list.public_suffix("www.shop.kawasaki.jp");
        assert_eq!(suffix.name, "shop.kawasaki.jp");
    }

    #[test]
    fn test_exception_rule() {
        let list = sample();
        assert_eq!(list.public_suffix("www.ck").name, "ck");
        assert_eq!(list.public_suffix("a.city.kawasaki.jp").name, "kawasaki.jp");
        assert_eq!(list.public_suffix("city.kawasaki.jp").name, "kawasaki.jp");
    }

    #[test]
    fn test_private_section() {
        let list = sample();
        let suffix = list.public_suffix("myblog.blogspot.co.uk");
        assert_eq!(suffix.name, "blogspot.co.uk");
        assert_eq!(suffix.kind, SuffixKind::Private);

        let suffix = list.public_suffix("home.dyndns.org");
        assert_eq!(suffix.name, "dyndns.org");
        assert_eq!(suffix.kind, SuffixKind::Private);
    }

    #[test]
    fn test_unlisted_tld_is_unmanaged() {
        let list = sample();
        let suffix = list.public_suffix("there.is.no.such-tld");
        assert_eq!(suffix.name, "such-tld");
        assert_eq!(suffix.kind, SuffixKind::Unmanaged);
    }

    #[test]
    fn test_name_equal_to_suffix() {
        let list = sample();
        let suffix = list.public_suffix("co.uk");
        assert_eq!(suffix.name, "co.uk");
        assert!(suffix.is_icann());
    }

    #[test]
    fn test_insert_normalizes_rules() {
        let mut list = RuleList::default();
        list.insert("Example.TEST.", SuffixKind::Private);
        let suffix = list.public_suffix("a.example.test");
        assert_eq!(suffix.name, "example.test");
        assert_eq!(suffix.kind, SuffixKind::Private);
    }

    #[test]
    fn test_from_str() {
        let list: RuleList = "com\nnet\n".parse().unwrap();
        assert_eq!(list.len(), 2);
    }
}
