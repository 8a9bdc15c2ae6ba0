//! Public Suffix List lookup.
//!
//! A suffix list answers one question: what is the longest public suffix of a
//! name, and who manages it. Three implementations are provided:
//! - [`RuleList`] parses the publicsuffix.org text format, including wildcard
//!   (`*.`) and exception (`!`) rules and the ICANN/PRIVATE sections
//! - [`BuiltinList`] uses the list compiled into the `psl` crate
//! - [`FallbackList`] knows only a handful of two-label suffixes
//!
//! All of them are read-only after construction and are shared between callers
//! as `Arc<dyn SuffixLookup>`.

mod builtin;
mod fallback;
mod rules;

pub use builtin::BuiltinList;
pub use fallback::FallbackList;
pub use rules::RuleList;

/// Who manages a public suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixKind {
    /// Listed in the ICANN section (e.g. "com", "co.uk").
    Icann,
    /// Listed in the PRIVATE section (e.g. "github.io").
    Private,
    /// Not listed; the implicit `*` rule matched the rightmost label.
    Unmanaged,
}

/// The public suffix of a queried name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix<'a> {
    /// Tail of the queried name, without the separating dot.
    pub name: &'a str,
    /// Section the matching rule came from.
    pub kind: SuffixKind,
}

impl<'a> Suffix<'a> {
    pub(crate) fn unmanaged(name: &'a str) -> Self {
        Suffix {
            name: last_label(name),
            kind: SuffixKind::Unmanaged,
        }
    }

    /// Returns true if the suffix is listed in the ICANN section.
    pub fn is_icann(&self) -> bool {
        self.kind == SuffixKind::Icann
    }
}

/// Public suffix lookup capability.
///
/// `name` is expected to be normalized: lower case, no trailing dot. The
/// returned suffix is always a tail of `name` made of whole labels; when no
/// rule matches, it is the rightmost label with [`SuffixKind::Unmanaged`].
pub trait SuffixLookup: Send + Sync {
    fn public_suffix<'a>(&self, name: &'a str) -> Suffix<'a>;
}

/// Returns the rightmost label of `name`.
pub(crate) fn last_label(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => name,
    }
}

/// Returns the tail of `name` made of its last `count` labels.
///
/// Returns the whole name if it has fewer labels.
pub(crate) fn tail_labels(name: &str, count: usize) -> &str {
    if count == 0 {
        return &name[name.len()..];
    }
    match name.rmatch_indices('.').nth(count - 1) {
        Some((dot, _)) => &name[dot + 1..],
        None => name,
    }
}
