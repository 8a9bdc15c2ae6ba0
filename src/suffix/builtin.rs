//! Suffix list compiled into the `psl` crate.

use psl::Psl;

use super::{Suffix, SuffixKind, SuffixLookup};

/// The Public Suffix List snapshot shipped with the `psl` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinList;

impl SuffixLookup for BuiltinList {
    fn public_suffix<'a>(&self, name: &'a str) -> Suffix<'a> {
        let Some(found) = psl::List.suffix(name.as_bytes()) else {
            return Suffix::unmanaged(name);
        };

        let len = found.as_bytes().len();
        if len == 0 || len > name.len() {
            return Suffix::unmanaged(name);
        }

        let kind = match (found.is_known(), found.typ()) {
            (true, Some(psl::Type::Icann)) => SuffixKind::Icann,
            (true, Some(psl::Type::Private)) => SuffixKind::Private,
            _ => SuffixKind::Unmanaged,
        };

        Suffix {
            name: &name[name.len() - len..],
            kind,
        }
    }
}
