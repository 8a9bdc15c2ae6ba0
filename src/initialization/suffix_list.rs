//! Public Suffix List initialization.

use std::sync::Arc;

use crate::config::SuffixSource;
use crate::error_handling::InitializationError;
use crate::suffix::{BuiltinList, FallbackList, RuleList, SuffixLookup};

/// Loads the suffix list selected by `source`.
///
/// The list is read once; the returned handle is shared read-only by every
/// parser built from it.
///
/// # Errors
///
/// Returns `InitializationError::SuffixListError` if a list file cannot be
/// read or contains no rules.
pub fn init_suffix_list(source: &SuffixSource) -> Result<Arc<dyn SuffixLookup>, InitializationError> {
    let list: Arc<dyn SuffixLookup> = match source {
        SuffixSource::Builtin => Arc::new(BuiltinList),
        SuffixSource::File(path) => {
            let list = RuleList::from_file(path)?;
            log::info!("Loaded {} suffix rules from {}", list.len(), path.display());
            Arc::new(list)
        }
        SuffixSource::Fallback => {
            log::warn!("Using the fallback suffix list; most multi-label suffixes are unknown");
            Arc::new(FallbackList::new())
        }
    };
    Ok(list)
}
