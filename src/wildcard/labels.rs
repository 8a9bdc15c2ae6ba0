//! Random probe label generation.

use rand::Rng;

use crate::config::PROBE_CHARSET;

/// Source of first labels for wildcard probes.
///
/// Implementations must only produce characters from [`PROBE_CHARSET`] and
/// exactly `len` of them.
pub trait LabelGenerator: Send + Sync {
    /// Returns a label of `len` characters.
    fn label(&self, len: usize) -> String;
}

impl<T: LabelGenerator + ?Sized> LabelGenerator for &T {
    fn label(&self, len: usize) -> String {
        (**self).label(len)
    }
}

/// Uniformly random labels from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomLabels;

impl LabelGenerator for RandomLabels {
    fn label(&self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| PROBE_CHARSET[rng.random_range(0..PROBE_CHARSET.len())] as char)
            .collect()
    }
}
