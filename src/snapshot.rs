use alloc::vec::Vec;

use crate::UNCACHED;

/// A serializable copy of the measured sizes and the default size estimate.
///
/// Offsets are not part of the snapshot: they are derived data and are rebuilt lazily after a
/// restore. This is useful to keep scroll geometry stable when a view is torn down and
/// recreated (e.g. navigating back to a long list).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheSnapshot {
    /// Per-index sizes; unmeasured entries hold [`UNCACHED`].
    pub sizes: Vec<u32>,
    pub default_size: u32,
}

impl CacheSnapshot {
    /// Number of measured entries in the snapshot.
    pub fn measured_count(&self) -> usize {
        self.sizes.iter().filter(|&&s| s != UNCACHED).count()
    }
}
