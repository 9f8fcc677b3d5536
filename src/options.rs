use crate::CacheSnapshot;

/// Configuration for [`crate::SizeOffsetStore::from_options`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Number of items tracked initially.
    pub length: usize,
    /// Size assumed for items that have not been measured yet. Must be > 0.
    ///
    /// Ignored when [`StoreOptions::snapshot`] is set; the snapshot's default size wins.
    pub default_size: u32,
    /// Previously captured measurements to restore.
    pub snapshot: Option<CacheSnapshot>,
}

impl StoreOptions {
    /// Creates options for `length` unmeasured items of `default_size` each.
    pub fn new(length: usize, default_size: u32) -> Self {
        Self {
            length,
            default_size,
            snapshot: None,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_default_size(mut self, default_size: u32) -> Self {
        self.default_size = default_size;
        self
    }

    /// Restores measurements captured with [`crate::SizeOffsetStore::snapshot`].
    pub fn with_snapshot(mut self, snapshot: Option<CacheSnapshot>) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub(crate) fn effective_default_size(&self) -> u32 {
        self.snapshot
            .as_ref()
            .map_or(self.default_size, |s| s.default_size)
    }
}
