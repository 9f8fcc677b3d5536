use alloc::vec::Vec;

use crate::{CacheSnapshot, Measured, StoreOptions};

/// Size marker for an item that has not been measured yet.
pub const UNCACHED: u32 = u32::MAX;

/// Offset marker for entries past the measured-offset watermark.
pub const UNCACHED_OFFSET: u64 = u64::MAX;

/// Per-index size and offset bookkeeping for a virtualized collection.
///
/// The store keeps three pieces of state per item index:
/// - the measured size, or [`UNCACHED`] (in which case [`SizeOffsetStore::default_size`] is used),
/// - the cumulative start offset, valid only up to the measured-offset watermark,
/// - the watermark itself, which measurements move backwards and offset queries move forwards.
///
/// All query methods that may need offsets take `&mut self`: reading past the watermark extends
/// the prefix sum in place.
///
/// Indexes passed to per-item methods must be `< len()`. Violations panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeOffsetStore {
    pub(crate) default_size: u32,
    pub(crate) sizes: Vec<u32>,
    pub(crate) offsets: Vec<u64>,
    pub(crate) measured_offset_index: usize,
}

impl SizeOffsetStore {
    /// Creates a store for `length` unmeasured items, each assumed to be `default_size` long.
    ///
    /// Panics if `default_size` is 0.
    pub fn new(length: usize, default_size: u32) -> Self {
        Self::from_options(StoreOptions::new(length, default_size))
    }

    /// Creates a store for `length` items, restoring measurements from `snapshot`.
    ///
    /// Snapshot entries past `length` are dropped; missing entries start unmeasured.
    pub fn from_snapshot(length: usize, snapshot: CacheSnapshot) -> Self {
        let default_size = snapshot.default_size;
        Self::from_options(StoreOptions::new(length, default_size).with_snapshot(Some(snapshot)))
    }

    pub fn from_options(options: StoreOptions) -> Self {
        let default_size = options.effective_default_size();
        assert!(
            default_size > 0 && default_size != UNCACHED,
            "default item size must be positive (default_size={default_size})"
        );
        let length = options.length;

        let sizes = match &options.snapshot {
            Some(snapshot) => (0..length)
                .map(|i| snapshot.sizes.get(i).copied().unwrap_or(UNCACHED))
                .collect(),
            None => alloc::vec![UNCACHED; length],
        };

        let mut offsets = alloc::vec![UNCACHED_OFFSET; length];
        if let Some(first) = offsets.first_mut() {
            *first = 0;
        }

        vdebug!(
            length,
            default_size,
            restored = options.snapshot.is_some(),
            "SizeOffsetStore::from_options"
        );

        Self {
            default_size,
            sizes,
            offsets,
            measured_offset_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The size currently assumed for unmeasured items.
    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    /// Highest index whose cached offset is known to be correct.
    pub fn measured_offset_index(&self) -> usize {
        self.measured_offset_index
    }

    /// Returns the measured size of `index`, or the default size when it is unmeasured.
    pub fn size(&self, index: usize) -> u32 {
        self.check_index(index);
        self.effective_size(self.sizes[index])
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.sizes.get(index).is_some_and(|&s| s != UNCACHED)
    }

    pub fn measured_count(&self) -> usize {
        self.sizes.iter().filter(|&&s| s != UNCACHED).count()
    }

    pub fn has_measurements(&self) -> bool {
        self.sizes.iter().any(|&s| s != UNCACHED)
    }

    /// Records the measured `size` of `index`.
    ///
    /// Returns `true` when this is the first measurement of the item, which is the caller's cue
    /// to run [`Self::estimate_default_size`]. Offsets from `index` onwards are recomputed on the
    /// next offset query.
    pub fn set_size(&mut self, index: usize, size: u32) -> bool {
        self.check_index(index);
        assert!(size != UNCACHED, "size {size} is reserved as the unmeasured marker");
        let prev = core::mem::replace(&mut self.sizes[index], size);
        self.measured_offset_index = self.measured_offset_index.min(index);
        prev == UNCACHED
    }

    /// Applies many `(index, size)` reports. Returns `true` if any of them was an initial
    /// measurement.
    pub fn set_sizes(&mut self, measurements: impl IntoIterator<Item = (usize, u32)>) -> bool {
        let mut initial = false;
        for (index, size) in measurements {
            initial |= self.set_size(index, size);
        }
        initial
    }

    /// Applies a frame's worth of measurements and re-estimates the default size if needed.
    ///
    /// Reports for indexes past the end (e.g. from items removed in the same frame) are skipped.
    /// `shift` is the size change of reported items that start before `scroll_offset`, computed
    /// against the geometry before the batch was applied.
    pub fn apply_measurements(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, u32)>,
        scroll_offset: u64,
    ) -> Measured {
        let len = self.len();
        let updated: Vec<(usize, u32)> = measurements
            .into_iter()
            .filter(|&(index, size)| {
                if index >= len {
                    vwarn!(index, len, "apply_measurements: skipping out-of-bounds index");
                    return false;
                }
                self.sizes[index] != size
            })
            .collect();

        let mut out = Measured::default();
        if updated.is_empty() {
            return out;
        }

        for &(index, size) in &updated {
            if self.compute_offset(index) < scroll_offset {
                out.shift += i64::from(size) - i64::from(self.size(index));
            }
        }

        for &(index, size) in &updated {
            out.initial |= self.set_size(index, size);
        }

        if out.initial {
            self.estimate_default_size();
            out.estimated = true;
        }

        vtrace!(
            count = updated.len(),
            shift = out.shift,
            initial = out.initial,
            "apply_measurements"
        );
        out
    }

    /// Recomputes the default size from the measured sizes.
    ///
    /// Uses the common value when every measured size is identical, the median otherwise. A
    /// changed default invalidates every cached offset.
    ///
    /// Panics when no item has been measured.
    pub fn estimate_default_size(&mut self) {
        let mut measured: Vec<u32> = self
            .sizes
            .iter()
            .copied()
            .filter(|&s| s != UNCACHED)
            .collect();
        assert!(
            !measured.is_empty(),
            "estimate_default_size requires at least one measured item"
        );

        let first = measured[0];
        let estimate = if measured.iter().all(|&s| s == first) {
            first
        } else {
            median(&mut measured)
        };
        // Zero-sized measurements must not produce a zero default.
        let estimate = estimate.max(1);

        if estimate != self.default_size {
            vdebug!(
                prev = self.default_size,
                next = estimate,
                measured = measured.len(),
                "estimate_default_size"
            );
            self.default_size = estimate;
            self.measured_offset_index = 0;
        }
    }

    /// Captures the measured sizes and default size for a later [`Self::from_snapshot`].
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            sizes: self.sizes.clone(),
            default_size: self.default_size,
        }
    }

    pub(crate) fn effective_size(&self, raw: u32) -> u32 {
        if raw == UNCACHED {
            self.default_size
        } else {
            raw
        }
    }

    pub(crate) fn check_index(&self, index: usize) {
        let len = self.len();
        assert!(index < len, "index out of bounds (index={index}, len={len})");
    }
}

/// Median of a non-empty slice. For even lengths, the mean of the two middle values (rounded
/// down).
fn median(values: &mut [u32]) -> u32 {
    debug_assert!(!values.is_empty(), "median of an empty slice");
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        ((u64::from(values[mid - 1]) + u64::from(values[mid])) / 2) as u32
    } else {
        values[mid]
    }
}
