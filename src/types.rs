/// An inclusive `[start_index, end_index]` range of item indexes.
///
/// Unlike half-open ranges, both ends are valid item indexes whenever the store is non-empty.
/// An empty store yields [`ItemRange::EMPTY`] (`[0, 0]`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl ItemRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub const fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// Number of indexes covered by this range.
    pub fn count(&self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }

    /// Iterates the covered indexes in ascending order.
    pub fn iter(&self) -> core::ops::RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

impl From<ItemRange> for (usize, usize) {
    fn from(r: ItemRange) -> Self {
        (r.start_index, r.end_index)
    }
}

/// Result of [`crate::SizeOffsetStore::update_length`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthChange {
    /// Total effective size of the added or removed items.
    ///
    /// Adapters add (grow) or subtract (shrink) this from the scroll offset when the change
    /// happened above the viewport, so the visible content does not jump.
    pub shift: u64,
    /// `true` when items were removed.
    pub was_removal: bool,
}

/// Result of [`crate::SizeOffsetStore::apply_measurements`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measured {
    /// Net size change of the reported items that start before the given scroll offset.
    ///
    /// Positive when those items grew. Adapters add this to their scroll offset to keep the
    /// visible content in place.
    pub shift: i64,
    /// `true` when at least one report was the first measurement of its item.
    pub initial: bool,
    /// `true` when the default size was re-estimated as part of the batch.
    pub estimated: bool,
}
