use crate::{ItemRange, SizeOffsetStore, UNCACHED};

impl SizeOffsetStore {
    /// Returns the start offset of `index`, extending the cached prefix sum if needed.
    ///
    /// Cached offsets are returned in O(1). Otherwise the prefix sum is walked forward from the
    /// watermark, writing every intermediate offset, and the watermark moves to `index`.
    ///
    /// Returns 0 for an empty store; panics on `index >= len()` otherwise.
    pub fn compute_offset(&mut self, index: usize) -> u64 {
        if self.is_empty() {
            return 0;
        }
        self.check_index(index);

        let mut i = self.measured_offset_index;
        if index <= i {
            return self.offsets[index];
        }

        vtrace!(from = i, to = index, "compute_offset: extending prefix sum");
        let mut top = self.offsets[i];
        while i < index {
            top = top.saturating_add(u64::from(self.effective_size(self.sizes[i])));
            i += 1;
            self.offsets[i] = top;
        }
        self.measured_offset_index = index;
        top
    }

    /// Total scrollable extent: the end offset of the last item, or 0 when empty.
    pub fn compute_total_size(&mut self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let last = self.len() - 1;
        self.compute_offset(last).saturating_add(u64::from(self.size(last)))
    }

    /// Returns the index reached by walking `distance` units of item size from `from_index`.
    ///
    /// Walks forward for `distance >= 0`, backward otherwise, one item at a time until the
    /// accumulated size covers `|distance|`. If the item the walk stopped on has its midpoint at
    /// or beyond the target (forward), or before it (backward), the walk steps back one item: the
    /// result is the item whose body straddles the target.
    ///
    /// The result is clamped to `[0, len() - 1]`; an empty store yields 0.
    pub fn find_index(&self, from_index: usize, distance: i64) -> usize {
        let len = self.len();
        if len == 0 {
            return 0;
        }
        let last = len - 1;
        let mut i = from_index.min(last);
        // Half sizes are compared on doubled values to stay exact.
        let target = distance.saturating_mul(2);
        let mut sum = 0i64;

        if distance >= 0 {
            while i < last {
                let h = i64::from(self.size(i));
                i += 1;
                sum += h;
                if sum >= distance {
                    if 2 * sum - h >= target {
                        i -= 1;
                    }
                    break;
                }
            }
        } else {
            while i > 0 {
                i -= 1;
                let h = i64::from(self.size(i));
                sum -= h;
                if sum <= distance {
                    if 2 * sum + h < target {
                        i += 1;
                    }
                    break;
                }
            }
        }

        i.min(last)
    }

    /// Finds the item at `target_offset`, starting the walk from `initial_index`.
    ///
    /// `initial_index` is a search hint (usually the previous frame's start index); the closer it
    /// is to the answer, the fewer items are visited. Hints past the end are clamped.
    pub fn find_start_index_with_offset(
        &mut self,
        target_offset: u64,
        initial_index: usize,
    ) -> usize {
        if self.is_empty() {
            return 0;
        }
        let initial_index = initial_index.min(self.len() - 1);
        let from = self.compute_offset(initial_index);
        let distance = to_signed(target_offset).saturating_sub(to_signed(from));
        self.find_index(initial_index, distance)
    }

    /// Computes the inclusive range of items covering `[scroll_offset, scroll_offset +
    /// viewport_size]`.
    ///
    /// `prev_start_index` is the start index returned for the previous frame; it only speeds up
    /// the search and may be stale (e.g. after the collection shrank).
    pub fn compute_range(
        &mut self,
        scroll_offset: u64,
        prev_start_index: usize,
        viewport_size: u32,
    ) -> ItemRange {
        if self.is_empty() {
            return ItemRange::EMPTY;
        }
        let hint = prev_start_index.min(self.len() - 1);
        let start_index = self.find_start_index_with_offset(scroll_offset, hint);
        let end_index = self.find_index(start_index, i64::from(viewport_size));
        vtrace!(
            scroll_offset,
            viewport_size,
            start_index,
            end_index,
            "compute_range"
        );
        ItemRange {
            start_index,
            end_index,
        }
    }

    /// Returns `true` if any item in the inclusive range `[start, end]` is unmeasured.
    ///
    /// Indexes past the end of the store are ignored.
    pub fn has_unmeasured_items_in_range(&self, start: usize, end: usize) -> bool {
        let end = end.min(self.len().saturating_sub(1));
        if self.is_empty() || start > end {
            return false;
        }
        self.sizes[start..=end].contains(&UNCACHED)
    }
}

fn to_signed(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
