use core::iter;

use crate::{LengthChange, SizeOffsetStore, UNCACHED, UNCACHED_OFFSET};

impl SizeOffsetStore {
    /// Resizes the store to `new_length` items.
    ///
    /// Items are added or removed at the tail, or at the head when `is_prepend` is set. Head
    /// changes shift every index, so all cached offsets are invalidated; tail changes keep the
    /// offsets that are still in range.
    ///
    /// The returned `shift` is the total effective size of the added or removed items (added
    /// items count as [`Self::default_size`] each). Adapters use it to compensate the scroll
    /// offset when the change happened above the viewport.
    pub fn update_length(&mut self, new_length: usize, is_prepend: bool) -> LengthChange {
        let length = self.len();
        if new_length == length {
            return LengthChange::default();
        }

        let change = if new_length < length {
            let removed = length - new_length;
            let range = if is_prepend {
                0..removed
            } else {
                new_length..length
            };
            let default_size = u64::from(self.default_size);
            let shift = self
                .sizes
                .drain(range.clone())
                .map(|s| if s == UNCACHED { default_size } else { u64::from(s) })
                .fold(0u64, u64::saturating_add);
            self.offsets.drain(range);
            LengthChange {
                shift,
                was_removal: true,
            }
        } else {
            let added = new_length - length;
            if is_prepend {
                self.sizes.splice(0..0, iter::repeat_n(UNCACHED, added));
                self.offsets.splice(0..0, iter::repeat_n(UNCACHED_OFFSET, added));
            } else {
                self.sizes.resize(new_length, UNCACHED);
                self.offsets.resize(new_length, UNCACHED_OFFSET);
            }
            LengthChange {
                shift: u64::from(self.default_size).saturating_mul(added as u64),
                was_removal: false,
            }
        };

        if let Some(first) = self.offsets.first_mut() {
            *first = 0;
        }

        // The watermark must stay a valid index (0 when empty): offset extension resumes from
        // `offsets[measured_offset_index]`.
        self.measured_offset_index = if is_prepend {
            0
        } else {
            self.measured_offset_index.min(new_length.saturating_sub(1))
        };

        vdebug!(
            prev_length = length,
            new_length,
            is_prepend,
            shift = change.shift,
            was_removal = change.was_removal,
            "update_length"
        );
        change
    }
}
