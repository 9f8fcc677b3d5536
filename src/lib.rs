//! Lazily materialized size/offset bookkeeping for virtualized lists.
//!
//! A virtualized view renders only the items near its viewport, so most item sizes are unknown
//! until the item has been rendered once. [`SizeOffsetStore`] keeps, for every index:
//!
//! - the measured size (or an "unmeasured" marker, in which case a shared default size is used),
//! - the cumulative start offset, materialized lazily up to a watermark index.
//!
//! Measurements only move the watermark backwards; offset queries extend it forwards. For the
//! usual front-to-back render order this keeps the running prefix sum amortized O(1) per index.
//!
//! The store is UI-agnostic. The caller is expected to:
//! - create it with the collection length and an initial size guess,
//! - report real sizes with [`SizeOffsetStore::set_size`] (and re-estimate the default size),
//! - ask for the visible range with [`SizeOffsetStore::compute_range`] every frame,
//! - report length changes with [`SizeOffsetStore::update_length`] and apply the returned
//!   scroll compensation.
//!
//! ```
//! use size_offset_store::{ItemRange, SizeOffsetStore};
//!
//! let mut store = SizeOffsetStore::new(10, 10);
//! assert_eq!(store.compute_total_size(), 100);
//! assert_eq!(store.compute_range(25, 0, 30), ItemRange::new(2, 5));
//!
//! if store.set_size(0, 40) {
//!     store.estimate_default_size();
//! }
//! assert_eq!(store.compute_offset(1), 40);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod length;
mod options;
mod range;
mod snapshot;
mod store;
mod types;


pub use options::StoreOptions;
pub use snapshot::CacheSnapshot;
pub use store::{SizeOffsetStore, UNCACHED, UNCACHED_OFFSET};
pub use types::{ItemRange, LengthChange, Measured};
