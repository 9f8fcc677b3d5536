// Example: keep the visual scroll position stable when older items are loaded above.
use size_offset_store::SizeOffsetStore;

fn main() {
    let mut store = SizeOffsetStore::new(100, 10);
    let mut scroll_offset = 500u64;
    let before = store.compute_range(scroll_offset, 0, 100);
    println!("before prepend: off={scroll_offset} range={before:?}");

    // Load 10 older items at the front; every index shifts by +10.
    let change = store.update_length(110, true);
    scroll_offset += change.shift;
    let after = store.compute_range(scroll_offset, before.start_index, 100);
    println!("after prepend: off={scroll_offset} range={after:?} shift={}", change.shift);

    // Drop the 20 oldest items again.
    let change = store.update_length(90, true);
    if change.was_removal {
        scroll_offset = scroll_offset.saturating_sub(change.shift);
    }
    let trimmed = store.compute_range(scroll_offset, after.start_index, 100);
    println!("after trim: off={scroll_offset} range={trimmed:?}");
}
