// Example: per-frame range queries with incremental measurement.
use size_offset_store::SizeOffsetStore;

fn main() {
    let mut store = SizeOffsetStore::new(1_000_000, 20);
    let viewport = 400;
    let mut start = 0;

    for (frame, scroll_offset) in [0u64, 1_000, 5_000, 250_000].into_iter().enumerate() {
        let range = store.compute_range(scroll_offset, start, viewport);
        start = range.start_index;

        // Pretend the renderer measured every visible row: even rows are taller.
        let measured = store.apply_measurements(
            range.iter().map(|i| (i, if i % 2 == 0 { 32 } else { 18 })),
            scroll_offset,
        );

        println!(
            "frame={frame} scroll={scroll_offset} range={range:?} shift={} default={} total={}",
            measured.shift,
            store.default_size(),
            store.compute_total_size()
        );
    }

    let range = store.compute_range(250_000, start, viewport);
    println!(
        "unmeasured in {range:?}: {}",
        store.has_unmeasured_items_in_range(range.start_index, range.end_index)
    );
}
