//! Benchmarks for transition planning and slot table reconciliation.
//!
//! Run with: cargo bench -p heapmap-runtime

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use heapmap_core::{BYTES_PER_MB, Generation, Segment, SubHeap};
use heapmap_layout::ViewConfig;
use heapmap_runtime::{SlotTable, plan};
use std::hint::black_box;

/// `heaps` heaps of `per_heap` solid segments; `shift` varies live sizes.
fn make_snapshot(heaps: usize, per_heap: usize, shift: u64) -> Vec<SubHeap> {
    (0..heaps)
        .map(|heap| {
            let segments = (0..per_heap)
                .map(|i| {
                    let size = ((i % 13) as u64 + 1) * BYTES_PER_MB;
                    let generation = Generation::ALL[i % Generation::ALL.len()];
                    Segment::solid(generation, (i as u64) << 32)
                        .with_reserved(size)
                        .with_committed(size)
                        .with_live((size / 8) * ((i as u64 + shift) % 8))
                })
                .collect();
            SubHeap::new(heap, segments)
        })
        .collect()
}

fn bench_plan(c: &mut Criterion) {
    let config = ViewConfig::new(true, false);
    let before = Segment::solid(Generation::Generation1, 0)
        .with_reserved(8 * BYTES_PER_MB)
        .with_committed(8 * BYTES_PER_MB)
        .with_live(BYTES_PER_MB);
    let after = Segment::solid(Generation::Generation2, 0)
        .with_reserved(16 * BYTES_PER_MB)
        .with_committed(8 * BYTES_PER_MB)
        .with_live(4 * BYTES_PER_MB);

    c.bench_function("runtime/plan/update", |b| {
        b.iter(|| black_box(plan(Some(&before), &after, 0, &config)))
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("runtime/reconcile");
    let config = ViewConfig::new(true, false);

    for per_heap in [16, 256, 2048] {
        let first = make_snapshot(4, per_heap, 0);
        let second = make_snapshot(4, per_heap, 3);
        group.bench_with_input(
            BenchmarkId::from_parameter(per_heap),
            &(first, second),
            |b, (first, second)| {
                b.iter(|| {
                    let mut table = SlotTable::new(config);
                    let _ = black_box(table.reconcile(first));
                    black_box(table.reconcile(second))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_plan, bench_reconcile);
criterion_main!(benches);
