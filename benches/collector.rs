//! Benchmarks for the window collector
//!
//! Steady-state collect: window already full, every batch wraps.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use window_collector::{Batch, WindowCollector};

fn bench_collect_steady_state(c: &mut Criterion) {
    let mut collector = WindowCollector::<i64>::new(1024).unwrap();
    let data: Vec<i64> = (0..256).collect();
    let batch = Batch::of_scalars(&data);

    // Warmup: fill to capacity so every measured call wraps
    for _ in 0..8 {
        collector.collect(&batch).unwrap();
    }

    c.bench_function("collect_steady_state", |b| {
        b.iter(|| collector.collect(black_box(&batch)).unwrap())
    });
}

fn bench_collect_oversized(c: &mut Criterion) {
    let mut collector = WindowCollector::<i64>::new(256).unwrap();
    let data: Vec<i64> = (0..1024).collect();
    let batch = Batch::of_scalars(&data);

    collector.collect(&batch).unwrap();

    c.bench_function("collect_oversized", |b| {
        b.iter(|| collector.collect(black_box(&batch)).unwrap())
    });
}

criterion_group!(benches, bench_collect_steady_state, bench_collect_oversized);
criterion_main!(benches);
