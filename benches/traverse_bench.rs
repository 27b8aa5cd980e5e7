//! Benchmark for serial vs chunked-parallel traversal.
//!
//! Compares inline execution against the `Threads` executor for map and
//! select over numeric vectors of increasing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sifter::prelude::*;
use std::hint::black_box;
use std::num::NonZeroUsize;

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [1_000, 10_000, 100_000] {
        let numbers: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("inline", size), &numbers, |bencher, numbers| {
            bencher.iter(|| {
                let doubled = numbers.mapped(|n| Some(black_box(n * 2))).unwrap();
                black_box(doubled)
            });
        });

        #[cfg(feature = "threads")]
        group.bench_with_input(BenchmarkId::new("threads", size), &numbers, |bencher, numbers| {
            let pool = Threads::new();
            let dispatch = Dispatch::on(&pool).stride(NonZeroUsize::new(1024).unwrap());
            bencher.iter(|| {
                let doubled = numbers
                    .mapped_with(dispatch, |n| Some(black_box(n * 2)))
                    .unwrap();
                black_box(doubled)
            });
        });
    }

    group.finish();
}

fn benchmark_select(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("select");

    for size in [1_000, 100_000] {
        let numbers: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("inline", size), &numbers, |bencher, numbers| {
            bencher.iter(|| {
                let even = numbers.selected(|n| n % 2 == 0).unwrap();
                black_box(even)
            });
        });

        #[cfg(feature = "threads")]
        group.bench_with_input(BenchmarkId::new("threads", size), &numbers, |bencher, numbers| {
            let pool = Threads::new();
            let dispatch = Dispatch::on(&pool).stride(NonZeroUsize::new(1024).unwrap());
            bencher.iter(|| {
                let even = numbers.selected_with(dispatch, |n| n % 2 == 0).unwrap();
                black_box(even)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_map, benchmark_select);
criterion_main!(benches);
