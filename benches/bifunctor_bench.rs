//! Benchmark for Bifunctor operations on the `Can` family.
//!
//! Compares the trait methods against hand-written `match` expressions.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lambars_can::control::{Can, Ior};
use lambars_can::typeclass::Bifunctor;
use std::hint::black_box;

// =============================================================================
// Can Bifunctor Benchmarks
// =============================================================================

fn benchmark_can_bimap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("can_bimap");

    group.bench_function("bifunctor_bimap_both", |bencher| {
        bencher.iter(|| {
            let value: Can<String, i32> = Can::Both("warning".to_string(), 42);
            black_box(Bifunctor::bimap(value, |e| e.len(), |x| x * 2))
        });
    });

    group.bench_function("manual_bimap_both", |bencher| {
        bencher.iter(|| {
            let value: Can<String, i32> = Can::Both("warning".to_string(), 42);
            let mapped: Can<usize, i32> = match value {
                Can::None => Can::None,
                Can::Left(a) => Can::Left(a.len()),
                Can::Right(b) => Can::Right(b * 2),
                Can::Both(a, b) => Can::Both(a.len(), b * 2),
            };
            black_box(mapped)
        });
    });

    group.bench_function("first_then_second", |bencher| {
        bencher.iter(|| {
            let value: Can<String, i32> = Can::Both("warning".to_string(), 42);
            black_box(value.first(|e| e.len()).second(|x| x * 2))
        });
    });

    group.bench_function("bimap_ref", |bencher| {
        let value: Can<String, i32> = Can::Both("warning".to_string(), 42);
        bencher.iter(|| black_box(value.bimap_ref(String::len, |x| x * 2)));
    });

    group.finish();
}

fn benchmark_ior_bimap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ior_bimap");

    group.bench_function("bifunctor_bimap_left", |bencher| {
        bencher.iter(|| {
            let value: Ior<String, i32> = Ior::Left("error".to_string());
            black_box(Bifunctor::bimap(value, |e| e.len(), |x| x * 2))
        });
    });

    group.bench_function("swap_bimap_swap", |bencher| {
        bencher.iter(|| {
            let value: Ior<String, i32> = Ior::Both("error".to_string(), 1);
            black_box(value.swap().bimap(|x| x * 2, |e| e.len()).swap())
        });
    });

    group.finish();
}

// =============================================================================
// Throughput Benchmarks
// =============================================================================

fn benchmark_can_bimap_throughput(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("can_bimap_throughput");

    for size in [100_usize, 1_000, 10_000] {
        let items: Vec<Can<String, i32>> = (0..size)
            .map(|index| match index % 3 {
                0 => Can::Left(index.to_string()),
                1 => Can::Right(i32::try_from(index).unwrap_or(i32::MAX)),
                _ => Can::Both(index.to_string(), 1),
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("bifunctor_iter", size), &items, |bencher, items| {
            bencher.iter(|| {
                let results: Vec<Can<usize, i32>> = items
                    .iter()
                    .map(|value| value.bimap_ref(String::len, |x| x * 2))
                    .collect();
                black_box(results)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_can_bimap,
    benchmark_ior_bimap,
    benchmark_can_bimap_throughput
);

criterion_main!(benches);
