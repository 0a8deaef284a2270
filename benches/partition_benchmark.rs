use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use cyclepart::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::hint::black_box;

fn partition_then_sort<F: PartitionFunction<f64>>(data: &mut [f64], function: &F) {
    if let Some(bounds) = partition(data, function) {
        for class in bounds.classes_mut(data) {
            class.sort_unstable_by(f64::total_cmp);
        }
    }
}

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Uniform f64");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 100_000;
    let input: Vec<f64> = (0..count).map(|_| rng.random_range(0.0..15_000.0)).collect();

    group.bench_function("cdf partition + class sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                let function = CdfPartitionFunction::new(&data, 1000, 0.05, 0.0056).unwrap();
                partition_then_sort(black_box(&mut data), &function)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("range partition + class sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                let function = RangePartitionFunction::new(&data, 100).unwrap();
                partition_then_sort(black_box(&mut data), &function)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable_by", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable_by(f64::total_cmp),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Normal f64");
    group.sample_size(10);

    // Skewed data: the range estimator overfills the central classes.
    let mut rng = rand::rng();
    let count = 100_000;
    let dist = Normal::new(0.0, 9000.0).unwrap();
    let input: Vec<f64> = (0..count).map(|_| dist.sample(&mut rng)).collect();

    group.bench_function("cdf partition only", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                let function = CdfPartitionFunction::new(&data, 1000, 0.05, 0.0056).unwrap();
                partition(black_box(&mut data), &function)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("range partition only", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                let function = RangePartitionFunction::new(&data, 100).unwrap();
                partition(black_box(&mut data), &function)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_uniform, bench_normal);
criterion_main!(benches);
