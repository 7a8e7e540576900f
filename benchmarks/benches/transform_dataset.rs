use benchmarks::{scaling_map, staged_map, synthetic_dataset};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const N_FEATURES: usize = 20;

fn bench_transform_value(c: &mut Criterion) {
    let dataset = synthetic_dataset(1_000, N_FEATURES, 1.0, 42);
    let transformers = staged_map()
        .compile(&dataset)
        .expect("Failed to compile map");

    c.bench_function("transform_value", |b| {
        b.iter(|| black_box(transformers.transform_value(black_box("F3"), black_box(17.5))));
    });
}

fn bench_transform_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_dataset");

    for n_examples in [100, 1_000, 10_000].iter() {
        let dataset = synthetic_dataset(*n_examples, N_FEATURES, 1.0, 42);
        let transformers = scaling_map()
            .compile(&dataset)
            .expect("Failed to compile map");

        group.throughput(Throughput::Elements(*n_examples as u64));
        group.bench_with_input(
            BenchmarkId::new("sequential", n_examples),
            &dataset,
            |b, ds| {
                b.iter(|| black_box(transformers.transform_dataset(black_box(ds))));
            },
        );
        group.bench_with_input(BenchmarkId::new("parallel", n_examples), &dataset, |b, ds| {
            b.iter(|| black_box(transformers.par_transform_dataset(black_box(ds))));
        });
    }

    group.finish();
}

fn bench_transform_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_sparse");

    for density in [0.1, 0.5, 1.0].iter() {
        let dataset = synthetic_dataset(5_000, N_FEATURES, *density, 7);
        let transformers = staged_map()
            .compile(&dataset)
            .expect("Failed to compile map");

        group.bench_with_input(BenchmarkId::from_parameter(density), &dataset, |b, ds| {
            b.iter(|| black_box(transformers.transform_dataset(black_box(ds))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transform_value,
    bench_transform_dataset,
    bench_transform_sparse
);
criterion_main!(benches);
