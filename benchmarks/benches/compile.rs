use benchmarks::{override_map, scaling_map, staged_map, synthetic_dataset};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feature_transforms::transform::{CompileOptions, StatisticsCollector};

const N_FEATURES: usize = 20;

fn bench_collect_statistics(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000, N_FEATURES, 1.0, 42);
    let names: Vec<String> = (0..N_FEATURES).map(benchmarks::feature_name).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let collector = StatisticsCollector::new();

    c.bench_function("collect_raw_statistics", |b| {
        b.iter(|| black_box(collector.collect_raw(black_box(&dataset), &names)));
    });
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for n_examples in [100, 1_000, 10_000].iter() {
        let dataset = synthetic_dataset(*n_examples, N_FEATURES, 1.0, 42);

        group.bench_with_input(
            BenchmarkId::new("single_stage", n_examples),
            &dataset,
            |b, ds| {
                let map = scaling_map();
                b.iter(|| black_box(map.compile(black_box(ds))));
            },
        );
        group.bench_with_input(BenchmarkId::new("two_stages", n_examples), &dataset, |b, ds| {
            let map = staged_map();
            b.iter(|| black_box(map.compile(black_box(ds))));
        });
        group.bench_with_input(BenchmarkId::new("overrides", n_examples), &dataset, |b, ds| {
            let map = override_map(N_FEATURES);
            b.iter(|| black_box(map.compile(black_box(ds))));
        });
    }

    group.finish();
}

fn bench_compile_implicit_zeros(c: &mut Criterion) {
    let dataset = synthetic_dataset(5_000, N_FEATURES, 0.3, 11);
    let map = scaling_map();
    let options = CompileOptions {
        include_implicit_zeros: true,
    };

    c.bench_function("compile_implicit_zeros", |b| {
        b.iter(|| black_box(map.compile_with(black_box(&dataset), options)));
    });
}

criterion_group!(
    benches,
    bench_collect_statistics,
    bench_compile,
    bench_compile_implicit_zeros
);
criterion_main!(benches);
