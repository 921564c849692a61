//! Benchmarks for the chart builders
//!
//! Run with: cargo bench

use chartboard::charts::{line_chart, pie_chart, SliderValues};
use chartboard::datasets::DatasetStore;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_builders(c: &mut Criterion) {
    let store = DatasetStore::builtin();
    let values = SliderValues::new(10, 15, 7, 12);

    let mut group = c.benchmark_group("builders");

    group.bench_function("line_chart", |b| {
        b.iter(|| line_chart(black_box(&store), black_box("dataset1"), black_box(values)).unwrap())
    });

    group.bench_function("pie_chart", |b| {
        b.iter(|| pie_chart(black_box(&store), black_box("dataset1"), black_box(values)).unwrap())
    });

    group.finish();
}

fn bench_figure_serialization(c: &mut Criterion) {
    let store = DatasetStore::builtin();
    let figure = line_chart(&store, "dataset1", SliderValues::new(10, 15, 7, 12)).unwrap();

    c.bench_function("serialize_figure", |b| {
        b.iter(|| serde_json::to_string(black_box(&figure)).unwrap())
    });
}

criterion_group!(benches, bench_builders, bench_figure_serialization);
criterion_main!(benches);
