use columnar_frame::{
    ColumnType::{Numeric, Text},
    Config, DataFrame, Workers,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const ROWS: usize = 1_000_000;

fn generate_rows(rows: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|i| {
            vec![
                i.to_string(),
                format!("{:.3}", i as f64 * 1.5),
                format!("cat_{}", i % 100),
            ]
        })
        .collect()
}

fn bench_worker_scaling(c: &mut Criterion) {
    let raw = generate_rows(ROWS);
    let mut group = c.benchmark_group("build_by_workers");
    group.sample_size(10);
    group.throughput(Throughput::Elements(ROWS as u64));

    for n in [1, 2, 4, 8, 16] {
        let config = Config::new(vec![Text, Numeric, Text])
            .with_column_names(["id", "value", "category"])
            .with_workers(Workers::new(n).unwrap());

        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| black_box(DataFrame::new(&raw, config).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_worker_scaling);
criterion_main!(benches);
