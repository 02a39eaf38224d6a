use columnar_frame::{
    ColumnType::{Numeric, Text},
    Config, DataFrame, Workers, stat,
};
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const ROWS: usize = 1_000_000;

fn make_frame(rows: usize) -> DataFrame {
    let raw: Vec<Vec<String>> = (0..rows)
        .map(|i| {
            vec![
                format!("${}.{:02}", i % 1000, i % 100),
                format!("{}", i % 977),
                format!("{}", i % 13),
            ]
        })
        .collect();
    let config = Config::new(vec![Text, Numeric, Numeric])
        .with_column_names(["price", "value", "qty"])
        .with_workers(Workers::new(8).unwrap());
    DataFrame::new(&raw, &config).unwrap()
}

fn frame_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("DataFrame");
    group.sample_size(10);
    group.throughput(Throughput::Elements(ROWS as u64));

    let df = make_frame(ROWS);

    // Each append grows the store, so every iteration gets a fresh frame.
    group.bench_function("append_derived_column", |b| {
        b.iter_batched(
            || make_frame(ROWS),
            |fresh| {
                fresh
                    .append_numeric_column_from_text("usd", "price", |s| {
                        s.trim_start_matches('$').parse::<f64>()
                    })
                    .unwrap();
                fresh
            },
            BatchSize::PerIteration,
        )
    });

    group.bench_function("numeric_values", |b| {
        b.iter(|| black_box(df.numeric_values(&["value", "qty"]).unwrap()));
    });

    group.bench_function("mean_value", |b| {
        let values = df.numeric_column("value").unwrap();
        b.iter(|| black_box(stat::mean(&values, df.workers())));
    });

    group.bench_function("render_tail", |b| {
        b.iter(|| black_box(df.tail(20).render()));
    });

    group.finish();
}

criterion_group!(benches, frame_operations);
criterion_main!(benches);
