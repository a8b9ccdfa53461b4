//! FILENAME: core/operations/benches/groupby.rs
//! Benchmarks group-by over tables of growing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use engine::{Domain, Table, Value};
use operations::config::GroupOrder;
use operations::ops::groupby;
use operations::AggregationType;

/// Table with a 50-item thematic key and two numeric columns.
fn build_table(records: usize) -> Table {
    let items: Vec<String> = (0..50).map(|i| format!("class{}", i)).collect();
    let mut table = Table::with_name("bench");
    table
        .add_column_with("class", Domain::thematic("classes", items.clone()).unwrap())
        .unwrap();
    table.add_column_with("count", Domain::integer()).unwrap();
    table.add_column_with("area", Domain::numeric()).unwrap();

    table
        .set_cells("class", (0..records).map(|r| Value::item(items[(r * 7) % 50].clone())))
        .unwrap();
    table
        .set_cells("count", (0..records).map(|r| Value::Number((r % 1000) as f64)))
        .unwrap();
    table
        .set_cells("area", (0..records).map(|r| Value::Number(r as f64 * 0.25)))
        .unwrap();
    table
}

fn bench_groupby(c: &mut Criterion) {
    let mut group = c.benchmark_group("groupby");
    for records in [1_000usize, 10_000, 100_000] {
        let table = build_table(records);
        group.bench_with_input(BenchmarkId::new("sum", records), &table, |b, table| {
            b.iter(|| {
                groupby(
                    black_box(table),
                    "class",
                    AggregationType::Sum,
                    GroupOrder::FirstSeen,
                )
                .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("average_sorted", records), &table, |b, table| {
            b.iter(|| {
                groupby(
                    black_box(table),
                    "class",
                    AggregationType::Average,
                    GroupOrder::Ascending,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_groupby);
criterion_main!(benches);
