//! Statement building and batch insert throughput.

use criterion::{criterion_group, criterion_main, Criterion};
use rusqlite::Connection;

use dbwrap_core::{Constraints, FieldAssignment};
use dbwrap_storage::{insert_all, load_schema, QueryBuilder};

const DDL: &str = "CREATE TABLE positions (
    id INTEGER PRIMARY KEY,
    flightid INTEGER NOT NULL,
    time TEXT,
    lat REAL,
    long REAL,
    alt REAL
)";

fn row(i: i64) -> FieldAssignment {
    FieldAssignment::new()
        .with("flightid", i)
        .with("time", "2014-03-01T12:00:00")
        .with("lat", 30.35)
        .with("long", -94.08)
        .with("alt", 3500.0)
}

fn bench_builder(c: &mut Criterion) {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(DDL).unwrap();
    let schema = load_schema(&conn, "positions").unwrap();
    let builder = QueryBuilder::new("positions", &schema);

    let assignment = row(6321892);
    c.bench_function("build_insert_5_columns", |b| {
        b.iter(|| builder.insert(&assignment).unwrap())
    });

    let constraints = Constraints::new()
        .any_of("flightid", 1..=16i64)
        .eq("time", "2014-03-01T12:00:00");
    c.bench_function("build_select_17_args", |b| {
        b.iter(|| builder.select(&["lat", "long"], &constraints).unwrap())
    });

    // ── Batch: 1000 rows, every 10th one invalid ──
    let batch: Vec<FieldAssignment> = (0..1000)
        .map(|i| if i % 10 == 0 { row(i).with("heading", 90) } else { row(i) })
        .collect();
    c.bench_function("insert_all_1000_rows", |b| {
        b.iter(|| {
            let result = insert_all(&conn, &builder, &batch).unwrap();
            conn.execute("DELETE FROM positions", []).unwrap();
            result
        })
    });
}

criterion_group!(benches, bench_builder);
criterion_main!(benches);
