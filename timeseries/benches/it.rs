use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flot_timeseries::{
    params::GroupBy,
    value::DataValue,
    Field, PageOutput, Parameters, Row, SeriesAggregator, TimeseriesPrinter,
};
use time::{macros::datetime, Duration};

/// One row per hour over a year, shaped like `?Date ?Visitors ?Downloads`.
fn rows() -> Vec<Row> {
    let start = datetime!(2012-01-01 0:00 UTC);
    (0..24 * 365)
        .map(|i| {
            Row::new(
                format!("Page {}", i % 16),
                [
                    Field::new("Date", [DataValue::Time(start + Duration::hours(i))]),
                    Field::new("Visitors", [DataValue::Number((i % 97) as f64)]),
                    Field::new(
                        "Downloads",
                        [
                            DataValue::Number((i % 7) as f64),
                            DataValue::Number(1.5),
                        ],
                    ),
                ],
            )
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let rows = rows();
    for group in [GroupBy::Subject, GroupBy::Property] {
        let aggregator = SeriesAggregator::new(group, Some(10.0));
        c.bench_function(&format!("aggregate by {group}"), |b| {
            b.iter(|| black_box(aggregator.aggregate(black_box(rows.clone()))))
        });
    }
}

fn bench_result_text(c: &mut Criterion) {
    let rows = rows();
    let printer = TimeseriesPrinter::new(Parameters::default());
    c.bench_function("result_text", |b| {
        b.iter(|| {
            let mut page = PageOutput::new();
            let html = printer.result_text(black_box(rows.clone()), &mut page).unwrap();
            black_box((html, page));
        })
    });
}

criterion_group!(benches, bench_aggregate, bench_result_text);
criterion_main!(benches);
