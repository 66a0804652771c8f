use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sms_backup::{RenderZone, format_records, parse_dump};

/// Generate a synthetic `content query` dump with N rows, every third one multi-line
fn generate_dump(num_rows: usize) -> String {
    let mut dump = String::new();

    for i in 0..num_rows {
        let body = if i % 3 == 0 {
            format!("\"Message {}, with comma\nand a second line\"", i)
        } else {
            format!("Message {}", i)
        };
        dump.push_str(&format!(
            "Row: {} _id={}, thread_id=1, address=+3361234{:04}, date={}, date_sent=0, read=1, type={}, body={}, service_center=NULL\n",
            i,
            i,
            i % 10_000,
            1_600_000_000_000u64 + i as u64 * 60_000,
            (i % 2) + 1,
            body
        ));
    }

    dump
}

fn bench_parse_dump(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_dump");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let dump = generate_dump(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_dump(black_box(&dump)));
        });
    }

    group.finish();
}

fn bench_format_records(c: &mut Criterion) {
    let records = parse_dump(&generate_dump(10_000));

    c.bench_function("format_records_10000", |b| {
        b.iter(|| format_records(black_box(&records), RenderZone::Utc));
    });
}

criterion_group!(benches, bench_parse_dump, bench_format_records);
criterion_main!(benches);
