use bytes::BytesMut;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timecol::prelude::*;

const ROWS: i64 = 10_000;

fn texts() -> Vec<String> {
    (0..ROWS)
        .map(|i| {
            let secs = i * 7 % 86_400;
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                secs / 3_600,
                secs / 60 % 60,
                secs % 60,
                i % 1_000
            )
        })
        .collect()
}

fn column(type_name: &str) -> AnyTimeColumn {
    ColumnBuilder::new("bench", type_name).build().unwrap()
}

fn bench_append(c: &mut Criterion) {
    let ticks: Vec<i64> = (0..ROWS).map(|i| i * 8_640).collect();
    let texts = texts();

    c.bench_function("time64_append_ticks", |b| {
        b.iter_batched(
            || column("Time64(3)"),
            |mut col| {
                black_box(col.append(Batch::from(&ticks[..])).unwrap());
                col
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("time64_append_texts", |b| {
        b.iter_batched(
            || column("Time64(3)"),
            |mut col| {
                black_box(col.append(Batch::from(&texts[..])).unwrap());
                col
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_read(c: &mut Criterion) {
    let mut zoned = column("Time64(3, 'Europe/Berlin')");
    zoned
        .append(Batch::from((0..ROWS).collect::<Vec<_>>()))
        .unwrap();

    c.bench_function("time64_scan_text_zoned", |b| {
        b.iter(|| {
            let mut text = String::new();
            for index in 0..zoned.rows() {
                zoned.scan_row(Dest::from(&mut text), index).unwrap();
            }
            black_box(text)
        })
    });

    c.bench_function("time_scan_ticks", |b| {
        let mut col = column("Time");
        col.append(Batch::from((0..ROWS).collect::<Vec<_>>()))
            .unwrap();
        b.iter(|| {
            let mut sum = 0i64;
            let mut tick = 0i64;
            for index in 0..col.rows() {
                col.scan_row(Dest::from(&mut tick), index).unwrap();
                sum += tick;
            }
            black_box(sum)
        })
    });
}

fn bench_wire(c: &mut Criterion) {
    let mut col = column("Time64(9)");
    col.append(Batch::from((0..ROWS).collect::<Vec<_>>()))
        .unwrap();
    let mut encoded = BytesMut::new();
    col.encode(&mut encoded);
    let encoded = encoded.freeze();

    c.bench_function("time64_encode", |b| {
        b.iter(|| {
            let mut buffer = BytesMut::new();
            col.encode(&mut buffer);
            black_box(buffer)
        })
    });

    c.bench_function("time64_decode", |b| {
        b.iter_batched(
            || (column("Time64(9)"), encoded.clone()),
            |(mut col, mut input)| {
                col.decode(&mut input, ROWS as usize).unwrap();
                col
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_append, bench_read, bench_wire);
criterion_main!(benches);
