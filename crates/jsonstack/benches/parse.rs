//! Benchmark – `jsonstack::parse`
#![allow(missing_docs)]

use std::{fmt::Write, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jsonstack::{Parser, ParserOptions, parse};

/// A deterministic document of `records` objects, each with a string, a
/// number, a boolean, a null and a short array.
fn make_records(records: usize) -> String {
    let mut s = String::from("{\"records\":[");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"name":"record-{i}","score":{}.5,"active":{},"parent":null,"tags":["a","b",{i}]}}"#,
            i * 7,
            i % 2 == 0,
        )
        .unwrap();
    }
    s.push_str("]}");
    s
}

/// `{"a":[[[...]]]}` with `depth` nested arrays.
fn make_nested(depth: usize) -> String {
    let mut s = String::from("{\"a\":");
    s.extend(std::iter::repeat_n('[', depth));
    s.extend(std::iter::repeat_n(']', depth));
    s.push('}');
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");
    for &records in &[10usize, 1_000, 10_000] {
        let payload = make_records(records);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &payload, |b, p| {
            b.iter(|| parse(black_box(p.as_bytes())).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("parse_nested");
    for &depth in &[100usize, 10_000] {
        let payload = make_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &payload, |b, p| {
            b.iter(|| parse(black_box(p.as_bytes())).unwrap());
        });
    }
    group.finish();
}

fn bench_push(c: &mut Criterion) {
    let payload = make_records(1_000);
    let mut group = c.benchmark_group("push_chunks");
    for &parts in &[1usize, 100, 10_000] {
        let chunk_size = payload.len().div_ceil(parts);
        group.bench_with_input(BenchmarkId::from_parameter(parts), &payload, |b, p| {
            b.iter(|| {
                let mut parser = Parser::new(ParserOptions::default());
                for chunk in p.as_bytes().chunks(chunk_size) {
                    parser.feed(black_box(chunk)).unwrap();
                }
                parser.finish().unwrap()
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_parse, bench_push }
criterion_main!(benches);
