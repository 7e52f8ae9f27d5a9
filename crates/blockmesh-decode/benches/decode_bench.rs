//! Benchmarks for block-name decoding and line scanning.

use blockmesh_decode::{BlockAddressDecoder, Grammar, TokenScanner};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const LINE_COUNT: usize = 4096;

fn block_name(depth: usize, seed: usize) -> String {
    let mut name = String::from("Z");
    for i in 0..depth {
        let digit = (seed + i * 5) % 8;
        name.push(char::from(b'0' + digit as u8));
    }
    name
}

/// Decode a single name at increasing depth.
fn bench_decode_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_depth");
    let decoder = BlockAddressDecoder::default();

    for depth in [1, 4, 10, 24, 52] {
        let name = block_name(depth, 3);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &name, |b, name| {
            b.iter(|| black_box(decoder.decode(black_box(name)).unwrap()));
        });
    }

    group.finish();
}

/// Scan a synthetic mesh dump, one block per line plus noise words.
fn bench_scan_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_lines");
    group.throughput(Throughput::Elements(LINE_COUNT as u64));

    let prefixed: Vec<String> = (0..LINE_COUNT)
        .map(|i| format!("cycle {i} leaf {} level {}", block_name(i % 10, i), i % 10))
        .collect();
    let delimited: Vec<String> = (0..LINE_COUNT)
        .map(|i| format!("cycle {i} leaf b#{}:{}", i % 8, (i / 8) % 8))
        .collect();

    let scanner = TokenScanner::new(Grammar::default()).unwrap();
    group.bench_function("prefixed", |b| {
        b.iter(|| black_box(scanner.scan_lines(&prefixed).blocks.len()));
    });

    let scanner = TokenScanner::new(Grammar::delimited_default()).unwrap();
    group.bench_function("delimited", |b| {
        b.iter(|| black_box(scanner.scan_lines(&delimited).blocks.len()));
    });

    group.finish();
}

criterion_group!(benches, bench_decode_depth, bench_scan_lines);
criterion_main!(benches);
