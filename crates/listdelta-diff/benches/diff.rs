use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use listdelta_diff::diff;

fn scattered_edits(c: &mut Criterion) {
    let source: Vec<u32> = (0..1_000).collect();
    let destination: Vec<u32> = source
        .iter()
        .map(|&v| if v % 97 == 0 { v + 1_000_000 } else { v })
        .collect();

    c.bench_function("diff/scattered_edits_1k", |b| {
        b.iter(|| diff(black_box(&source).iter().copied(), black_box(&destination).iter().copied()))
    });
}

fn affix_trimmed(c: &mut Criterion) {
    let source: Vec<u32> = (0..100_000).collect();
    let mut destination = source.clone();
    destination.remove(50_000);

    c.bench_function("diff/single_removal_100k", |b| {
        b.iter(|| diff(black_box(&source).iter().copied(), black_box(&destination).iter().copied()))
    });
}

criterion_group!(benches, scattered_edits, affix_trimmed);
criterion_main!(benches);
