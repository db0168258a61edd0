//! Resolver latency benchmarks.
//!
//! Covers one query per branch plus the fallback path, which scans every
//! keyword table before giving up.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use enquiry_chat::QueryResolver;
use enquiry_core::types::{Dataset, PhotoCursor};

const QUERIES: &[(&str, &str)] = &[
    ("transport_single", "tell me about bus 42"),
    ("transport_list", "list all bus routes"),
    ("diploma_select", "does excel have cse diploma"),
    ("engineering_list", "List engineering courses"),
    ("placements", "placement details"),
    ("photo", "show me a photo"),
    ("fallback", "hello, is anyone there?"),
];

fn bench_branches(c: &mut Criterion) {
    let resolver = QueryResolver::new(Arc::new(Dataset::builtin()));
    let mut group = c.benchmark_group("resolve");

    for (name, query) in QUERIES {
        group.bench_function(*name, |b| {
            b.iter(|| resolver.resolve(black_box(query), black_box(PhotoCursor::default())))
        });
    }
    group.finish();
}

fn bench_long_input(c: &mut Criterion) {
    let resolver = QueryResolver::new(Arc::new(Dataset::builtin()));
    let long = "please tell me something useful ".repeat(500);

    c.bench_function("resolve_long_fallback", |b| {
        b.iter(|| resolver.resolve(black_box(&long), PhotoCursor::default()))
    });
}

criterion_group!(benches, bench_branches, bench_long_input);
criterion_main!(benches);
