//! Benchmarks for vec2d operations.
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use vec2d::Vector2d;

fn bench_construct(c: &mut Criterion) {
    c.bench_function("new", |b| {
        b.iter(|| black_box(Vector2d::new(black_box(3.0), black_box(4.0))));
    });
}

fn bench_dot(c: &mut Criterion) {
    let v = Vector2d::new(3.0, 4.0);
    let w = Vector2d::new(-1.0, 2.0);
    c.bench_function("dot", |b| {
        b.iter(|| black_box(black_box(v).dot(&black_box(w))));
    });
}

fn bench_rotate(c: &mut Criterion) {
    c.bench_function("rotate", |b| {
        let mut v = Vector2d::new(3.0, 4.0);
        b.iter(|| {
            v.rotate(black_box(0.01));
            black_box(v.length())
        });
    });
}

fn bench_normalized(c: &mut Criterion) {
    let v = Vector2d::new(3.0, 4.0);
    c.bench_function("normalized", |b| {
        b.iter(|| black_box(black_box(v).normalized().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_construct,
    bench_dot,
    bench_rotate,
    bench_normalized
);
criterion_main!(benches);
