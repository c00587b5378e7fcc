//! Benchmarks for the AND combinator
//!
//! Tests performance of:
//! - Immediate conjunctions (all valid, early failure)
//! - Deferred conjunctions driven to completion
//! - Nested compositions

use std::hint::black_box;

use changeset_hofs::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use futures::executor::block_on;

fn immediate(n: usize) -> And {
    and((0..n).map(|_| from_fn(|_| true).shared()))
}

fn deferred(n: usize) -> And {
    and((0..n).map(|_| from_async(|_| futures::future::ready(true)).shared()))
}

// ============================================================================
// IMMEDIATE
// ============================================================================

fn bench_immediate(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_immediate");
    let args = ChangeArgs::new("name").with_new_value("alice");

    for n in [1, 5, 20] {
        let validator = immediate(n);
        group.bench_with_input(BenchmarkId::new("all_valid", n), &validator, |b, v| {
            b.iter(|| v.validate(black_box(&args)));
        });
    }

    let early = compose![from_fn(|_| "nope"), immediate(20)];
    group.bench_function("fail_first", |b| {
        b.iter(|| early.validate(black_box(&args)));
    });

    group.finish();
}

// ============================================================================
// DEFERRED
// ============================================================================

fn bench_deferred(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_deferred");
    let args = ChangeArgs::new("name").with_new_value("alice");

    for n in [1, 5, 20] {
        let validator = deferred(n);
        group.bench_with_input(BenchmarkId::new("all_valid", n), &validator, |b, v| {
            b.iter(|| block_on(v.validate(black_box(&args)).unwrap().resolve()));
        });
    }

    let switch_late = compose![immediate(10), deferred(1), immediate(10)];
    group.bench_function("switch_after_ten", |b| {
        b.iter(|| block_on(switch_late.validate(black_box(&args)).unwrap().resolve()));
    });

    group.finish();
}

// ============================================================================
// NESTED
// ============================================================================

fn bench_nested(c: &mut Criterion) {
    let args = ChangeArgs::default();
    let validator = compose![
        compose![immediate(3), immediate(3)],
        compose![immediate(3), compose![immediate(3)]],
    ];

    c.bench_function("and_nested_depth_3", |b| {
        b.iter(|| validator.validate(black_box(&args)));
    });
}

criterion_group!(benches, bench_immediate, bench_deferred, bench_nested);
criterion_main!(benches);
