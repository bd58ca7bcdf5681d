// ABOUTME: Criterion benchmarks for the memoization cache and run signatures
// ABOUTME: Measures set/get latency, eviction churn and signature hashing cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

//! Criterion benchmarks for cache operations.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

mod common;

use common::fixtures::{generate_runs, RunBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pacekeeper::cache::{fitness_cache_key, MemoizationCache};
use pacekeeper::EngineContext;
use std::time::Duration;

fn key(index: usize) -> String {
    format!("fitness:bench-{index}")
}

/// Benchmark cache hits and misses
fn bench_cache_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_get");
    let mut cache = MemoizationCache::new(1_000, Duration::from_secs(3600));
    for i in 0..1_000 {
        cache.set(key(i), i, None);
    }

    group.bench_function("hit", |b| {
        let mut index = 0_usize;
        b.iter(|| {
            index = index.wrapping_add(1);
            cache.get(black_box(&key(index % 1_000)))
        });
    });

    group.bench_function("miss", |b| {
        let mut index = 10_000_usize;
        b.iter(|| {
            index = index.wrapping_add(1);
            cache.get(black_box(&key(index)))
        });
    });

    group.finish();
}

/// Benchmark inserts into a full cache, each evicting the LRU entry
fn bench_cache_eviction(c: &mut Criterion) {
    let mut cache = MemoizationCache::new(100, Duration::from_secs(3600));
    for i in 0..100 {
        cache.set(key(i), i, None);
    }

    c.bench_function("cache_set_evicting", |b| {
        let mut index = 100_usize;
        b.iter(|| {
            index = index.wrapping_add(1);
            cache.set(black_box(key(index)), index, None)
        });
    });
}

/// Benchmark run-history signature hashing
fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_signature");

    for size in [RunBatchSize::Small, RunBatchSize::Medium, RunBatchSize::Large] {
        let runs = generate_runs(size.count(), 0);
        group.bench_with_input(BenchmarkId::from_parameter(size.name()), &runs, |b, runs| {
            b.iter(|| fitness_cache_key(black_box(runs)));
        });
    }

    group.finish();
}

/// Benchmark memoized fitness computation through the context
fn bench_memoized_fitness(c: &mut Criterion) {
    let engine = EngineContext::default();
    let runs = generate_runs(RunBatchSize::Medium.count(), 3);
    let _ = engine.compute_fitness_metrics(&runs);

    c.bench_function("fitness_memoized_hit", |b| {
        b.iter(|| engine.compute_fitness_metrics(black_box(&runs)));
    });
}

criterion_group!(
    benches,
    bench_cache_get,
    bench_cache_eviction,
    bench_signature,
    bench_memoized_fitness
);
criterion_main!(benches);
