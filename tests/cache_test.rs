// ABOUTME: Integration tests for the memoization cache and run signatures
// ABOUTME: Covers LRU eviction, lazy expiry, key hygiene, validated reads and batch ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{easy_history_with_heart_rate, flat_history, run_on};
use pacekeeper::cache::{fitness_cache_key, run_signature, MemoizationCache};
use pacekeeper::intelligence::FitnessMetricsCalculator;
use pacekeeper::EngineContext;
use std::thread;
use std::time::Duration;

#[test]
fn test_overflow_evicts_least_recently_used() {
    let mut cache = MemoizationCache::new(2, Duration::from_secs(60));
    assert!(cache.set("a", 1_u32, None));
    assert!(cache.set("b", 2, None));

    // Touch "a" so "b" becomes least recently used
    assert_eq!(cache.get("a"), Some(1));
    assert!(cache.set("c", 3, None));

    assert_eq!(cache.size(), 2);
    assert_eq!(cache.stats().evictions, 1);
    assert!(cache.contains("a"));
    assert!(!cache.contains("b"));
    assert!(cache.contains("c"));
}

#[test]
fn test_overwriting_a_key_is_not_an_eviction() {
    let mut cache = MemoizationCache::new(2, Duration::from_secs(60));
    cache.set("a", 1_u32, None);
    cache.set("a", 2, None);

    assert_eq!(cache.size(), 1);
    assert_eq!(cache.stats().evictions, 0);
    assert_eq!(cache.get("a"), Some(2));
}

#[test]
fn test_expired_entry_is_absent_before_purge() {
    let mut cache = MemoizationCache::new(10, Duration::from_millis(20));
    cache.set("stale", "value".to_owned(), None);
    thread::sleep(Duration::from_millis(40));

    assert_eq!(cache.get("stale"), None);
    assert_eq!(cache.stats().expirations, 1);
    assert!(cache.is_empty());
}

#[test]
fn test_purge_expired_removes_old_entries() {
    let mut cache = MemoizationCache::new(10, Duration::from_millis(20));
    cache.set("one", 1_u8, None);
    cache.set("two", 2, None);
    thread::sleep(Duration::from_millis(40));

    assert_eq!(cache.purge_expired(), 2);
    assert_eq!(cache.size(), 0);
}

#[test]
fn test_empty_keys_are_refused() {
    let mut cache = MemoizationCache::new(4, Duration::from_secs(60));
    assert!(!cache.set("", 1_u32, None));
    assert!(!cache.set("   ", 1, None));
    assert!(cache.is_empty());
}

#[test]
fn test_validated_get_checks_content_hash() {
    let mut cache = MemoizationCache::new(4, Duration::from_secs(60));
    cache.set("k", 7_u32, Some("abc".to_owned()));

    assert_eq!(cache.get_validated("k", "abc"), Some(7));
    assert_eq!(cache.get_validated("k", "xyz"), None);
    assert_eq!(cache.content_hash("k"), Some("abc"));
}

#[test]
fn test_clear_resets_entries_and_stats() {
    let mut cache = MemoizationCache::new(4, Duration::from_secs(60));
    cache.set("k", 1_u32, None);
    let _ = cache.get("k");
    let _ = cache.get("missing");
    cache.clear();

    assert_eq!(cache.size(), 0);
    assert_eq!(cache.stats().hits, 0);
    assert_eq!(cache.stats().misses, 0);
}

#[test]
fn test_signature_is_deterministic_and_order_sensitive() {
    let runs = flat_history();
    assert_eq!(run_signature(&runs), run_signature(&runs.clone()));

    let mut reordered = runs.clone();
    reordered.swap(0, 1);
    assert_ne!(run_signature(&runs), run_signature(&reordered));

    let mut changed = runs.clone();
    changed[3] = run_on(6, 10.0, 49.0).with_pace(4.9);
    assert_ne!(run_signature(&runs), run_signature(&changed));
}

#[test]
fn test_sub_millimetre_differences_get_distinct_keys() {
    let first = vec![
        run_on(0, 3.0, 12.0).with_effort(8),
        run_on(2, 5.0, 21.0).with_effort(8),
    ];
    let second = vec![
        run_on(0, 3.0, 12.0).with_effort(8),
        run_on(2, 5.0004, 20.9996).with_effort(8),
    ];
    assert_ne!(fitness_cache_key(&first), fitness_cache_key(&second));

    let engine = EngineContext::default();
    let warmed = engine.compute_fitness_metrics(&first);
    let cached = engine.compute_fitness_metrics(&second);

    assert_eq!(engine.cache_size(), 2);
    assert_eq!(cached, FitnessMetricsCalculator::compute(&second));
    assert!((cached.critical_speed - warmed.critical_speed).abs() > 1e-6);
}

#[test]
fn test_empty_history_has_no_signature() {
    assert_eq!(run_signature(&[]), None);
    assert_eq!(fitness_cache_key(&[]), None);

    let engine = EngineContext::default();
    let _ = engine.compute_fitness_metrics(&[]);
    assert_eq!(engine.cache_size(), 0);
}

#[test]
fn test_fitness_key_is_prefixed() {
    let key = fitness_cache_key(&flat_history()).unwrap();
    assert!(key.starts_with("fitness:"));
    assert_eq!(key.len(), "fitness:".len() + 64);
}

#[test]
fn test_batch_preserves_order_and_reuses_cache() {
    let engine = EngineContext::default();
    let flat = flat_history();
    let easy = easy_history_with_heart_rate();

    // Warm one history so the batch has a cached and an uncached part
    let warmed = engine.compute_fitness_metrics(&flat);

    let histories = vec![easy.clone(), flat.clone(), easy.clone(), Vec::new()];
    let results = engine.compute_fitness_metrics_batch(&histories);

    assert_eq!(results.len(), 4);
    assert_eq!(results[1], warmed);
    assert_eq!(results[0], results[2]);
    assert_eq!(results[0], FitnessMetricsCalculator::compute(&easy));
    assert_eq!(results[3], FitnessMetricsCalculator::compute(&[]));
    assert_eq!(engine.cache_size(), 2);
}

#[test]
fn test_clear_caches_empties_context() {
    let engine = EngineContext::default();
    let _ = engine.compute_fitness_metrics(&flat_history());
    assert_eq!(engine.cache_size(), 1);

    engine.clear_caches();
    assert_eq!(engine.cache_size(), 0);
    assert_eq!(engine.cache_stats().hits, 0);
}
