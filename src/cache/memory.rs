// ABOUTME: In-memory memoization cache with LRU eviction and max-age expiry
// ABOUTME: Expired entries are dropped lazily on read; capacity overflow evicts the LRU entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::CacheStats;
use crate::config::CacheConfig;
use crate::constants::cache::DEFAULT_CACHE_MAX_ENTRIES;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Cached value with its insertion time and optional content hash
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    content_hash: Option<String>,
}

impl<V> CacheEntry<V> {
    fn new(value: V, content_hash: Option<String>) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            content_hash,
        }
    }

    fn is_expired(&self, max_age: Duration) -> bool {
        self.inserted_at.elapsed() >= max_age
    }
}

/// Capacity- and age-bounded memoization cache
///
/// `LruCache` provides O(1) eviction of the least-recently-used entry, and a
/// successful `get` refreshes an entry's recency. The cache is not internally
/// synchronized: callers sharing it across threads wrap it in a mutex (see
/// `EngineContext`).
pub struct MemoizationCache<V> {
    store: LruCache<String, CacheEntry<V>>,
    max_age: Duration,
    stats: CacheStats,
}

impl<V> fmt::Debug for MemoizationCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoizationCache")
            .field("size", &self.store.len())
            .field("capacity", &self.store.cap())
            .field("max_age", &self.max_age)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<V: Clone> MemoizationCache<V> {
    /// Default cache capacity when a zero capacity is requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CACHE_MAX_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache holding at most `capacity` entries younger than `max_age`
    #[must_use]
    pub fn new(capacity: usize, max_age: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or_else(|| {
            warn!("Zero cache capacity requested, using default {DEFAULT_CACHE_MAX_ENTRIES}");
            Self::DEFAULT_CAPACITY
        });

        Self {
            store: LruCache::new(capacity),
            max_age,
            stats: CacheStats::default(),
        }
    }

    /// Create a cache from configuration
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.max_age())
    }

    /// Look up a value, treating entries older than the max age as absent
    pub fn get(&mut self, key: &str) -> Option<V> {
        let max_age = self.max_age;

        // LruCache::get is mutable (updates access order for LRU)
        let expired = match self.store.get(key) {
            Some(entry) if !entry.is_expired(max_age) => {
                self.stats.hits += 1;
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.store.pop(key);
            self.stats.expirations += 1;
            debug!(key, "Cache entry expired");
        }
        self.stats.misses += 1;
        None
    }

    /// Look up a value only if its stored content hash matches `expected_hash`
    pub fn get_validated(&mut self, key: &str, expected_hash: &str) -> Option<V> {
        let matches = self
            .store
            .peek(key)
            .is_some_and(|entry| entry.content_hash.as_deref() == Some(expected_hash));
        if matches {
            self.get(key)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Store a value; empty keys are refused and `false` is returned
    pub fn set(&mut self, key: impl Into<String>, value: V, content_hash: Option<String>) -> bool {
        let key = key.into();
        if key.trim().is_empty() {
            warn!("Refusing to cache a value under an empty key");
            return false;
        }

        let entry = CacheEntry::new(value, content_hash);

        // push returns the replaced entry for an existing key, or the evicted LRU entry
        if let Some((displaced_key, _)) = self.store.push(key.clone(), entry) {
            if displaced_key != key {
                self.stats.evictions += 1;
                debug!(evicted = %displaced_key, "Evicted least-recently-used cache entry");
            }
        }
        true
    }

    /// Whether a live entry exists, without touching recency
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.store
            .peek(key)
            .is_some_and(|entry| !entry.is_expired(self.max_age))
    }

    /// Content hash stored alongside an entry
    #[must_use]
    pub fn content_hash(&self, key: &str) -> Option<&str> {
        self.store
            .peek(key)
            .and_then(|entry| entry.content_hash.as_deref())
    }

    /// Remove an entry, returning its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.store.pop(key).map(|entry| entry.value)
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&mut self) -> usize {
        let max_age = self.max_age;

        // Collect expired keys first (can't modify while iterating)
        let expired_keys: Vec<String> = self
            .store
            .iter()
            .filter(|(_, entry)| entry.is_expired(max_age))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.store.pop(key);
        }

        let removed = expired_keys.len();
        self.stats.expirations += removed as u64;
        if removed > 0 {
            debug!("Purged {} expired cache entries", removed);
        }
        removed
    }

    /// Remove every entry and reset statistics
    pub fn clear(&mut self) {
        self.store.clear();
        self.stats = CacheStats::default();
    }

    /// Number of stored entries, including expired ones not yet purged
    #[must_use]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Maximum number of entries
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.cap().get()
    }

    /// Maximum entry age
    #[must_use]
    pub const fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Hit, miss, eviction and expiration counters
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }
}
