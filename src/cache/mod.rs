// ABOUTME: Memoization layer for expensive pure computations over run histories
// ABOUTME: LRU + max-age in-memory cache and deterministic run-history signatures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

/// Capacity- and age-bounded LRU memoization cache
pub mod memory;
/// Deterministic run-history signatures and content hashes
pub mod signature;

pub use memory::MemoizationCache;
pub use signature::{content_hash, fitness_cache_key, run_signature};

use serde::{Deserialize, Serialize};

/// Counters describing cache behaviour since creation or the last clear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Reads that returned a value
    pub hits: u64,
    /// Reads that found nothing usable
    pub misses: u64,
    /// Entries dropped to make room for new ones
    pub evictions: u64,
    /// Entries dropped because they exceeded the max age
    pub expirations: u64,
}

impl CacheStats {
    /// Fraction of reads served from the cache (0.0 when nothing was read)
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let reads = self.hits + self.misses;
        if reads == 0 {
            0.0
        } else {
            self.hits as f64 / reads as f64
        }
    }
}
