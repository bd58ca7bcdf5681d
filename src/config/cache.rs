// ABOUTME: Memoization cache configuration loaded from defaults or environment
// ABOUTME: Controls capacity and maximum entry age of the fitness metrics cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::env_or_default;
use crate::constants::cache::{DEFAULT_CACHE_MAX_AGE_SECS, DEFAULT_CACHE_MAX_ENTRIES};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache configuration for fitness memoization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries held before LRU eviction
    pub max_entries: usize,
    /// Maximum entry age in seconds before it is treated as absent
    pub max_age_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
        }
    }
}

impl CacheConfig {
    /// Load cache configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_entries: env_or_default("PACEKEEPER_CACHE_MAX_ENTRIES", DEFAULT_CACHE_MAX_ENTRIES),
            max_age_secs: env_or_default(
                "PACEKEEPER_CACHE_MAX_AGE_SECS",
                DEFAULT_CACHE_MAX_AGE_SECS,
            ),
        }
    }

    /// Maximum entry age as a `Duration`
    #[must_use]
    pub const fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }
}
