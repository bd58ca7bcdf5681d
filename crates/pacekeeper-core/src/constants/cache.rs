// ABOUTME: Cache-related constants for capacity and entry expiry
// ABOUTME: Defaults for the in-process fitness metrics memoization cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

/// Default maximum number of memoized fitness results
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 100;

/// Default maximum age of a cache entry in seconds
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 300; // 5 minutes

/// Prefix for fitness metrics cache keys
pub const FITNESS_KEY_PREFIX: &str = "fitness:";
