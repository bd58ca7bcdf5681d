// ABOUTME: Engine configuration with environment overrides and validation
// ABOUTME: Groups cache sizing and intensity adjustment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

//! Engine Configuration
//!
//! Configuration is environment-driven with compiled-in defaults:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PACEKEEPER_CACHE_MAX_ENTRIES` | 100 |
//! | `PACEKEEPER_CACHE_MAX_AGE_SECS` | 300 |
//! | `PACEKEEPER_DISTRIBUTION_TOLERANCE` | 5.0 |
//! | `PACEKEEPER_MAX_ADJUSTMENT_ITERATIONS` | 10 |

/// Validation tolerance and adjustment loop cap
pub mod adjustment;
/// Fitness memoization cache settings
pub mod cache;
/// Configuration error types
pub mod error;

pub use adjustment::AdjustmentConfig;
pub use cache::CacheConfig;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Maximum tolerance accepted by validation
const MAX_TOLERANCE_PERCENT: f64 = 50.0;

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fitness memoization cache
    pub cache: CacheConfig,
    /// Intensity validation and adjustment
    pub adjustment: AdjustmentConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            cache: CacheConfig::from_env(),
            adjustment: AdjustmentConfig::from_env(),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the cache has zero capacity or max age, the
    /// tolerance is negative or above 50 percentage points, or the iteration
    /// cap is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.max_entries == 0 {
            return Err(ConfigError::InvalidRange(
                "cache.max_entries must be greater than zero",
            ));
        }
        if self.cache.max_age_secs == 0 {
            return Err(ConfigError::InvalidRange(
                "cache.max_age_secs must be greater than zero",
            ));
        }
        let tolerance = self.adjustment.tolerance_percent;
        if !tolerance.is_finite() || !(0.0..=MAX_TOLERANCE_PERCENT).contains(&tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "adjustment.tolerance_percent must be between 0 and 50",
            ));
        }
        if self.adjustment.max_iterations == 0 {
            return Err(ConfigError::InvalidRange(
                "adjustment.max_iterations must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Read and parse an environment variable, warning and falling back on bad values
pub(crate) fn env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, "Invalid configuration value, using default");
            default
        }),
        Err(_) => default,
    }
}
