// ABOUTME: Intensity validation and auto-adjustment configuration
// ABOUTME: Distribution tolerance and the hard iteration cap of the adjustment loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::env_or_default;
use crate::constants::intensity::{DEFAULT_MAX_ADJUSTMENT_ITERATIONS, DEFAULT_TOLERANCE_PERCENT};
use serde::{Deserialize, Serialize};

/// Validation and adjustment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Allowed percentage-point gap between realized and target shares
    pub tolerance_percent: f64,
    /// Hard cap on auto-adjustment iterations
    pub max_iterations: u32,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
            max_iterations: DEFAULT_MAX_ADJUSTMENT_ITERATIONS,
        }
    }
}

impl AdjustmentConfig {
    /// Load adjustment configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            tolerance_percent: env_or_default(
                "PACEKEEPER_DISTRIBUTION_TOLERANCE",
                DEFAULT_TOLERANCE_PERCENT,
            ),
            max_iterations: env_or_default(
                "PACEKEEPER_MAX_ADJUSTMENT_ITERATIONS",
                DEFAULT_MAX_ADJUSTMENT_ITERATIONS,
            ),
        }
    }
}
