// ABOUTME: Intensity thresholds used to bucket segments and grade distribution violations
// ABOUTME: Also holds the fixed polarized whole-plan target and adjustment rewrite intensities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

/// Segments at or below this intensity count as easy
pub const EASY_MAX_INTENSITY: u8 = 75;

/// Segments at or below this intensity (and above easy) count as moderate
pub const MODERATE_MAX_INTENSITY: u8 = 85;

/// Upper bound (exclusive) of the band softened when easy time is short
pub const SOFTEN_UPPER_INTENSITY: u8 = 90;

/// Intensity assigned to segments rewritten to easy
pub const REWRITE_EASY_INTENSITY: u8 = 70;

/// Intensity assigned to hard segments under non-critical violations
pub const REWRITE_MODERATE_INTENSITY: u8 = 80;

/// Zone tag for segments rewritten to easy
pub const REWRITE_EASY_ZONE: &str = "easy";

/// Zone tag for hard segments lowered to moderate
pub const REWRITE_MODERATE_ZONE: &str = "steady";

/// Default tolerance in percentage points between realized and target share
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 5.0;

/// Default hard cap on auto-adjustment iterations
pub const DEFAULT_MAX_ADJUSTMENT_ITERATIONS: u32 = 10;

/// Severity bands by absolute percentage-point difference
pub mod severity {
    /// Differences up to this value are low severity
    pub const LOW_MAX: f64 = 5.0;
    /// Differences up to this value are medium severity
    pub const MEDIUM_MAX: f64 = 10.0;
    /// Differences up to this value are high severity, above is critical
    pub const HIGH_MAX: f64 = 15.0;
}

/// Whole-plan polarized target (easy / moderate / hard / very hard)
pub mod polarized {
    /// Easy share
    pub const EASY: f64 = 80.0;
    /// Moderate share
    pub const MODERATE: f64 = 5.0;
    /// Hard share
    pub const HARD: f64 = 15.0;
    /// Very hard share
    pub const VERY_HARD: f64 = 0.0;
}

/// Distribution reported when a scope has no scheduled minutes
pub mod fallback {
    /// Easy share
    pub const EASY: f64 = 80.0;
    /// Moderate share
    pub const MODERATE: f64 = 10.0;
    /// Hard share
    pub const HARD: f64 = 10.0;
}
