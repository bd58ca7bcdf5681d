// ABOUTME: Intensity distribution targets and realized easy/moderate/hard time shares
// ABOUTME: Buckets segment minutes by intensity and rounds shares to whole percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::intensity::{fallback, polarized};
use crate::models::{IntensityBucket, Segment};
use serde::{Deserialize, Serialize};

/// Percentage split of training time across intensity buckets
///
/// Targets use all four fields; realized distributions never report
/// `very_hard` separately because segments above 85 all count as hard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityDistribution {
    /// Share of time at intensity up to 75
    pub easy: f64,
    /// Share of time at intensity 76-85
    pub moderate: f64,
    /// Share of time above 85
    pub hard: f64,
    /// Share of time at maximal intensity (targets only)
    #[serde(default)]
    pub very_hard: f64,
}

impl IntensityDistribution {
    /// Create a distribution from percentages
    #[must_use]
    pub const fn new(easy: f64, moderate: f64, hard: f64, very_hard: f64) -> Self {
        Self {
            easy,
            moderate,
            hard,
            very_hard,
        }
    }

    /// Fixed plan-wide polarized target (80/5/15/0)
    #[must_use]
    pub const fn polarized() -> Self {
        Self::new(
            polarized::EASY,
            polarized::MODERATE,
            polarized::HARD,
            polarized::VERY_HARD,
        )
    }

    /// Distribution reported when there are no scheduled minutes (80/10/10)
    #[must_use]
    pub const fn fallback() -> Self {
        Self::new(fallback::EASY, fallback::MODERATE, fallback::HARD, 0.0)
    }

    /// Hard and very hard combined
    #[must_use]
    pub fn hard_total(&self) -> f64 {
        self.hard + self.very_hard
    }

    /// Sum of all shares
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.easy + self.moderate + self.hard + self.very_hard
    }
}

/// Realized minutes per bucket and the resulting percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizedDistribution {
    /// Minutes at easy intensity
    pub easy_minutes: f64,
    /// Minutes at moderate intensity
    pub moderate_minutes: f64,
    /// Minutes at hard intensity
    pub hard_minutes: f64,
    /// All scheduled minutes
    pub total_minutes: f64,
    /// Whole-number percentages, or the fallback when nothing is scheduled
    pub percentages: IntensityDistribution,
}

impl RealizedDistribution {
    /// Bucket segment minutes by intensity
    #[must_use]
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Self {
        let mut easy_minutes = 0.0;
        let mut moderate_minutes = 0.0;
        let mut hard_minutes = 0.0;

        for segment in segments {
            let minutes = segment.duration_minutes.max(0.0);
            match segment.bucket() {
                IntensityBucket::Easy => easy_minutes += minutes,
                IntensityBucket::Moderate => moderate_minutes += minutes,
                IntensityBucket::Hard => hard_minutes += minutes,
            }
        }

        let total_minutes = easy_minutes + moderate_minutes + hard_minutes;
        let percentages = if total_minutes > 0.0 {
            let share = |minutes: f64| (minutes / total_minutes * 100.0).round();
            IntensityDistribution::new(
                share(easy_minutes),
                share(moderate_minutes),
                share(hard_minutes),
                0.0,
            )
        } else {
            IntensityDistribution::fallback()
        };

        Self {
            easy_minutes,
            moderate_minutes,
            hard_minutes,
            total_minutes,
            percentages,
        }
    }

    /// Whether any minutes were scheduled
    #[must_use]
    pub fn has_minutes(&self) -> bool {
        self.total_minutes > 0.0
    }
}
