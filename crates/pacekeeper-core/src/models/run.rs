// ABOUTME: Run record model representing one historical workout in a run history
// ABOUTME: Immutable input owned by the caller; the engine only reads it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// When the run started
    pub date: DateTime<Utc>,
    /// Distance covered in kilometres
    pub distance_km: f64,
    /// Moving duration in minutes
    pub duration_minutes: f64,
    /// Average pace in minutes per kilometre, when recorded
    #[serde(default)]
    pub average_pace: Option<f64>,
    /// Average heart rate in bpm, when recorded
    #[serde(default)]
    pub average_heart_rate: Option<u32>,
    /// Perceived effort on a 1-10 scale, when recorded
    #[serde(default)]
    pub effort_level: Option<u8>,
    /// Whether the run was a race
    #[serde(default)]
    pub is_race: bool,
}

impl RunRecord {
    /// Create a run with the required fields; optional fields start empty
    #[must_use]
    pub const fn new(date: DateTime<Utc>, distance_km: f64, duration_minutes: f64) -> Self {
        Self {
            date,
            distance_km,
            duration_minutes,
            average_pace: None,
            average_heart_rate: None,
            effort_level: None,
            is_race: false,
        }
    }

    /// Set the recorded average pace (min/km)
    #[must_use]
    pub fn with_pace(mut self, pace_min_per_km: f64) -> Self {
        self.average_pace = Some(pace_min_per_km);
        self
    }

    /// Set the recorded average heart rate
    #[must_use]
    pub fn with_heart_rate(mut self, bpm: u32) -> Self {
        self.average_heart_rate = Some(bpm);
        self
    }

    /// Set the perceived effort level (clamped to 1-10)
    #[must_use]
    pub fn with_effort(mut self, effort: u8) -> Self {
        self.effort_level = Some(effort.clamp(1, 10));
        self
    }

    /// Mark the run as a race
    #[must_use]
    pub fn as_race(mut self) -> Self {
        self.is_race = true;
        self
    }

    /// Average pace in min/km, falling back to duration / distance
    #[must_use]
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.average_pace {
            Some(pace) if pace > 0.0 => Some(pace),
            _ if self.distance_km > 0.0 && self.duration_minutes > 0.0 => {
                Some(self.duration_minutes / self.distance_km)
            }
            _ => None,
        }
    }

    /// Average speed in km per minute
    #[must_use]
    pub fn speed_km_per_min(&self) -> Option<f64> {
        self.pace_min_per_km().map(|pace| 1.0 / pace)
    }

    /// Effort at or above the given level; unrecorded effort never qualifies
    #[must_use]
    pub fn effort_at_least(&self, level: u8) -> bool {
        self.effort_level.is_some_and(|effort| effort >= level)
    }
}

/// Optional biometrics that refine the recovery score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveryBiometrics {
    /// Heart rate variability (RMSSD, ms)
    pub hrv_ms: Option<f64>,
    /// Morning resting heart rate in bpm
    pub resting_heart_rate: Option<u32>,
}
