// ABOUTME: Training load calculations with per-run TSS and exponentially weighted acute/chronic load
// ABOUTME: Produces one sample per run with acute:chronic ratio, trend and a narrative recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::training_load::{
    ACUTE_TIME_CONSTANT, CHRONIC_TIME_CONSTANT, HIGH_RATIO, LOW_RATIO, TREND_LOOKBACK,
    TREND_THRESHOLD, VERY_HIGH_RATIO,
};
use crate::constants::physiology::{threshold, vdot};
use crate::models::RunRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of acute load over the trend lookback window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTrend {
    /// Acute load rose more than 10%
    Increasing,
    /// Acute load fell more than 10%
    Decreasing,
    /// Acute load within ±10%
    Stable,
}

/// Band of the acute:chronic ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBand {
    /// Ratio below 0.8
    Low,
    /// Ratio between 0.8 and 1.3
    Optimal,
    /// Ratio above 1.3
    High,
    /// Ratio above 1.5
    VeryHigh,
}

impl LoadBand {
    /// Classify an acute:chronic ratio
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < LOW_RATIO {
            Self::Low
        } else if ratio > VERY_HIGH_RATIO {
            Self::VeryHigh
        } else if ratio > HIGH_RATIO {
            Self::High
        } else {
            Self::Optimal
        }
    }

    /// Narrative recommendation for this band
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        match self {
            Self::Low => "Training load is low, increase gradually",
            Self::Optimal => "Training load is optimal",
            Self::High => "Training load is high, monitor fatigue",
            Self::VeryHigh => "Training load is very high, risk of overtraining",
        }
    }
}

/// Training load state after one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadSample {
    /// Date of the run, `None` for the empty-history summary
    pub date: Option<DateTime<Utc>>,
    /// Training stress score of this run
    pub tss: f64,
    /// Acute load (7-sample EWMA)
    pub acute_load: f64,
    /// Chronic load (28-sample EWMA)
    pub chronic_load: f64,
    /// Acute:chronic ratio, 1.0 when chronic load is zero
    pub ratio: f64,
    /// Chronic minus acute load (positive means fresh)
    pub form: f64,
    /// Acute load trend over the last 7 samples
    pub trend: LoadTrend,
    /// Ratio band
    pub band: LoadBand,
    /// Narrative recommendation for the ratio band
    pub recommendation: String,
}

impl TrainingLoadSample {
    /// Summary used when there is no load history
    #[must_use]
    pub fn empty() -> Self {
        let band = LoadBand::from_ratio(1.0);
        Self {
            date: None,
            tss: 0.0,
            acute_load: 0.0,
            chronic_load: 0.0,
            ratio: 1.0,
            form: 0.0,
            trend: LoadTrend::Stable,
            band,
            recommendation: band.recommendation().to_owned(),
        }
    }
}

/// Calculator for exponentially weighted training load
///
/// Each run updates `load = load · decay + tss · (1 - decay)` with
/// `decay = e^(-1/7)` (acute) and `e^(-1/28)` (chronic).
#[derive(Debug, Clone, Copy)]
pub struct TrainingLoadCalculator {
    acute_decay: f64,
    chronic_decay: f64,
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingLoadCalculator {
    /// Create a calculator with the standard 7/28 time constants
    #[must_use]
    pub fn new() -> Self {
        Self::with_time_constants(ACUTE_TIME_CONSTANT, CHRONIC_TIME_CONSTANT)
    }

    /// Create a calculator with custom acute and chronic time constants (in samples)
    #[must_use]
    pub fn with_time_constants(acute: f64, chronic: f64) -> Self {
        Self {
            acute_decay: (-1.0 / acute.max(1.0)).exp(),
            chronic_decay: (-1.0 / chronic.max(1.0)).exp(),
        }
    }

    /// Threshold pace (min/km) used when the supplied one is unusable
    #[must_use]
    pub fn fallback_threshold_pace() -> f64 {
        60.0 / (vdot::DEFAULT * threshold::VDOT_FRACTION / threshold::VDOT_DIVISOR)
    }

    /// Training stress score of one run
    ///
    /// `TSS = duration · (threshold_pace / avg_pace)² · 100 / 60`, `None` when the
    /// run has no derivable pace.
    #[must_use]
    pub fn calculate_tss(run: &RunRecord, threshold_pace: f64) -> Option<f64> {
        let pace = run.pace_min_per_km()?;
        let intensity_factor = threshold_pace / pace;
        Some(run.duration_minutes * intensity_factor * intensity_factor * 100.0 / 60.0)
    }

    /// One load sample per run, in chronological order
    ///
    /// Runs without a derivable pace are skipped. An empty or pace-less history
    /// yields an empty series.
    #[must_use]
    pub fn calculate(&self, runs: &[RunRecord], threshold_pace: f64) -> Vec<TrainingLoadSample> {
        let threshold_pace = if threshold_pace.is_finite() && threshold_pace > 0.0 {
            threshold_pace
        } else {
            debug!(threshold_pace, "Unusable threshold pace, using fallback");
            Self::fallback_threshold_pace()
        };

        // Sort data by date (oldest first) - required for correct EWMA calculation
        let mut sorted: Vec<&RunRecord> = runs.iter().collect();
        sorted.sort_by_key(|run| run.date);

        let mut acute = 0.0;
        let mut chronic = 0.0;
        let mut samples: Vec<TrainingLoadSample> = Vec::with_capacity(sorted.len());

        for run in sorted {
            let Some(tss) = Self::calculate_tss(run, threshold_pace) else {
                continue;
            };

            acute = acute * self.acute_decay + tss * (1.0 - self.acute_decay);
            chronic = chronic * self.chronic_decay + tss * (1.0 - self.chronic_decay);

            let ratio = Self::ratio(acute, chronic);
            let trend = samples
                .len()
                .checked_sub(TREND_LOOKBACK)
                .and_then(|index| samples.get(index))
                .map_or(LoadTrend::Stable, |past| Self::trend(past.acute_load, acute));
            let band = LoadBand::from_ratio(ratio);

            samples.push(TrainingLoadSample {
                date: Some(run.date),
                tss,
                acute_load: acute,
                chronic_load: chronic,
                ratio,
                form: chronic - acute,
                trend,
                band,
                recommendation: band.recommendation().to_owned(),
            });
        }

        samples
    }

    /// Latest sample, or the empty summary when there is no history
    #[must_use]
    pub fn latest(&self, runs: &[RunRecord], threshold_pace: f64) -> TrainingLoadSample {
        self.calculate(runs, threshold_pace)
            .pop()
            .unwrap_or_else(TrainingLoadSample::empty)
    }

    /// Acute:chronic ratio, 1.0 when chronic load is zero
    #[must_use]
    pub fn ratio(acute: f64, chronic: f64) -> f64 {
        if chronic > 0.0 {
            acute / chronic
        } else {
            1.0
        }
    }

    /// Classify the change between a past and current acute load
    #[must_use]
    pub fn trend(previous: f64, current: f64) -> LoadTrend {
        if previous <= 0.0 {
            return if current > 0.0 {
                LoadTrend::Increasing
            } else {
                LoadTrend::Stable
            };
        }

        let change = (current - previous) / previous;
        if change > TREND_THRESHOLD {
            LoadTrend::Increasing
        } else if change < -TREND_THRESHOLD {
            LoadTrend::Decreasing
        } else {
            LoadTrend::Stable
        }
    }
}
