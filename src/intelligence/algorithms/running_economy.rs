// ABOUTME: Running economy estimate from sub-threshold runs via heart-rate reserve
// ABOUTME: Oxygen cost per kilometre averaged over qualifying runs, default 200 ml/kg/km
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::economy::{
    ASSUMED_MAX_HR, ASSUMED_RESTING_HR, DEFAULT, MAX_EFFORT, MIN_DURATION_MINUTES,
    VO2_AT_FULL_RESERVE,
};
use crate::models::RunRecord;

/// Heart-rate-reserve running economy approximation
///
/// `HRR = (HR - 60) / (190 - 60)`, `VO2 ≈ HRR · 50`, economy = VO2 / speed
/// (ml/kg/km, lower is more economical).
pub struct RunningEconomy;

impl RunningEconomy {
    /// Economy of a single run, if it qualifies
    ///
    /// Qualifying runs have heart rate and pace, last longer than 20 minutes,
    /// and are sub-threshold (effort 6 or below; unrecorded effort counts as easy).
    #[must_use]
    pub fn for_run(run: &RunRecord) -> Option<f64> {
        if run.duration_minutes <= MIN_DURATION_MINUTES {
            return None;
        }
        if run.effort_level.is_some_and(|effort| effort > MAX_EFFORT) {
            return None;
        }

        let heart_rate = f64::from(run.average_heart_rate?);
        let speed = run.speed_km_per_min()?;

        let reserve = (heart_rate - ASSUMED_RESTING_HR) / (ASSUMED_MAX_HR - ASSUMED_RESTING_HR);
        let vo2 = reserve * VO2_AT_FULL_RESERVE;
        (vo2 > 0.0 && speed > 0.0).then(|| vo2 / speed)
    }

    /// Average economy across qualifying runs, 200 when none qualify
    #[must_use]
    pub fn estimate(runs: &[RunRecord]) -> f64 {
        let values: Vec<f64> = runs.iter().filter_map(Self::for_run).collect();
        if values.is_empty() {
            return DEFAULT;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}
