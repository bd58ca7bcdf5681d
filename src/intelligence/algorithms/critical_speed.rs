// ABOUTME: Critical speed estimation from time-trial efforts using the two-point linear model
// ABOUTME: Falls back to 10 km/h when fewer than two qualifying time trials exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::critical_speed::{DEFAULT_KMH, MIN_DISTANCE_KM, TIME_TRIAL_EFFORT};
use crate::models::RunRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Critical speed estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalSpeedEstimate {
    /// Critical speed in km/h
    pub speed_kmh: f64,
    /// Distance (m) coverable above critical speed, when derivable
    pub d_prime_meters: Option<f64>,
    /// Whether the fixed default was used
    pub is_default: bool,
}

impl CriticalSpeedEstimate {
    const fn fallback() -> Self {
        Self {
            speed_kmh: DEFAULT_KMH,
            d_prime_meters: None,
            is_default: true,
        }
    }
}

/// Two-point critical speed model
///
/// `CS = (D_long - D_short) / (T_long - T_short)` using the shortest and
/// longest qualifying time trials (distance >= 3 km, effort >= 8).
///
/// Reference: Hughson, R.L., Orok, C.J. & Staudt, L.E. (1984). "A high velocity
/// treadmill running test to assess endurance running potential."
pub struct CriticalSpeedModel;

impl CriticalSpeedModel {
    /// Whether a run qualifies as a time trial
    #[must_use]
    pub fn is_time_trial(run: &RunRecord) -> bool {
        run.distance_km >= MIN_DISTANCE_KM
            && run.duration_minutes > 0.0
            && run.effort_at_least(TIME_TRIAL_EFFORT)
    }

    /// Estimate critical speed from a run history
    #[must_use]
    pub fn estimate(runs: &[RunRecord]) -> CriticalSpeedEstimate {
        let trials: Vec<&RunRecord> = runs.iter().filter(|run| Self::is_time_trial(run)).collect();
        if trials.len() < 2 {
            debug!(
                trials = trials.len(),
                "Not enough time trials for critical speed, using default"
            );
            return CriticalSpeedEstimate::fallback();
        }

        let shortest = trials
            .iter()
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        let longest = trials
            .iter()
            .max_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        let (Some(short), Some(long)) = (shortest, longest) else {
            return CriticalSpeedEstimate::fallback();
        };

        let distance_delta = long.distance_km - short.distance_km;
        let time_delta = long.duration_minutes - short.duration_minutes;
        if distance_delta <= 0.0 || time_delta <= 0.0 {
            return CriticalSpeedEstimate::fallback();
        }

        let km_per_minute = distance_delta / time_delta;
        let d_prime_km = km_per_minute.mul_add(-short.duration_minutes, short.distance_km);

        CriticalSpeedEstimate {
            speed_kmh: km_per_minute * 60.0,
            d_prime_meters: (d_prime_km > 0.0).then_some(d_prime_km * 1000.0),
            is_default: false,
        }
    }
}
