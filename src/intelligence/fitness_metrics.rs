// ABOUTME: Fitness metrics computation combining every estimator into one immutable snapshot
// ABOUTME: VDOT, critical speed, economy, lactate threshold, training load, injury risk, recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::threshold::{VDOT_DIVISOR, VDOT_FRACTION};
use crate::errors::AppResult;
use crate::intelligence::algorithms::{CriticalSpeedModel, RunningEconomy, VdotCalculator};
use crate::intelligence::pattern_detection::PatternDetector;
use crate::intelligence::recovery_calculator::RecoveryCalculator;
use crate::intelligence::training_load::{TrainingLoadCalculator, TrainingLoadSample};
use crate::models::{RecoveryBiometrics, RunRecord};
use serde::{Deserialize, Serialize};

/// Fitness snapshot derived from a run history
///
/// Created fresh per computation and never mutated; recomputation produces a
/// new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessMetrics {
    /// Estimated aerobic capacity index
    pub vdot: f64,
    /// Critical speed in km/h
    pub critical_speed: f64,
    /// Running economy in ml/kg/km
    pub running_economy: f64,
    /// Lactate threshold velocity in km/h
    pub lactate_threshold: f64,
    /// Latest training load sample
    pub training_load: TrainingLoadSample,
    /// Injury risk (0-100)
    pub injury_risk: f64,
    /// Recovery score (0-100)
    pub recovery_score: f64,
}

impl FitnessMetrics {
    /// Lactate threshold pace in minutes per km
    #[must_use]
    pub fn threshold_pace_min_per_km(&self) -> f64 {
        60.0 / self.lactate_threshold
    }

    /// Predicted race time in minutes for a distance
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the VDOT is outside the supported range or the
    /// distance is not positive
    pub fn predict_race_minutes(&self, distance_km: f64) -> AppResult<f64> {
        VdotCalculator::predict_race_minutes(self.vdot, distance_km)
    }
}

/// Fitness metrics calculator
///
/// Every method is a pure function of its inputs; memoization is layered on
/// top by `EngineContext`.
pub struct FitnessMetricsCalculator;

impl FitnessMetricsCalculator {
    /// Lactate threshold velocity (km/h) derived from VDOT
    #[must_use]
    pub fn lactate_threshold(vdot: f64) -> f64 {
        vdot * VDOT_FRACTION / VDOT_DIVISOR
    }

    /// Compute fitness metrics without biometrics
    #[must_use]
    pub fn compute(runs: &[RunRecord]) -> FitnessMetrics {
        Self::compute_with_biometrics(runs, &RecoveryBiometrics::default())
    }

    /// Compute fitness metrics, refining recovery with optional biometrics
    #[must_use]
    pub fn compute_with_biometrics(
        runs: &[RunRecord],
        biometrics: &RecoveryBiometrics,
    ) -> FitnessMetrics {
        let vdot = VdotCalculator::estimate(runs).vdot;
        let lactate_threshold = Self::lactate_threshold(vdot);
        let threshold_pace = 60.0 / lactate_threshold;

        let training_load = TrainingLoadCalculator::new().latest(runs, threshold_pace);
        let recovery_score = RecoveryCalculator::recovery_score(runs, biometrics);
        let weekly = PatternDetector::detect_weekly_pattern(runs);
        let injury_risk = RecoveryCalculator::injury_risk(
            training_load.ratio,
            weekly.latest_week_increase_percent(),
            recovery_score,
        )
        .score;

        FitnessMetrics {
            vdot,
            critical_speed: CriticalSpeedModel::estimate(runs).speed_kmh,
            running_economy: RunningEconomy::estimate(runs),
            lactate_threshold,
            training_load,
            injury_risk,
            recovery_score,
        }
    }
}
