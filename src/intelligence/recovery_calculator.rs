// ABOUTME: Recovery score and additive injury risk heuristics
// ABOUTME: Recovery drops with recent hard runs; injury risk sums load, mileage and recovery deficit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::{injury_risk, recovery};
use crate::intelligence::training_load::LoadBand;
use crate::models::{RecoveryBiometrics, RunRecord};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Injury risk with the factors that contributed to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryRiskAssessment {
    /// Risk score (0-100)
    pub score: f64,
    /// Human-readable contributing factors
    pub factors: Vec<String>,
}

/// Recovery and injury risk calculator
pub struct RecoveryCalculator;

impl RecoveryCalculator {
    /// Recovery score (0-100)
    ///
    /// Starts at 70 and loses 5 points per hard run (effort 7+) in the 7 days up
    /// to the most recent run. HRV above 50 ms adds 10 (otherwise subtracts 10);
    /// resting heart rate below 60 adds 10 (otherwise subtracts 10).
    #[must_use]
    pub fn recovery_score(runs: &[RunRecord], biometrics: &RecoveryBiometrics) -> f64 {
        let mut score = recovery::BASELINE;

        if let Some(latest) = runs.iter().map(|run| run.date).max() {
            let window_start = latest - Duration::days(recovery::WINDOW_DAYS);
            let hard_runs = runs
                .iter()
                .filter(|run| run.date > window_start && run.effort_at_least(recovery::HARD_EFFORT))
                .count();
            score -= hard_runs as f64 * recovery::HARD_RUN_PENALTY;
        }

        if let Some(hrv) = biometrics.hrv_ms {
            score += if hrv > recovery::GOOD_HRV_MS {
                recovery::BIOMETRIC_ADJUSTMENT
            } else {
                -recovery::BIOMETRIC_ADJUSTMENT
            };
        }

        if let Some(resting_hr) = biometrics.resting_heart_rate {
            score += if resting_hr < recovery::GOOD_RESTING_HR {
                recovery::BIOMETRIC_ADJUSTMENT
            } else {
                -recovery::BIOMETRIC_ADJUSTMENT
            };
        }

        score.clamp(0.0, 100.0)
    }

    /// Additive injury risk (0-100)
    ///
    /// Sums a load-ratio contribution (10/20/25/40 for optimal/low/high/very high),
    /// a weekly mileage increase contribution (10/20/30 above 5%/10%/20%) and
    /// `(100 - recovery) · 0.3`.
    #[must_use]
    pub fn injury_risk(
        load_ratio: f64,
        weekly_increase_percent: Option<f64>,
        recovery_score: f64,
    ) -> InjuryRiskAssessment {
        let mut factors = Vec::new();

        let band = LoadBand::from_ratio(load_ratio);
        let load_contribution = match band {
            LoadBand::Optimal => injury_risk::RATIO_OPTIMAL,
            LoadBand::Low => {
                factors.push(format!("Low acute:chronic ratio ({load_ratio:.2})"));
                injury_risk::RATIO_LOW
            }
            LoadBand::High => {
                factors.push(format!("High acute:chronic ratio ({load_ratio:.2})"));
                injury_risk::RATIO_HIGH
            }
            LoadBand::VeryHigh => {
                factors.push(format!("Very high acute:chronic ratio ({load_ratio:.2})"));
                injury_risk::RATIO_VERY_HIGH
            }
        };

        let increase = weekly_increase_percent.unwrap_or(0.0);
        let mileage_contribution = if increase > 20.0 {
            injury_risk::MILEAGE_LARGE
        } else if increase > 10.0 {
            injury_risk::MILEAGE_MEDIUM
        } else if increase > 5.0 {
            injury_risk::MILEAGE_SMALL
        } else {
            0.0
        };
        if mileage_contribution > 0.0 {
            factors.push(format!("Weekly mileage up {increase:.0}%"));
        }

        let recovery_deficit = (100.0 - recovery_score.clamp(0.0, 100.0))
            * injury_risk::RECOVERY_DEFICIT_WEIGHT;

        InjuryRiskAssessment {
            score: (load_contribution + mileage_contribution + recovery_deficit).clamp(0.0, 100.0),
            factors,
        }
    }
}
