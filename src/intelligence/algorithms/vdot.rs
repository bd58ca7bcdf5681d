// ABOUTME: VDOT estimation from run history using the Daniels oxygen-cost regression
// ABOUTME: Also inverts the model for vVO2max and race-time prediction within the 30-85 range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::vdot::{
    DEFAULT, FASTEST_RUN_SAMPLE, MAX_SUPPORTED, MIN_DISTANCE_KM, MIN_SUPPORTED,
    PERCENT_MAX_A, PERCENT_MAX_A_RATE, PERCENT_MAX_B, PERCENT_MAX_BASE, PERCENT_MAX_B_RATE,
    RACE_EFFORT, VO2_INTERCEPT, VO2_LINEAR, VO2_QUADRATIC,
};
use crate::errors::{AppError, AppResult};
use crate::models::RunRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Minimum velocity accepted for VDOT calculation (m/min)
const MIN_VELOCITY: f64 = 100.0;

/// Maximum velocity accepted for VDOT calculation (m/min)
const MAX_VELOCITY: f64 = 500.0;

/// Bisection iterations used by race-time prediction
const PREDICTION_ITERATIONS: usize = 100;

/// Where a VDOT estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VdotSource {
    /// Best race or race-effort run
    RaceEffort,
    /// Fastest of the quickest training runs of at least 3 km
    FastestRuns,
    /// No qualifying run; conservative novice default
    Default,
}

/// VDOT estimate with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VdotEstimate {
    /// Estimated VDOT (whole number)
    pub vdot: f64,
    /// Which branch produced the estimate
    pub source: VdotSource,
}

/// Jack Daniels' VDOT model
///
/// Formula: `VO2 = -4.60 + 0.182258·v + 0.000104·v²` (v in m/min), normalized by
/// `%max = 0.8 + 0.1894393·e^(-0.012778·t) + 0.2989558·e^(-0.1932605·t)` (t in minutes).
///
/// # Scientific References
///
/// - Daniels, J. & Gilbert, J. (1979). "Oxygen Power: Performance Tables for Distance Runners".
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
pub struct VdotCalculator;

impl VdotCalculator {
    /// Oxygen cost (ml/kg/min) of running at `velocity` m/min
    #[must_use]
    pub fn oxygen_cost(velocity: f64) -> f64 {
        (VO2_QUADRATIC * velocity).mul_add(velocity, VO2_LINEAR.mul_add(velocity, VO2_INTERCEPT))
    }

    /// Fraction of VO2max sustainable for `duration_minutes`
    #[must_use]
    pub fn percent_max(duration_minutes: f64) -> f64 {
        PERCENT_MAX_B.mul_add(
            (PERCENT_MAX_B_RATE * duration_minutes).exp(),
            PERCENT_MAX_A.mul_add((PERCENT_MAX_A_RATE * duration_minutes).exp(), PERCENT_MAX_BASE),
        )
    }

    /// Unrounded VDOT for a performance, `None` if it is not physiologically plausible
    #[must_use]
    pub fn from_performance(distance_km: f64, duration_minutes: f64) -> Option<f64> {
        if distance_km <= 0.0 || duration_minutes <= 0.0 {
            return None;
        }

        let velocity = distance_km * 1000.0 / duration_minutes;
        if !(MIN_VELOCITY..=MAX_VELOCITY).contains(&velocity) {
            return None;
        }

        Some(Self::oxygen_cost(velocity) / Self::percent_max(duration_minutes))
    }

    /// Estimate VDOT from a run history
    ///
    /// Races and runs with effort 9+ take priority; the best of them is used.
    /// Otherwise the fastest of the three quickest runs of at least 3 km is used.
    /// Fails open to a VDOT of 35 when nothing qualifies.
    #[must_use]
    pub fn estimate(runs: &[RunRecord]) -> VdotEstimate {
        let race_best = runs
            .iter()
            .filter(|run| run.is_race || run.effort_at_least(RACE_EFFORT))
            .filter_map(|run| Self::from_performance(run.distance_km, run.duration_minutes))
            .max_by(f64::total_cmp);

        if let Some(vdot) = race_best {
            return VdotEstimate {
                vdot: vdot.round(),
                source: VdotSource::RaceEffort,
            };
        }

        let mut candidates: Vec<(f64, &RunRecord)> = runs
            .iter()
            .filter(|run| run.distance_km >= MIN_DISTANCE_KM)
            .filter_map(|run| run.pace_min_per_km().map(|pace| (pace, run)))
            .collect();
        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        candidates.truncate(FASTEST_RUN_SAMPLE);

        let fastest = candidates.first().and_then(|(pace, run)| {
            Self::from_performance(run.distance_km, pace * run.distance_km)
        });

        fastest.map_or_else(
            || {
                if candidates.is_empty() {
                    debug!("No run qualifies for VDOT estimation, using default {DEFAULT}");
                } else {
                    debug!(
                        "Fastest qualifying run is outside {MIN_VELOCITY}-{MAX_VELOCITY} m/min, \
                         using default {DEFAULT}"
                    );
                }
                VdotEstimate {
                    vdot: DEFAULT,
                    source: VdotSource::Default,
                }
            },
            |vdot| VdotEstimate {
                vdot: vdot.round(),
                source: VdotSource::FastestRuns,
            },
        )
    }

    /// Check that a VDOT lies within the supported 30-85 range
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when the VDOT is outside the range
    pub fn ensure_supported(vdot: f64) -> AppResult<()> {
        if (MIN_SUPPORTED..=MAX_SUPPORTED).contains(&vdot) {
            Ok(())
        } else {
            Err(AppError::value_out_of_range(format!(
                "VDOT {vdot:.1} is outside supported range ({MIN_SUPPORTED}-{MAX_SUPPORTED})"
            )))
        }
    }

    /// Velocity (m/min) whose oxygen cost equals the VDOT
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when the VDOT is outside 30-85
    pub fn velocity_at_vo2max(vdot: f64) -> AppResult<f64> {
        Self::ensure_supported(vdot)?;

        // Solve 0.000104v² + 0.182258v - (vdot + 4.60) = 0
        let c = -(vdot - VO2_INTERCEPT);
        let discriminant = VO2_LINEAR.mul_add(VO2_LINEAR, -(4.0 * VO2_QUADRATIC * c));
        if discriminant < 0.0 {
            return Err(AppError::internal("Invalid VDOT velocity calculation"));
        }

        Ok((-VO2_LINEAR + discriminant.sqrt()) / (2.0 * VO2_QUADRATIC))
    }

    /// Predict a race time in minutes for `distance_km` at the given VDOT
    ///
    /// Inverts the estimation model: finds the duration whose sustainable
    /// fraction of VO2max matches the oxygen cost of the implied velocity.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the VDOT is outside 30-85 or the distance is not positive
    pub fn predict_race_minutes(vdot: f64, distance_km: f64) -> AppResult<f64> {
        Self::ensure_supported(vdot)?;
        if distance_km <= 0.0 || !distance_km.is_finite() {
            return Err(AppError::invalid_input("Race distance must be positive"));
        }

        let distance_m = distance_km * 1000.0;
        let residual = |minutes: f64| {
            Self::oxygen_cost(distance_m / minutes) - vdot * Self::percent_max(minutes)
        };

        // Residual is positive when running too fast, negative when too slow
        let mut low = distance_m / MAX_VELOCITY;
        let mut high = distance_m / (MIN_VELOCITY / 2.0);
        for _ in 0..PREDICTION_ITERATIONS {
            let mid = (low + high) / 2.0;
            if residual(mid) > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
        }

        Ok((low + high) / 2.0)
    }
}
