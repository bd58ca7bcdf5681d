// ABOUTME: Training pace zones derived from VDOT or lactate-threshold pace
// ABOUTME: Maps segment zone names onto paces with an easy-zone fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::pace_zones::{threshold as lt, vdot as vv};
use crate::constants::physiology::threshold::{VDOT_DIVISOR, VDOT_FRACTION};
use crate::errors::{AppError, AppResult};
use crate::intelligence::VdotCalculator;
use crate::models::Plan;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which foundation metric a methodology derives paces from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceSystem {
    /// Percentages of velocity at VO2max
    Vdot,
    /// Multipliers of lactate-threshold pace
    LactateThreshold,
}

/// Foundation metric supplied for pace derivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationMetric {
    /// VDOT index (supported 30-85)
    Vdot(f64),
    /// Lactate-threshold pace in seconds per km (supported 169-477, the image of VDOT 30-85)
    ThresholdPace(f64),
}

impl FoundationMetric {
    /// Reject metrics outside the supported range
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` for an unsupported VDOT or threshold pace
    pub fn ensure_supported(&self) -> AppResult<()> {
        match *self {
            Self::Vdot(vdot) => VdotCalculator::ensure_supported(vdot),
            Self::ThresholdPace(pace) => {
                if pace.is_finite()
                    && (lt::MIN_SUPPORTED_SEC_PER_KM..=lt::MAX_SUPPORTED_SEC_PER_KM).contains(&pace)
                {
                    Ok(())
                } else {
                    Err(AppError::value_out_of_range(format!(
                        "Threshold pace {pace:.0} s/km is outside supported range ({}-{})",
                        lt::MIN_SUPPORTED_SEC_PER_KM,
                        lt::MAX_SUPPORTED_SEC_PER_KM
                    )))
                }
            }
        }
    }

    /// Express the metric as a VDOT, inverting the lactate threshold relation if needed
    #[must_use]
    pub fn as_vdot(&self) -> f64 {
        match *self {
            Self::Vdot(vdot) => vdot,
            Self::ThresholdPace(pace) => 3600.0 / pace * VDOT_DIVISOR / VDOT_FRACTION,
        }
    }

    /// Express the metric as a threshold pace in seconds per km
    #[must_use]
    pub fn as_threshold_pace(&self) -> f64 {
        match *self {
            Self::Vdot(vdot) => 3600.0 / (vdot * VDOT_FRACTION / VDOT_DIVISOR),
            Self::ThresholdPace(pace) => pace,
        }
    }
}

/// Named pace zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceZone {
    /// Recovery jogging
    Recovery,
    /// Easy and long running
    Easy,
    /// Marathon and steady running
    Marathon,
    /// Tempo and threshold running
    Threshold,
    /// VO2max intervals
    Interval,
    /// Short fast repetitions
    Repetition,
}

impl PaceZone {
    /// Map a free-form segment zone name, falling back to easy for unknown names
    #[must_use]
    pub fn from_zone_name(zone: &str) -> Self {
        match zone.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "recovery" | "recovery_run" | "jog" | "cooldown" | "cool_down" => Self::Recovery,
            "marathon" | "marathon_pace" | "steady" | "moderate" | "general_aerobic_plus" => {
                Self::Marathon
            }
            "threshold" | "tempo" | "lactate_threshold" | "cruise" | "cruise_intervals" => {
                Self::Threshold
            }
            "interval" | "intervals" | "vo2max" | "vo2_max" | "hard" => Self::Interval,
            "repetition" | "repetitions" | "reps" | "speed" | "sprint" | "strides" => {
                Self::Repetition
            }
            "easy" | "aerobic" | "long" | "long_run" | "warmup" | "warm_up" | "base" => Self::Easy,
            other => {
                debug!(zone = other, "Unmapped zone name, using easy pace");
                Self::Easy
            }
        }
    }
}

/// Training paces in seconds per km
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceZones {
    /// Recovery pace
    pub recovery: f64,
    /// Easy pace
    pub easy: f64,
    /// Marathon pace
    pub marathon: f64,
    /// Threshold pace
    pub threshold: f64,
    /// Interval pace
    pub interval: f64,
    /// Repetition pace
    pub repetition: f64,
}

impl PaceZones {
    /// Paces as fractions of velocity at VO2max
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when the VDOT is outside 30-85
    pub fn from_vdot(vdot: f64) -> AppResult<Self> {
        let velocity = VdotCalculator::velocity_at_vo2max(vdot)?;
        let pace = |fraction: f64| 60_000.0 / (velocity * fraction);

        Ok(Self {
            recovery: pace(vv::RECOVERY),
            easy: pace(vv::EASY),
            marathon: pace(vv::MARATHON),
            threshold: pace(vv::THRESHOLD),
            interval: pace(vv::INTERVAL),
            repetition: pace(vv::REPETITION),
        })
    }

    /// Paces as multipliers of lactate-threshold pace
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when the pace is outside 169-477 s/km
    pub fn from_threshold_pace(sec_per_km: f64) -> AppResult<Self> {
        FoundationMetric::ThresholdPace(sec_per_km).ensure_supported()?;

        Ok(Self {
            recovery: sec_per_km * lt::RECOVERY,
            easy: sec_per_km * lt::EASY,
            marathon: sec_per_km * lt::MARATHON,
            threshold: sec_per_km * lt::THRESHOLD,
            interval: sec_per_km * lt::INTERVAL,
            repetition: sec_per_km * lt::REPETITION,
        })
    }

    /// Pace for a zone
    #[must_use]
    pub const fn for_zone(&self, zone: PaceZone) -> f64 {
        match zone {
            PaceZone::Recovery => self.recovery,
            PaceZone::Easy => self.easy,
            PaceZone::Marathon => self.marathon,
            PaceZone::Threshold => self.threshold,
            PaceZone::Interval => self.interval,
            PaceZone::Repetition => self.repetition,
        }
    }

    /// Pace for a free-form zone name, easy pace when the name is unknown
    #[must_use]
    pub fn for_zone_name(&self, zone: &str) -> f64 {
        self.for_zone(PaceZone::from_zone_name(zone))
    }

    /// Copy of the plan with every segment's target pace filled from its zone
    #[must_use]
    pub fn annotate(&self, plan: &Plan) -> Plan {
        let mut annotated = plan.clone();
        for segment in annotated
            .blocks
            .iter_mut()
            .flat_map(|block| block.microcycles.iter_mut())
            .flat_map(|microcycle| microcycle.workouts.iter_mut())
            .flat_map(|workout| workout.segments.iter_mut())
        {
            segment.target_pace_sec_per_km = Some(self.for_zone_name(&segment.zone));
        }
        annotated
    }
}
