// ABOUTME: Methodology strategy: phase targets, pace derivation and workout selection as data
// ABOUTME: Named methodologies differ only in their tables and pace system, dispatched by one match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::paces::{FoundationMetric, PaceSystem, PaceZones};
use crate::errors::{AppError, AppResult};
use crate::models::{Plan, TrainingPhase, WorkoutType};
use crate::plan::IntensityDistribution;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every fourth week within a phase is a down week
const DOWN_WEEK_INTERVAL: u32 = 4;

/// Supported training methodologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Methodology {
    /// VDOT-driven quality sessions
    Daniels,
    /// High-volume aerobic base with late sharpening
    Lydiard,
    /// Lactate-threshold centric marathon training
    Pfitzinger,
    /// Cumulative fatigue with frequent moderate work
    Hansons,
    /// Strict 80/20 easy-to-hard split
    EightyTwenty,
}

impl Methodology {
    /// All methodologies
    pub const ALL: [Self; 5] = [
        Self::Daniels,
        Self::Lydiard,
        Self::Pfitzinger,
        Self::Hansons,
        Self::EightyTwenty,
    ];

    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daniels => "daniels",
            Self::Lydiard => "lydiard",
            Self::Pfitzinger => "pfitzinger",
            Self::Hansons => "hansons",
            Self::EightyTwenty => "eighty_twenty",
        }
    }
}

impl fmt::Display for Methodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Methodology {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "daniels" => Ok(Self::Daniels),
            "lydiard" => Ok(Self::Lydiard),
            "pfitzinger" => Ok(Self::Pfitzinger),
            "hansons" | "hanson" => Ok(Self::Hansons),
            "eighty_twenty" | "80_20" | "80/20" => Ok(Self::EightyTwenty),
            _ => Err(AppError::not_found(format!("Methodology '{s}'"))),
        }
    }
}

/// One value per training phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTable<T> {
    /// Base phase value
    pub base: T,
    /// Build phase value
    pub build: T,
    /// Peak phase value
    pub peak: T,
    /// Taper phase value
    pub taper: T,
    /// Recovery phase value
    pub recovery: T,
}

impl<T> PhaseTable<T> {
    /// Value for a phase
    #[must_use]
    pub const fn get(&self, phase: TrainingPhase) -> &T {
        match phase {
            TrainingPhase::Base => &self.base,
            TrainingPhase::Build => &self.build,
            TrainingPhase::Peak => &self.peak,
            TrainingPhase::Taper => &self.taper,
            TrainingPhase::Recovery => &self.recovery,
        }
    }
}

/// Configured policy of one methodology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodologyStrategy {
    /// Methodology tag
    pub methodology: Methodology,
    /// Human-readable name
    pub display_name: String,
    /// Foundation metric family used for paces
    pub pace_system: PaceSystem,
    /// Target intensity distribution per phase
    pub phase_targets: PhaseTable<IntensityDistribution>,
    /// Workout types in preference order per phase
    pub workout_preferences: PhaseTable<Vec<WorkoutType>>,
    /// Quality sessions per week before recovery emphasis is applied
    pub base_quality_sessions: PhaseTable<u32>,
    /// Above 1 means fewer quality sessions, below 1 means more
    pub recovery_emphasis: f64,
}

impl MethodologyStrategy {
    /// Target distribution for a phase
    #[must_use]
    pub const fn phase_target(&self, phase: TrainingPhase) -> IntensityDistribution {
        *self.phase_targets.get(phase)
    }

    /// Workout types preferred in a phase, most preferred first
    #[must_use]
    pub fn workout_preferences(&self, phase: TrainingPhase) -> &[WorkoutType] {
        self.workout_preferences.get(phase)
    }

    /// Quality sessions per week for a 1-based week within a phase
    ///
    /// The base count is divided by the recovery emphasis and rounded; outside
    /// taper and recovery at least one session is kept. Every fourth week drops
    /// one session.
    #[must_use]
    pub fn quality_sessions_per_week(&self, phase: TrainingPhase, week_in_phase: u32) -> u32 {
        let base = f64::from(*self.base_quality_sessions.get(phase));
        let emphasis = if self.recovery_emphasis > 0.0 {
            self.recovery_emphasis
        } else {
            1.0
        };

        let mut sessions = (base / emphasis).round().max(0.0) as u32;
        if !matches!(phase, TrainingPhase::Taper | TrainingPhase::Recovery) {
            sessions = sessions.max(1);
        }

        if week_in_phase.max(1) % DOWN_WEEK_INTERVAL == 0 {
            sessions = sessions.saturating_sub(1);
        }
        sessions
    }

    /// Workout type for a slot (0-based) in a given week of a phase
    ///
    /// The first slots up to the quality count rotate through the phase's
    /// quality preferences week by week. The next slot is the long run when the
    /// phase prefers one; remaining slots are easy, or recovery runs in the
    /// recovery phase.
    #[must_use]
    pub fn select_workout(
        &self,
        phase: TrainingPhase,
        week_in_phase: u32,
        slot: usize,
    ) -> WorkoutType {
        let preferences = self.workout_preferences(phase);
        let quality: Vec<WorkoutType> = preferences
            .iter()
            .copied()
            .filter(WorkoutType::is_quality)
            .collect();
        let quality_count = self.quality_sessions_per_week(phase, week_in_phase) as usize;

        if slot < quality_count && !quality.is_empty() {
            let rotation = week_in_phase.max(1) as usize - 1;
            return quality[(slot + rotation) % quality.len()];
        }

        let long_run_slot = quality_count.min(quality.len());
        if slot == long_run_slot
            && phase != TrainingPhase::Recovery
            && preferences.contains(&WorkoutType::LongRun)
        {
            return WorkoutType::LongRun;
        }

        if phase == TrainingPhase::Recovery {
            WorkoutType::Recovery
        } else {
            WorkoutType::Easy
        }
    }

    /// Training paces for a foundation metric, using this methodology's pace system
    ///
    /// A metric from the other family is converted through the lactate
    /// threshold relation before deriving paces.
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when the metric is outside its supported range
    pub fn training_paces(&self, foundation: FoundationMetric) -> AppResult<PaceZones> {
        foundation.ensure_supported()?;
        match self.pace_system {
            PaceSystem::Vdot => PaceZones::from_vdot(foundation.as_vdot()),
            PaceSystem::LactateThreshold => {
                PaceZones::from_threshold_pace(foundation.as_threshold_pace())
            }
        }
    }

    /// Copy of the plan with target paces filled on every segment
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when the metric is outside its supported range
    pub fn annotate_plan_paces(
        &self,
        plan: &Plan,
        foundation: FoundationMetric,
    ) -> AppResult<Plan> {
        Ok(self.training_paces(foundation)?.annotate(plan))
    }
}
