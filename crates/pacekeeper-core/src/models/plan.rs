// ABOUTME: Training plan tree produced by the periodization layer and audited by the engine
// ABOUTME: Plan owns Blocks, Blocks own Microcycles, Microcycles own Workouts, Workouts own Segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::intensity::{EASY_MAX_INTENSITY, MODERATE_MAX_INTENSITY};
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named stage of a periodized plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Aerobic foundation
    Base,
    /// Race-specific development
    Build,
    /// Highest specificity before tapering
    Peak,
    /// Volume reduction before the goal race
    Taper,
    /// Post-race or mid-plan regeneration
    Recovery,
}

impl TrainingPhase {
    /// All phases in plan order
    pub const ALL: [Self; 5] = [
        Self::Base,
        Self::Build,
        Self::Peak,
        Self::Taper,
        Self::Recovery,
    ];

    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
            Self::Recovery => "recovery",
        }
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingPhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "build" => Ok(Self::Build),
            "peak" => Ok(Self::Peak),
            "taper" => Ok(Self::Taper),
            "recovery" => Ok(Self::Recovery),
            other => Err(AppError::invalid_input(format!(
                "Unknown training phase: '{other}'. Valid options: base, build, peak, taper, recovery"
            ))),
        }
    }
}

/// Kind of planned workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Conversational aerobic run
    Easy,
    /// Very easy regeneration run
    Recovery,
    /// Long aerobic run
    LongRun,
    /// Steady tempo running
    Tempo,
    /// Lactate threshold work
    Threshold,
    /// VO2max intervals
    Vo2Max,
    /// Short fast repetitions
    Repetition,
    /// Unstructured speed play
    Fartlek,
    /// Hill repeats or hill circuits
    Hills,
    /// Goal marathon pace segments
    MarathonPace,
    /// Run finishing faster than it starts
    Progression,
    /// Benchmark effort over a fixed distance
    TimeTrial,
    /// Scheduled race
    Race,
}

impl WorkoutType {
    /// Whether the workout is a quality (non-easy) session
    #[must_use]
    pub const fn is_quality(&self) -> bool {
        !matches!(self, Self::Easy | Self::Recovery | Self::LongRun)
    }

    /// Races and time trials keep their hard segments unless a violation is severe
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::Race | Self::TimeTrial)
    }

    /// Threshold and VO2max sessions are never softened to easy
    #[must_use]
    pub const fn resists_softening(&self) -> bool {
        matches!(self, Self::Threshold | Self::Vo2Max)
    }

    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Recovery => "recovery",
            Self::LongRun => "long_run",
            Self::Tempo => "tempo",
            Self::Threshold => "threshold",
            Self::Vo2Max => "vo2max",
            Self::Repetition => "repetition",
            Self::Fartlek => "fartlek",
            Self::Hills => "hills",
            Self::MarathonPace => "marathon_pace",
            Self::Progression => "progression",
            Self::TimeTrial => "time_trial",
            Self::Race => "race",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensity bucket a segment's time is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBucket {
    /// Intensity up to 75
    Easy,
    /// Intensity 76 to 85
    Moderate,
    /// Intensity above 85
    Hard,
}

impl IntensityBucket {
    /// Classify a 0-100 intensity
    #[must_use]
    pub const fn from_intensity(intensity: u8) -> Self {
        if intensity <= EASY_MAX_INTENSITY {
            Self::Easy
        } else if intensity <= MODERATE_MAX_INTENSITY {
            Self::Moderate
        } else {
            Self::Hard
        }
    }
}

/// Smallest unit of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Duration in minutes
    pub duration_minutes: f64,
    /// Target intensity on a 0-100 scale
    pub intensity: u8,
    /// Training zone name (e.g. "easy", "threshold")
    pub zone: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Target pace in seconds per km, filled by pace annotation
    #[serde(default)]
    pub target_pace_sec_per_km: Option<f64>,
}

impl Segment {
    /// Create a segment without a target pace
    #[must_use]
    pub fn new(
        duration_minutes: f64,
        intensity: u8,
        zone: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            duration_minutes,
            intensity: intensity.min(100),
            zone: zone.into(),
            description: description.into(),
            target_pace_sec_per_km: None,
        }
    }

    /// Bucket this segment's time falls into
    #[must_use]
    pub const fn bucket(&self) -> IntensityBucket {
        IntensityBucket::from_intensity(self.intensity)
    }
}

/// A planned session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Identifier assigned by the plan generator
    pub id: String,
    /// Kind of session
    pub workout_type: WorkoutType,
    /// Scheduled date, when known
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Ordered segments
    pub segments: Vec<Segment>,
}

impl Workout {
    /// Create a workout from its segments
    #[must_use]
    pub fn new(id: impl Into<String>, workout_type: WorkoutType, segments: Vec<Segment>) -> Self {
        Self {
            id: id.into(),
            workout_type,
            date: None,
            segments,
        }
    }

    /// Total scheduled minutes
    #[must_use]
    pub fn total_minutes(&self) -> f64 {
        self.segments.iter().map(|s| s.duration_minutes).sum()
    }
}

/// One training week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Microcycle {
    /// Week number within the plan (1-based)
    pub week_number: u32,
    /// Ordered workouts
    pub workouts: Vec<Workout>,
}

/// A multi-week training phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Phase this block trains
    pub phase: TrainingPhase,
    /// First day of the block
    pub start_date: NaiveDate,
    /// Last day of the block
    pub end_date: NaiveDate,
    /// Ordered weeks
    pub microcycles: Vec<Microcycle>,
}

impl Block {
    /// Iterate every workout in the block
    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.microcycles.iter().flat_map(|m| m.workouts.iter())
    }
}

/// A complete periodized plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier
    pub id: String,
    /// Methodology name the plan was generated with
    pub methodology: String,
    /// Ordered phases
    pub blocks: Vec<Block>,
}

impl Plan {
    /// Iterate every workout in the plan
    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.blocks.iter().flat_map(Block::workouts)
    }

    /// Iterate every segment in the plan
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.workouts().flat_map(|w| w.segments.iter())
    }

    /// Total scheduled minutes
    #[must_use]
    pub fn total_minutes(&self) -> f64 {
        self.segments().map(|s| s.duration_minutes).sum()
    }
}
