// ABOUTME: Fitness intelligence derived from a runner's history
// ABOUTME: Physiological estimators, training load, recovery, injury risk and weekly patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

//! # Intelligence Module
//!
//! Pure estimators over a run history. Missing or insufficient data yields a
//! documented default (VDOT 35, critical speed 10 km/h, economy 200) rather
//! than an error.

/// VDOT, critical speed and running economy estimators
pub mod algorithms;
/// Combined fitness snapshot
pub mod fitness_metrics;
/// Weekly schedule and volume patterns
pub mod pattern_detection;
/// Recovery score and injury risk
pub mod recovery_calculator;
/// Exponentially weighted training load
pub mod training_load;

pub use algorithms::{
    CriticalSpeedEstimate, CriticalSpeedModel, RunningEconomy, VdotCalculator, VdotEstimate,
    VdotSource,
};
pub use fitness_metrics::{FitnessMetrics, FitnessMetricsCalculator};
pub use pattern_detection::{PatternDetector, WeeklyPattern, WeeklyVolume};
pub use recovery_calculator::{InjuryRiskAssessment, RecoveryCalculator};
pub use training_load::{LoadBand, LoadTrend, TrainingLoadCalculator, TrainingLoadSample};
