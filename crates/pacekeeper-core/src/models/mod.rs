// ABOUTME: Data model consumed and produced by the pacekeeper engine
// ABOUTME: Run history records and the strictly tree-shaped training plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

/// Training plan tree (Plan -> Block -> Microcycle -> Workout -> Segment)
pub mod plan;

/// Recorded runs and optional recovery biometrics
pub mod run;

pub use plan::{
    Block, IntensityBucket, Microcycle, Plan, Segment, TrainingPhase, Workout, WorkoutType,
};
pub use run::{RecoveryBiometrics, RunRecord};
