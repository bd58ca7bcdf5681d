// ABOUTME: Model re-exports for the engine crate
// ABOUTME: Run records and the plan tree are defined in pacekeeper-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

pub use pacekeeper_core::models::{
    Block, IntensityBucket, Microcycle, Plan, RecoveryBiometrics, RunRecord, Segment,
    TrainingPhase, Workout, WorkoutType,
};
