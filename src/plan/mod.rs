// ABOUTME: Plan intensity auditing: distribution math, validation and auto-adjustment
// ABOUTME: Operates on owned plan values and never mutates a caller's plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

/// Auto-adjustment loop
pub mod adjuster;
/// Target and realized intensity distributions
pub mod distribution;
/// Distribution validation
pub mod validator;

pub use adjuster::{AdjustmentOutcome, AdjustmentState, AutoAdjustmentEngine};
pub use distribution::{IntensityDistribution, RealizedDistribution};
pub use validator::{
    IntensityDistributionValidator, PhaseDistribution, Severity, ValidationReport, Violation,
    ViolationScope, ViolationType, OVERALL_PHASE,
};
