// ABOUTME: Intensity distribution validator auditing a plan against phase targets
// ABOUTME: Reports insufficient-easy and excessive-hard violations with severity bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::distribution::{IntensityDistribution, RealizedDistribution};
use crate::constants::intensity::{severity, DEFAULT_TOLERANCE_PERCENT};
use crate::models::{Plan, TrainingPhase};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Phase label used for the plan-wide check
pub const OVERALL_PHASE: &str = "overall";

/// Kind of distribution violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Easy share below target minus tolerance
    InsufficientEasy,
    /// Hard share above target plus tolerance
    ExcessiveHard,
}

impl ViolationType {
    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientEasy => "insufficient_easy",
            Self::ExcessiveHard => "excessive_hard",
        }
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity band of a violation, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Gap up to 5 percentage points
    Low,
    /// Gap up to 10 percentage points
    Medium,
    /// Gap up to 15 percentage points
    High,
    /// Gap above 15 percentage points
    Critical,
}

impl Severity {
    /// Band an absolute percentage-point difference
    #[must_use]
    pub fn from_difference(difference: f64) -> Self {
        let gap = difference.abs();
        if gap <= severity::LOW_MAX {
            Self::Low
        } else if gap <= severity::MEDIUM_MAX {
            Self::Medium
        } else if gap <= severity::HIGH_MAX {
            Self::High
        } else {
            Self::Critical
        }
    }
}

/// Where a violation was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationScope {
    /// A single training phase
    Phase(TrainingPhase),
    /// The plan as a whole
    Overall,
}

impl ViolationScope {
    /// Whether a block of the given phase falls in this scope
    #[must_use]
    pub fn covers(&self, phase: TrainingPhase) -> bool {
        match self {
            Self::Phase(scoped) => *scoped == phase,
            Self::Overall => true,
        }
    }
}

impl fmt::Display for ViolationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phase(phase) => f.write_str(phase.as_str()),
            Self::Overall => f.write_str(OVERALL_PHASE),
        }
    }
}

/// A single distribution violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Violation kind
    pub violation_type: ViolationType,
    /// Phase the violation belongs to
    pub phase: ViolationScope,
    /// Realized percentage
    pub actual: f64,
    /// Target percentage
    pub target: f64,
    /// `actual - target`
    pub difference: f64,
    /// Severity band of the difference
    pub severity: Severity,
}

impl Violation {
    fn new(violation_type: ViolationType, phase: ViolationScope, actual: f64, target: f64) -> Self {
        let difference = actual - target;
        Self {
            violation_type,
            phase,
            actual,
            target,
            difference,
            severity: Severity::from_difference(difference),
        }
    }
}

/// Realized distribution of one phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDistribution {
    /// Phase of the block
    pub phase: TrainingPhase,
    /// Realized minutes and percentages
    pub realized: RealizedDistribution,
    /// Methodology target for the phase
    pub target: IntensityDistribution,
}

/// Outcome of validating a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when there are no violations
    pub is_valid: bool,
    /// Violations in discovery order: per phase, then overall
    pub violations: Vec<Violation>,
    /// Plan-wide realized distribution
    pub overall: RealizedDistribution,
    /// Per-block realized distributions in plan order
    pub phases: Vec<PhaseDistribution>,
}

/// Validator comparing realized intensity shares with targets
#[derive(Debug, Clone, Copy)]
pub struct IntensityDistributionValidator {
    tolerance_percent: f64,
}

impl Default for IntensityDistributionValidator {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE_PERCENT)
    }
}

impl IntensityDistributionValidator {
    /// Create a validator with the given tolerance in percentage points
    #[must_use]
    pub const fn new(tolerance_percent: f64) -> Self {
        Self { tolerance_percent }
    }

    /// Tolerance in percentage points
    #[must_use]
    pub const fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    /// Validate every block against its phase target and the plan against the polarized target
    #[must_use]
    pub fn validate<F>(&self, plan: &Plan, phase_target: F) -> ValidationReport
    where
        F: Fn(TrainingPhase) -> IntensityDistribution,
    {
        let mut violations = Vec::new();
        let mut phases = Vec::with_capacity(plan.blocks.len());

        for block in &plan.blocks {
            let realized = RealizedDistribution::from_segments(
                block.workouts().flat_map(|workout| workout.segments.iter()),
            );
            let target = phase_target(block.phase);

            // Phases with nothing scheduled report the fallback and are not checked
            if realized.has_minutes() {
                self.check(
                    ViolationScope::Phase(block.phase),
                    &realized.percentages,
                    &target,
                    &mut violations,
                );
            }

            phases.push(PhaseDistribution {
                phase: block.phase,
                realized,
                target,
            });
        }

        let overall = RealizedDistribution::from_segments(plan.segments());
        if overall.has_minutes() {
            self.check(
                ViolationScope::Overall,
                &overall.percentages,
                &IntensityDistribution::polarized(),
                &mut violations,
            );
        }

        debug!(
            plan_id = %plan.id,
            violations = violations.len(),
            "Validated intensity distribution"
        );

        ValidationReport {
            is_valid: violations.is_empty(),
            violations,
            overall,
            phases,
        }
    }

    fn check(
        &self,
        scope: ViolationScope,
        actual: &IntensityDistribution,
        target: &IntensityDistribution,
        violations: &mut Vec<Violation>,
    ) {
        if actual.easy < target.easy - self.tolerance_percent {
            violations.push(Violation::new(
                ViolationType::InsufficientEasy,
                scope,
                actual.easy,
                target.easy,
            ));
        }

        let target_hard = target.hard_total();
        if actual.hard > target_hard + self.tolerance_percent {
            violations.push(Violation::new(
                ViolationType::ExcessiveHard,
                scope,
                actual.hard,
                target_hard,
            ));
        }
    }
}
