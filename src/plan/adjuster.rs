// ABOUTME: Auto-adjustment engine rewriting plan segments until the distribution complies
// ABOUTME: Bounded audit loop that keeps the best plan and reports residual violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::distribution::IntensityDistribution;
use super::validator::{
    IntensityDistributionValidator, Severity, Violation, ViolationScope, ViolationType,
};
use crate::config::AdjustmentConfig;
use crate::constants::intensity::{
    DEFAULT_MAX_ADJUSTMENT_ITERATIONS, EASY_MAX_INTENSITY, MODERATE_MAX_INTENSITY,
    REWRITE_EASY_INTENSITY, REWRITE_EASY_ZONE, REWRITE_MODERATE_INTENSITY, REWRITE_MODERATE_ZONE,
    SOFTEN_UPPER_INTENSITY,
};
use crate::models::{Plan, Segment, TrainingPhase, Workout};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// State of the adjustment loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentState {
    /// Applying fixes and revalidating
    Auditing,
    /// No violations remain
    Converged,
    /// Violations remain but the last pass did not reduce them or the cap was hit
    Stalled,
}

/// Result of auto-adjusting a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentOutcome {
    /// Best plan obtained
    pub plan: Plan,
    /// Fix-and-revalidate passes performed
    pub iterations: u32,
    /// Number of violations supplied by the caller
    pub initial_violations: usize,
    /// Violations still present in the returned plan
    pub residual_violations: Vec<Violation>,
    /// Segments rewritten in the returned plan
    pub segments_modified: usize,
    /// Terminal state
    pub state: AdjustmentState,
}

impl AdjustmentOutcome {
    /// Whether the returned plan has no remaining violations
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.residual_violations.is_empty()
    }
}

/// Engine that rewrites workouts to fix distribution violations
#[derive(Debug, Clone, Copy)]
pub struct AutoAdjustmentEngine {
    validator: IntensityDistributionValidator,
    max_iterations: u32,
}

impl Default for AutoAdjustmentEngine {
    fn default() -> Self {
        Self::new(
            IntensityDistributionValidator::default(),
            DEFAULT_MAX_ADJUSTMENT_ITERATIONS,
        )
    }
}

impl AutoAdjustmentEngine {
    /// Create an engine revalidating with `validator`, capped at `max_iterations` passes
    #[must_use]
    pub const fn new(validator: IntensityDistributionValidator, max_iterations: u32) -> Self {
        Self {
            validator,
            max_iterations,
        }
    }

    /// Create an engine from adjustment configuration
    #[must_use]
    pub const fn from_config(config: &AdjustmentConfig) -> Self {
        Self::new(
            IntensityDistributionValidator::new(config.tolerance_percent),
            config.max_iterations,
        )
    }

    /// Rewrite the plan until it complies, stops improving, or the cap is reached
    ///
    /// The input plan is never modified. A pass is kept when it leaves fewer
    /// violations, or as many with a smaller total gap; the loop only continues
    /// while the violation count strictly decreases. With no violations the plan
    /// is returned unchanged.
    #[must_use]
    pub fn adjust<F>(
        &self,
        plan: &Plan,
        violations: &[Violation],
        phase_target: F,
    ) -> AdjustmentOutcome
    where
        F: Fn(TrainingPhase) -> IntensityDistribution,
    {
        let initial_violations = violations.len();
        let mut current = Self::prioritized(violations.to_vec());
        let mut best = plan.clone();
        let mut segments_modified = 0;
        let mut iterations = 0;
        let mut state = if current.is_empty() {
            AdjustmentState::Converged
        } else {
            AdjustmentState::Auditing
        };

        while state == AdjustmentState::Auditing {
            if iterations >= self.max_iterations {
                debug!(iterations, "Adjustment iteration cap reached");
                state = AdjustmentState::Stalled;
                break;
            }
            iterations += 1;

            let (candidate, changed) = Self::apply_fixes(&best, &current);
            if changed == 0 {
                debug!(iterations, "Adjustment pass changed nothing");
                state = AdjustmentState::Stalled;
                break;
            }

            let report = self.validator.validate(&candidate, &phase_target);
            let next = Self::prioritized(report.violations);
            debug!(
                iterations,
                changed,
                before = current.len(),
                after = next.len(),
                "Adjustment pass revalidated"
            );

            let improved = next.len() < current.len();
            let narrowed = next.len() == current.len()
                && Self::total_gap(&next) < Self::total_gap(&current);
            if improved || narrowed {
                best = candidate;
                segments_modified += changed;
                current = next;
            }

            state = if current.is_empty() {
                AdjustmentState::Converged
            } else if improved {
                AdjustmentState::Auditing
            } else {
                AdjustmentState::Stalled
            };
        }

        if current.is_empty() {
            info!(
                plan_id = %best.id,
                iterations,
                segments_modified,
                "Intensity distribution adjusted to compliance"
            );
        } else {
            warn!(
                plan_id = %best.id,
                iterations,
                residual = current.len(),
                "Intensity distribution still has violations after adjustment"
            );
            for violation in &current {
                warn!(
                    violation_type = %violation.violation_type,
                    phase = %violation.phase,
                    actual = violation.actual,
                    target = violation.target,
                    severity = ?violation.severity,
                    "Residual intensity violation"
                );
            }
        }

        AdjustmentOutcome {
            plan: best,
            iterations,
            initial_violations,
            residual_violations: current,
            segments_modified,
            state,
        }
    }

    /// Most severe violations first; order within a band is preserved
    fn prioritized(mut violations: Vec<Violation>) -> Vec<Violation> {
        violations.sort_by(|a, b| b.severity.cmp(&a.severity));
        violations
    }

    fn total_gap(violations: &[Violation]) -> f64 {
        violations.iter().map(|v| v.difference.abs()).sum()
    }

    /// Apply one fix per violation to a copy of the plan
    ///
    /// Returns the copy and the number of rewritten segments.
    fn apply_fixes(plan: &Plan, violations: &[Violation]) -> (Plan, usize) {
        let mut adjusted = plan.clone();
        let mut changed = 0;

        for violation in violations {
            for block in adjusted
                .blocks
                .iter_mut()
                .filter(|block| violation.phase.covers(block.phase))
            {
                for workout in block
                    .microcycles
                    .iter_mut()
                    .flat_map(|microcycle| microcycle.workouts.iter_mut())
                {
                    changed += match violation.violation_type {
                        ViolationType::InsufficientEasy => Self::soften(workout),
                        ViolationType::ExcessiveHard => {
                            Self::lower_hard(workout, violation.severity)
                        }
                    };
                }
            }
        }

        (adjusted, changed)
    }

    /// Lower segments at intensity 76-89 to easy; threshold and VO2max sessions keep theirs
    fn soften(workout: &mut Workout) -> usize {
        if workout.workout_type.resists_softening() {
            return 0;
        }

        let mut changed = 0;
        for segment in &mut workout.segments {
            if (EASY_MAX_INTENSITY + 1..SOFTEN_UPPER_INTENSITY).contains(&segment.intensity) {
                Self::rewrite(segment, REWRITE_EASY_INTENSITY, REWRITE_EASY_ZONE);
                changed += 1;
            }
        }
        changed
    }

    /// Lower hard segments; protected workouts are only touched for high or critical violations
    fn lower_hard(workout: &mut Workout, severity: Severity) -> usize {
        if workout.workout_type.is_protected() && severity < Severity::High {
            return 0;
        }

        let (intensity, zone) = if severity == Severity::Critical {
            (REWRITE_EASY_INTENSITY, REWRITE_EASY_ZONE)
        } else {
            (REWRITE_MODERATE_INTENSITY, REWRITE_MODERATE_ZONE)
        };

        let mut changed = 0;
        for segment in &mut workout.segments {
            if segment.intensity > MODERATE_MAX_INTENSITY {
                Self::rewrite(segment, intensity, zone);
                changed += 1;
            }
        }
        changed
    }

    fn rewrite(segment: &mut Segment, intensity: u8, zone: &str) {
        segment.intensity = intensity;
        zone.clone_into(&mut segment.zone);
        // Pace no longer matches the zone; re-annotation fills it again
        segment.target_pace_sec_per_km = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutType;

    #[test]
    fn test_soften_skips_threshold_sessions() {
        let mut threshold = Workout::new(
            "t",
            WorkoutType::Threshold,
            vec![Segment::new(20.0, 88, "threshold", "")],
        );
        assert_eq!(AutoAdjustmentEngine::soften(&mut threshold), 0);

        let mut tempo = Workout::new(
            "m",
            WorkoutType::Tempo,
            vec![
                Segment::new(20.0, 80, "tempo", ""),
                Segment::new(5.0, 90, "interval", ""),
            ],
        );
        assert_eq!(AutoAdjustmentEngine::soften(&mut tempo), 1);
        assert_eq!(tempo.segments[0].intensity, REWRITE_EASY_INTENSITY);
        assert_eq!(tempo.segments[0].zone, "easy");
        assert_eq!(tempo.segments[1].intensity, 90);
    }

    #[test]
    fn test_lower_hard_protects_races_below_high_severity() {
        let mut race = Workout::new(
            "r",
            WorkoutType::Race,
            vec![Segment::new(40.0, 95, "race", "")],
        );
        assert_eq!(AutoAdjustmentEngine::lower_hard(&mut race, Severity::Medium), 0);
        assert_eq!(AutoAdjustmentEngine::lower_hard(&mut race, Severity::High), 1);
        assert_eq!(race.segments[0].intensity, REWRITE_MODERATE_INTENSITY);

        let mut intervals = Workout::new(
            "i",
            WorkoutType::Vo2Max,
            vec![Segment::new(20.0, 92, "interval", "")],
        );
        assert_eq!(AutoAdjustmentEngine::lower_hard(&mut intervals, Severity::Critical), 1);
        assert_eq!(intervals.segments[0].intensity, REWRITE_EASY_INTENSITY);
    }
}
