// ABOUTME: Integration tests for intensity distribution validation
// ABOUTME: Covers per-phase and overall checks, severity bands, rounding and empty phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{block, compliant_base_plan, moderate_heavy_base_plan, plan, segment, workout};
use pacekeeper::errors::ErrorCode;
use pacekeeper::models::{TrainingPhase, WorkoutType};
use pacekeeper::plan::{
    IntensityDistribution, IntensityDistributionValidator, RealizedDistribution, Severity,
    ViolationScope, ViolationType,
};
use pacekeeper::EngineContext;

#[test]
fn test_moderate_heavy_base_phase_is_insufficient_easy() {
    let engine = EngineContext::default();
    let report = engine
        .validate_intensity_distribution(&moderate_heavy_base_plan(), "daniels")
        .unwrap();

    assert!(!report.is_valid);

    let base = report
        .violations
        .iter()
        .find(|v| v.phase == ViolationScope::Phase(TrainingPhase::Base))
        .unwrap();
    assert_eq!(base.violation_type, ViolationType::InsufficientEasy);
    assert!((base.actual - 40.0).abs() < f64::EPSILON);
    assert!((base.target - 85.0).abs() < f64::EPSILON);
    assert!((base.difference + 45.0).abs() < f64::EPSILON);
    assert_eq!(base.severity, Severity::Critical);

    let overall = report
        .violations
        .iter()
        .find(|v| v.phase == ViolationScope::Overall)
        .unwrap();
    assert_eq!(overall.violation_type, ViolationType::InsufficientEasy);
    assert!((overall.target - 80.0).abs() < f64::EPSILON);
    assert_eq!(overall.phase.to_string(), "overall");
}

#[test]
fn test_compliant_plan_reports_no_violations() {
    let engine = EngineContext::default();
    let plan = compliant_base_plan();

    let first = engine.validate_intensity_distribution(&plan, "daniels").unwrap();
    let second = engine.validate_intensity_distribution(&plan, "daniels").unwrap();

    assert!(first.is_valid);
    assert!(first.violations.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_excessive_hard_compares_against_hard_plus_very_hard() {
    // 70% easy, 30% hard in a Daniels build phase (target hard 8 + very hard 2)
    let plan = plan(
        "daniels",
        vec![block(
            TrainingPhase::Build,
            1,
            vec![
                workout("easy", WorkoutType::Easy, vec![segment(70.0, 65, "easy")]),
                workout("vo2", WorkoutType::Vo2Max, vec![segment(30.0, 95, "interval")]),
            ],
        )],
    );
    let report = EngineContext::default()
        .validate_intensity_distribution(&plan, "daniels")
        .unwrap();

    let hard = report
        .violations
        .iter()
        .find(|v| {
            v.violation_type == ViolationType::ExcessiveHard
                && v.phase == ViolationScope::Phase(TrainingPhase::Build)
        })
        .unwrap();
    assert!((hard.target - 10.0).abs() < f64::EPSILON);
    assert!((hard.difference - 20.0).abs() < f64::EPSILON);
    assert_eq!(hard.severity, Severity::Critical);
}

#[test]
fn test_tolerance_is_configurable() {
    let plan = plan(
        "daniels",
        vec![block(
            TrainingPhase::Base,
            1,
            vec![
                workout("easy", WorkoutType::Easy, vec![segment(78.0, 65, "easy")]),
                workout("tempo", WorkoutType::Tempo, vec![segment(22.0, 80, "tempo")]),
            ],
        )],
    );
    let target = |_: TrainingPhase| IntensityDistribution::new(85.0, 10.0, 5.0, 0.0);

    let strict = IntensityDistributionValidator::new(5.0).validate(&plan, target);
    let lenient = IntensityDistributionValidator::new(10.0).validate(&plan, target);

    assert!(!strict.is_valid);
    assert!(lenient.is_valid);
}

#[test]
fn test_percentages_sum_to_one_hundred() {
    let segments = vec![
        segment(13.0, 60, "easy"),
        segment(7.0, 78, "steady"),
        segment(11.0, 88, "interval"),
        segment(3.0, 99, "repetition"),
    ];
    let realized = RealizedDistribution::from_segments(&segments);
    let sum = realized.percentages.sum();

    assert!((sum - 100.0).abs() <= 3.0, "sum {sum}");
    assert!((realized.total_minutes - 34.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_phase_reports_fallback_and_is_not_checked() {
    let plan = plan(
        "daniels",
        vec![
            block(TrainingPhase::Base, 1, vec![]),
            block(
                TrainingPhase::Build,
                2,
                vec![workout("easy", WorkoutType::Easy, vec![segment(60.0, 65, "easy")])],
            ),
        ],
    );
    let report = EngineContext::default()
        .validate_intensity_distribution(&plan, "daniels")
        .unwrap();

    assert!(report.is_valid);
    assert_eq!(report.phases.len(), 2);
    assert_eq!(
        report.phases[0].realized.percentages,
        IntensityDistribution::fallback()
    );
}

#[test]
fn test_empty_plan_is_valid_with_fallback_overall() {
    let report = EngineContext::default()
        .validate_intensity_distribution(&plan("daniels", vec![]), "daniels")
        .unwrap();

    assert!(report.is_valid);
    assert_eq!(report.overall.percentages, IntensityDistribution::fallback());
}

#[test]
fn test_unknown_methodology_is_an_error() {
    let err = EngineContext::default()
        .validate_intensity_distribution(&compliant_base_plan(), "couch_to_ultra")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
