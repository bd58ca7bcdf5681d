// ABOUTME: Integration tests for fitness metrics estimation
// ABOUTME: Covers VDOT branches, fail-open defaults, economy, recovery and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{easy_history_with_heart_rate, flat_history, run_on};
use pacekeeper::errors::ErrorCode;
use pacekeeper::intelligence::{
    CriticalSpeedModel, FitnessMetricsCalculator, PatternDetector, RecoveryCalculator,
    RunningEconomy, VdotCalculator, VdotSource,
};
use pacekeeper::models::RecoveryBiometrics;
use pacekeeper::EngineContext;

#[test]
fn test_flat_history_uses_fastest_runs_branch() {
    let estimate = VdotCalculator::estimate(&flat_history());

    assert_eq!(estimate.source, VdotSource::FastestRuns);
    assert!((estimate.vdot - 40.0).abs() < f64::EPSILON);
    assert!((estimate.vdot - estimate.vdot.round()).abs() < f64::EPSILON);
}

#[test]
fn test_race_effort_takes_priority() {
    let mut runs = flat_history();
    // 5 km race in 20 minutes
    runs.push(run_on(21, 5.0, 20.0).as_race());

    let estimate = VdotCalculator::estimate(&runs);
    assert_eq!(estimate.source, VdotSource::RaceEffort);
    assert!(estimate.vdot > 40.0);
}

#[test]
fn test_no_qualifying_runs_default_to_novice_values() {
    let short_runs = vec![run_on(0, 2.0, 12.0), run_on(1, 2.5, 15.0)];
    let metrics = FitnessMetricsCalculator::compute(&short_runs);

    assert!((metrics.vdot - 35.0).abs() < f64::EPSILON);
    assert!((metrics.critical_speed - 10.0).abs() < f64::EPSILON);
    assert!((metrics.running_economy - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_runs_slower_than_ten_minutes_per_km_fall_back_to_default() {
    // 11:00/km is below the 100 m/min plausibility floor
    let slow_runs = vec![run_on(0, 5.0, 55.0), run_on(2, 6.0, 66.0)];
    let estimate = VdotCalculator::estimate(&slow_runs);

    assert_eq!(estimate.source, VdotSource::Default);
    assert!((estimate.vdot - 35.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_history_is_fail_open() {
    let metrics = FitnessMetricsCalculator::compute(&[]);

    assert!((metrics.vdot - 35.0).abs() < f64::EPSILON);
    assert!((metrics.training_load.ratio - 1.0).abs() < f64::EPSILON);
    assert!((0.0..=100.0).contains(&metrics.injury_risk));
    assert!((0.0..=100.0).contains(&metrics.recovery_score));
}

#[test]
fn test_lactate_threshold_follows_vdot() {
    let metrics = FitnessMetricsCalculator::compute(&flat_history());
    let expected = 40.0 * 0.88 / 3.5;

    assert!((metrics.lactate_threshold - expected).abs() < 1e-9);
    assert!((metrics.threshold_pace_min_per_km() - 60.0 / expected).abs() < 1e-9);
}

#[test]
fn test_critical_speed_two_point_model() {
    // 3 km in 12 min and 10 km in 44 min: 7 km over 32 min
    let runs = vec![
        run_on(0, 3.0, 12.0).with_effort(9),
        run_on(7, 10.0, 44.0).with_effort(8),
    ];
    let estimate = CriticalSpeedModel::estimate(&runs);

    assert!(!estimate.is_default);
    assert!((estimate.speed_kmh - 7.0 / 32.0 * 60.0).abs() < 1e-9);
}

#[test]
fn test_critical_speed_needs_two_trials() {
    let runs = vec![run_on(0, 5.0, 20.0).with_effort(9)];
    let estimate = CriticalSpeedModel::estimate(&runs);

    assert!(estimate.is_default);
    assert!((estimate.speed_kmh - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_running_economy_from_heart_rate_reserve() {
    let runs = easy_history_with_heart_rate();
    // HRR = 80/130, VO2 = HRR·50, speed = 1/6 km/min
    let expected = (80.0 / 130.0) * 50.0 / (1.0 / 6.0);

    assert!((RunningEconomy::estimate(&runs) - expected).abs() < 1e-6);
}

#[test]
fn test_running_economy_ignores_hard_and_short_runs() {
    let runs = vec![
        run_on(0, 8.0, 48.0).with_pace(6.0).with_heart_rate(150).with_effort(8),
        run_on(1, 3.0, 18.0).with_pace(6.0).with_heart_rate(150).with_effort(3),
    ];
    assert!((RunningEconomy::estimate(&runs) - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_recovery_penalizes_recent_hard_runs() {
    let runs = vec![
        run_on(0, 10.0, 45.0).with_effort(8),
        run_on(2, 10.0, 45.0).with_effort(7),
        run_on(4, 10.0, 55.0).with_effort(4),
    ];
    let baseline = RecoveryCalculator::recovery_score(&runs, &RecoveryBiometrics::default());
    assert!((baseline - 60.0).abs() < f64::EPSILON);

    let rested = RecoveryBiometrics {
        hrv_ms: Some(65.0),
        resting_heart_rate: Some(52),
    };
    let with_biometrics = RecoveryCalculator::recovery_score(&runs, &rested);
    assert!((with_biometrics - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_injury_risk_is_additive_and_clamped() {
    let low = RecoveryCalculator::injury_risk(1.0, None, 100.0);
    assert!((low.score - 10.0).abs() < f64::EPSILON);
    assert!(low.factors.is_empty());

    let high = RecoveryCalculator::injury_risk(1.7, Some(35.0), 0.0);
    assert!((high.score - 100.0).abs() < f64::EPSILON);
    assert_eq!(high.factors.len(), 2);
}

#[test]
fn test_weekly_pattern_detects_long_run_day() {
    let mut runs = flat_history();
    runs.push(run_on(5, 22.0, 130.0));
    runs.push(run_on(12, 24.0, 140.0));

    let pattern = PatternDetector::detect_weekly_pattern(&runs);
    assert_eq!(pattern.long_run_day, Some(chrono::Weekday::Sat));
    assert!(pattern.max_weekly_distance >= pattern.average_weekly_distance);
    assert!(pattern.consistency_score <= 100.0);
    assert!(!pattern.preferred_days.is_empty());
}

#[test]
fn test_race_prediction_rejects_unsupported_vdot() {
    let err = VdotCalculator::predict_race_minutes(90.0, 10.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let ten_k = VdotCalculator::predict_race_minutes(40.0, 10.0).unwrap();
    assert!((ten_k - 50.0).abs() < 1.5, "predicted {ten_k}");
}

#[test]
fn test_compute_is_deterministic_across_cache_hits() {
    let engine = EngineContext::default();
    let runs = flat_history();

    let first = engine.compute_fitness_metrics(&runs);
    let second = engine.compute_fitness_metrics(&runs);
    let direct = FitnessMetricsCalculator::compute(&runs);

    assert_eq!(first, second);
    assert_eq!(first, direct);
    assert_eq!(engine.cache_stats().hits, 1);
    assert_eq!(engine.cache_stats().misses, 1);
}
