// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Builds run histories and plan trees used across subsystem tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pacekeeper`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use pacekeeper::models::{
    Block, Microcycle, Plan, RunRecord, Segment, TrainingPhase, Workout, WorkoutType,
};

/// Fixed reference instant (a Monday morning) so fixtures are reproducible
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 7, 0, 0).unwrap()
}

/// Run `days` after the reference date
pub fn run_on(days: i64, distance_km: f64, duration_minutes: f64) -> RunRecord {
    RunRecord::new(base_date() + Duration::days(days), distance_km, duration_minutes)
}

/// Ten 10 km runs at a flat 5:00/km, every other day
pub fn flat_history() -> Vec<RunRecord> {
    (0..10)
        .map(|i| run_on(i * 2, 10.0, 50.0).with_pace(5.0).with_effort(5))
        .collect()
}

/// Eight easy runs with heart rate, at 6:00/km
pub fn easy_history_with_heart_rate() -> Vec<RunRecord> {
    (0..8)
        .map(|i| {
            run_on(i * 3, 8.0, 48.0)
                .with_pace(6.0)
                .with_heart_rate(140)
                .with_effort(4)
        })
        .collect()
}

pub fn segment(minutes: f64, intensity: u8, zone: &str) -> Segment {
    Segment::new(minutes, intensity, zone, format!("{minutes} min {zone}"))
}

pub fn workout(id: &str, workout_type: WorkoutType, segments: Vec<Segment>) -> Workout {
    Workout::new(id, workout_type, segments)
}

/// One-week block of `phase` holding `workouts`
pub fn block(phase: TrainingPhase, week_number: u32, workouts: Vec<Workout>) -> Block {
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
        + Duration::weeks(i64::from(week_number - 1));
    Block {
        phase,
        start_date: start,
        end_date: start + Duration::days(6),
        microcycles: vec![Microcycle {
            week_number,
            workouts,
        }],
    }
}

pub fn plan(methodology: &str, blocks: Vec<Block>) -> Plan {
    Plan {
        id: "test-plan".to_owned(),
        methodology: methodology.to_owned(),
        blocks,
    }
}

/// Base-phase plan with 60% of its time at moderate intensity
pub fn moderate_heavy_base_plan() -> Plan {
    plan(
        "daniels",
        vec![block(
            TrainingPhase::Base,
            1,
            vec![
                workout("easy-1", WorkoutType::Easy, vec![segment(40.0, 65, "easy")]),
                workout(
                    "tempo-1",
                    WorkoutType::Tempo,
                    vec![segment(30.0, 80, "tempo"), segment(30.0, 82, "tempo")],
                ),
            ],
        )],
    )
}

/// Base-phase plan within the Daniels and polarized targets
pub fn compliant_base_plan() -> Plan {
    plan(
        "daniels",
        vec![block(
            TrainingPhase::Base,
            1,
            vec![
                workout("easy-1", WorkoutType::Easy, vec![segment(45.0, 65, "easy")]),
                workout("long-1", WorkoutType::LongRun, vec![segment(45.0, 68, "long")]),
                workout(
                    "reps-1",
                    WorkoutType::Repetition,
                    vec![segment(10.0, 92, "repetition")],
                ),
            ],
        )],
    )
}

/// Count segments in the moderate band (76-85)
pub fn moderate_segment_count(plan: &Plan) -> usize {
    plan.segments()
        .filter(|s| s.intensity > 75 && s.intensity <= 85)
        .count()
}
