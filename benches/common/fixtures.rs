// ABOUTME: Benchmark fixtures generating realistic run histories and training plans
// ABOUTME: Deterministic generation so measurements are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

//! Benchmark fixtures for run histories and plans.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use pacekeeper::models::{
    Block, Microcycle, Plan, RunRecord, Segment, TrainingPhase, Workout, WorkoutType,
};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RunBatchSize {
    /// Two weeks of running
    Small,
    /// A training season
    Medium,
    /// Several years of logs
    Large,
}

impl RunBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 500,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 6, 30, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Generate `count` runs with varied distance, pace, heart rate and effort
///
/// `seed` shifts the variation so different histories hash differently.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_runs(count: usize, seed: usize) -> Vec<RunRecord> {
    (0..count)
        .map(|index| {
            let mix = index * 37 + seed * 101;
            let distance = 5.0 + (mix % 16) as f64;
            let pace = 4.5 + (mix % 9) as f64 * 0.15;
            let effort = 3 + (mix % 7) as u8;
            let run = RunRecord::new(
                base_date() + Duration::days(index as i64),
                distance,
                distance * pace,
            )
            .with_pace(pace)
            .with_heart_rate(130 + (mix % 40) as u32)
            .with_effort(effort);
            if index % 25 == 24 {
                run.as_race()
            } else {
                run
            }
        })
        .collect()
}

/// Generate a plan with `weeks` microcycles per phase, moderately over target
#[must_use]
pub fn generate_plan(weeks: u32) -> Plan {
    let mut start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let blocks = [
        TrainingPhase::Base,
        TrainingPhase::Build,
        TrainingPhase::Peak,
        TrainingPhase::Taper,
    ]
    .into_iter()
    .map(|phase| {
        let microcycles = (1..=weeks)
            .map(|week_number| Microcycle {
                week_number,
                workouts: vec![
                    Workout::new(
                        format!("{phase}-{week_number}-easy"),
                        WorkoutType::Easy,
                        vec![Segment::new(45.0, 65, "easy", "Easy run")],
                    ),
                    Workout::new(
                        format!("{phase}-{week_number}-tempo"),
                        WorkoutType::Tempo,
                        vec![
                            Segment::new(15.0, 65, "warmup", "Warm up"),
                            Segment::new(25.0, 82, "tempo", "Tempo"),
                        ],
                    ),
                    Workout::new(
                        format!("{phase}-{week_number}-intervals"),
                        WorkoutType::Vo2Max,
                        vec![Segment::new(20.0, 93, "interval", "Intervals")],
                    ),
                    Workout::new(
                        format!("{phase}-{week_number}-long"),
                        WorkoutType::LongRun,
                        vec![Segment::new(90.0, 68, "long", "Long run")],
                    ),
                ],
            })
            .collect();
        let end = start + Duration::weeks(i64::from(weeks)) - Duration::days(1);
        let block = Block {
            phase,
            start_date: start,
            end_date: end,
            microcycles,
        };
        start = end + Duration::days(1);
        block
    })
    .collect();

    Plan {
        id: "bench-plan".to_owned(),
        methodology: "daniels".to_owned(),
        blocks,
    }
}
