// ABOUTME: Built-in methodology tables: phase targets, workout preferences and quality volume
// ABOUTME: Adding a methodology means adding a table here, not a new type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::paces::PaceSystem;
use super::strategy::{Methodology, MethodologyStrategy, PhaseTable};
use crate::models::WorkoutType::{
    Easy, Fartlek, Hills, LongRun, MarathonPace, Progression, Recovery, Repetition, Tempo,
    Threshold, TimeTrial, Vo2Max,
};
use crate::plan::IntensityDistribution;

const fn split(easy: f64, moderate: f64, hard: f64, very_hard: f64) -> IntensityDistribution {
    IntensityDistribution::new(easy, moderate, hard, very_hard)
}

/// Build the configured strategy for a methodology
#[must_use]
pub fn strategy_for(methodology: Methodology) -> MethodologyStrategy {
    match methodology {
        Methodology::Daniels => daniels(),
        Methodology::Lydiard => lydiard(),
        Methodology::Pfitzinger => pfitzinger(),
        Methodology::Hansons => hansons(),
        Methodology::EightyTwenty => eighty_twenty(),
    }
}

fn daniels() -> MethodologyStrategy {
    MethodologyStrategy {
        methodology: Methodology::Daniels,
        display_name: "Daniels' Running Formula".to_owned(),
        pace_system: PaceSystem::Vdot,
        phase_targets: PhaseTable {
            base: split(85.0, 10.0, 5.0, 0.0),
            build: split(80.0, 10.0, 8.0, 2.0),
            peak: split(78.0, 10.0, 9.0, 3.0),
            taper: split(80.0, 10.0, 8.0, 2.0),
            recovery: split(95.0, 5.0, 0.0, 0.0),
        },
        workout_preferences: PhaseTable {
            base: vec![Easy, LongRun, Repetition, Hills],
            build: vec![Threshold, Vo2Max, LongRun, Easy],
            peak: vec![Vo2Max, Threshold, Repetition, LongRun],
            taper: vec![Threshold, Repetition, Easy],
            recovery: vec![Recovery, Easy],
        },
        base_quality_sessions: PhaseTable {
            base: 1,
            build: 2,
            peak: 2,
            taper: 1,
            recovery: 0,
        },
        recovery_emphasis: 1.0,
    }
}

fn lydiard() -> MethodologyStrategy {
    MethodologyStrategy {
        methodology: Methodology::Lydiard,
        display_name: "Lydiard".to_owned(),
        pace_system: PaceSystem::Vdot,
        phase_targets: PhaseTable {
            base: split(90.0, 8.0, 2.0, 0.0),
            build: split(82.0, 10.0, 6.0, 2.0),
            peak: split(78.0, 8.0, 10.0, 4.0),
            taper: split(82.0, 8.0, 8.0, 2.0),
            recovery: split(95.0, 5.0, 0.0, 0.0),
        },
        workout_preferences: PhaseTable {
            base: vec![LongRun, Easy, Progression],
            build: vec![Hills, Fartlek, LongRun, Easy],
            peak: vec![Vo2Max, TimeTrial, Repetition, LongRun],
            taper: vec![Repetition, TimeTrial, Easy],
            recovery: vec![Recovery, Easy],
        },
        base_quality_sessions: PhaseTable {
            base: 1,
            build: 2,
            peak: 3,
            taper: 1,
            recovery: 0,
        },
        recovery_emphasis: 1.25,
    }
}

fn pfitzinger() -> MethodologyStrategy {
    MethodologyStrategy {
        methodology: Methodology::Pfitzinger,
        display_name: "Pfitzinger".to_owned(),
        pace_system: PaceSystem::LactateThreshold,
        phase_targets: PhaseTable {
            base: split(80.0, 15.0, 5.0, 0.0),
            build: split(75.0, 17.0, 6.0, 2.0),
            peak: split(75.0, 15.0, 7.0, 3.0),
            taper: split(80.0, 12.0, 6.0, 2.0),
            recovery: split(92.0, 8.0, 0.0, 0.0),
        },
        workout_preferences: PhaseTable {
            base: vec![LongRun, Progression, Easy],
            build: vec![Threshold, MarathonPace, LongRun, Easy],
            peak: vec![Vo2Max, Threshold, MarathonPace, LongRun],
            taper: vec![Vo2Max, MarathonPace, Easy],
            recovery: vec![Recovery, Easy],
        },
        base_quality_sessions: PhaseTable {
            base: 1,
            build: 2,
            peak: 2,
            taper: 1,
            recovery: 0,
        },
        recovery_emphasis: 1.0,
    }
}

fn hansons() -> MethodologyStrategy {
    MethodologyStrategy {
        methodology: Methodology::Hansons,
        display_name: "Hansons Marathon Method".to_owned(),
        pace_system: PaceSystem::Vdot,
        phase_targets: PhaseTable {
            base: split(80.0, 15.0, 5.0, 0.0),
            build: split(75.0, 18.0, 5.0, 2.0),
            peak: split(72.0, 20.0, 6.0, 2.0),
            taper: split(78.0, 15.0, 5.0, 2.0),
            recovery: split(92.0, 8.0, 0.0, 0.0),
        },
        workout_preferences: PhaseTable {
            base: vec![Repetition, Tempo, LongRun, Easy],
            build: vec![Vo2Max, Tempo, LongRun, Easy],
            peak: vec![Threshold, Tempo, LongRun, Easy],
            taper: vec![Tempo, Threshold, Easy],
            recovery: vec![Recovery, Easy],
        },
        base_quality_sessions: PhaseTable {
            base: 2,
            build: 2,
            peak: 2,
            taper: 1,
            recovery: 0,
        },
        recovery_emphasis: 0.8,
    }
}

fn eighty_twenty() -> MethodologyStrategy {
    MethodologyStrategy {
        methodology: Methodology::EightyTwenty,
        display_name: "80/20 Running".to_owned(),
        pace_system: PaceSystem::LactateThreshold,
        phase_targets: PhaseTable {
            base: split(85.0, 10.0, 5.0, 0.0),
            build: split(80.0, 10.0, 8.0, 2.0),
            peak: split(80.0, 8.0, 9.0, 3.0),
            taper: split(80.0, 10.0, 8.0, 2.0),
            recovery: split(95.0, 5.0, 0.0, 0.0),
        },
        workout_preferences: PhaseTable {
            base: vec![Fartlek, LongRun, Easy],
            build: vec![Threshold, Vo2Max, LongRun, Easy],
            peak: vec![Vo2Max, Threshold, LongRun, Easy],
            taper: vec![Threshold, Fartlek, Easy],
            recovery: vec![Recovery, Easy],
        },
        base_quality_sessions: PhaseTable {
            base: 1,
            build: 2,
            peak: 2,
            taper: 1,
            recovery: 0,
        },
        recovery_emphasis: 1.1,
    }
}
