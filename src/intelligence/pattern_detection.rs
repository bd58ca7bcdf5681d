// ABOUTME: Weekly training pattern detection over a run history
// ABOUTME: Calendar-week volumes, consistency, preferred run days and the usual long-run day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::physiology::weekly::LONG_RUN_KM;
use crate::models::RunRecord;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Distance and run count for one calendar week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Total distance in km
    pub distance_km: f64,
    /// Number of runs
    pub runs: u32,
}

/// Weekly schedule pattern analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPattern {
    /// Every calendar week from the first to the last run, empty weeks included
    pub weeks: Vec<WeeklyVolume>,
    /// Average distance of weeks that contain runs
    pub average_weekly_distance: f64,
    /// Largest weekly distance
    pub max_weekly_distance: f64,
    /// Average runs in weeks that contain runs
    pub average_runs_per_week: f64,
    /// Actual runs / expected runs × 100, capped at 100
    pub consistency_score: f64,
    /// Most frequent run days, as many as the rounded average runs per week
    pub preferred_days: Vec<Weekday>,
    /// Weekday most associated with runs longer than 15 km
    pub long_run_day: Option<Weekday>,
}

impl WeeklyPattern {
    fn empty() -> Self {
        Self {
            weeks: Vec::new(),
            average_weekly_distance: 0.0,
            max_weekly_distance: 0.0,
            average_runs_per_week: 0.0,
            consistency_score: 0.0,
            preferred_days: Vec::new(),
            long_run_day: None,
        }
    }

    /// Percent change of the last calendar week's distance over the week before
    ///
    /// `None` when there are fewer than two weeks or the previous week was empty.
    #[must_use]
    pub fn latest_week_increase_percent(&self) -> Option<f64> {
        let [.., previous, latest] = self.weeks.as_slice() else {
            return None;
        };
        (previous.distance_km > 0.0).then(|| {
            (latest.distance_km - previous.distance_km) / previous.distance_km * 100.0
        })
    }
}

/// Pattern detection engine for weekly training structure
pub struct PatternDetector;

impl PatternDetector {
    /// Monday of the calendar week containing `date`
    #[must_use]
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
    }

    /// Analyze the weekly structure of a run history
    #[must_use]
    pub fn detect_weekly_pattern(runs: &[RunRecord]) -> WeeklyPattern {
        if runs.is_empty() {
            return WeeklyPattern::empty();
        }

        // Group runs by calendar week
        let mut by_week: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
        for run in runs {
            let entry = by_week
                .entry(Self::week_start(run.date.date_naive()))
                .or_insert((0.0, 0));
            entry.0 += run.distance_km;
            entry.1 += 1;
        }

        let active_weeks = by_week.len() as f64;
        let total_distance: f64 = by_week.values().map(|(distance, _)| distance).sum();
        let average_weekly_distance = total_distance / active_weeks;
        let max_weekly_distance = by_week
            .values()
            .map(|(distance, _)| *distance)
            .fold(0.0, f64::max);
        let average_runs_per_week = runs.len() as f64 / active_weeks;

        let weeks = Self::fill_weeks(&by_week);
        let consistency_score =
            Self::consistency_score(runs.len(), weeks.len(), average_runs_per_week);

        WeeklyPattern {
            weeks,
            average_weekly_distance,
            max_weekly_distance,
            average_runs_per_week,
            consistency_score,
            preferred_days: Self::preferred_days(runs, average_runs_per_week),
            long_run_day: Self::long_run_day(runs),
        }
    }

    /// Expand grouped weeks into a continuous series including empty weeks
    fn fill_weeks(by_week: &BTreeMap<NaiveDate, (f64, u32)>) -> Vec<WeeklyVolume> {
        let (Some(first), Some(last)) = (by_week.keys().next(), by_week.keys().next_back()) else {
            return Vec::new();
        };

        let mut weeks = Vec::new();
        let mut week_start = *first;
        while week_start <= *last {
            let (distance_km, runs) = by_week.get(&week_start).copied().unwrap_or((0.0, 0));
            weeks.push(WeeklyVolume {
                week_start,
                distance_km,
                runs,
            });
            week_start += Duration::days(7);
        }
        weeks
    }

    /// Runs actually logged against the runs expected over the spanned weeks
    fn consistency_score(total_runs: usize, spanned_weeks: usize, average_per_week: f64) -> f64 {
        let expected = spanned_weeks as f64 * average_per_week.round();
        if expected <= 0.0 {
            return 0.0;
        }
        (total_runs as f64 / expected * 100.0).min(100.0)
    }

    /// Most frequent weekdays, ties broken by weekday order
    fn preferred_days(runs: &[RunRecord], average_per_week: f64) -> Vec<Weekday> {
        let mut day_freq: Vec<(Weekday, u32)> = Self::count_days(runs.iter()).into_iter().collect();
        day_freq.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then(a.0.num_days_from_monday().cmp(&b.0.num_days_from_monday()))
        });

        let take = average_per_week.round().max(1.0) as usize;
        day_freq.into_iter().take(take).map(|(day, _)| day).collect()
    }

    /// Weekday with the most runs longer than 15 km
    fn long_run_day(runs: &[RunRecord]) -> Option<Weekday> {
        Self::count_days(runs.iter().filter(|run| run.distance_km > LONG_RUN_KM))
            .into_iter()
            .max_by(|a, b| {
                a.1.cmp(&b.1)
                    .then(b.0.num_days_from_monday().cmp(&a.0.num_days_from_monday()))
            })
            .map(|(day, _)| day)
    }

    fn count_days<'a>(runs: impl Iterator<Item = &'a RunRecord>) -> HashMap<Weekday, u32> {
        let mut counts: HashMap<Weekday, u32> = HashMap::new();
        for run in runs {
            *counts.entry(run.date.weekday()).or_insert(0) += 1;
        }
        counts
    }
}
