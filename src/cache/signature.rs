// ABOUTME: Deterministic signatures of run histories used as memoization keys
// ABOUTME: SHA-256 over every run's fields in input order, plus value content hashing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::constants::cache::FITNESS_KEY_PREFIX;
use crate::models::RunRecord;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Signature of an ordered run history, `None` for an empty history
///
/// Every field that influences fitness estimation is part of the signature so
/// two histories that could produce different metrics never share a key.
#[must_use]
pub fn run_signature(runs: &[RunRecord]) -> Option<String> {
    if runs.is_empty() {
        return None;
    }

    let mut canonical = String::with_capacity(runs.len() * 80);
    for run in runs {
        // Exact bit patterns; rounded decimals would merge distinct runs
        let _ = write!(
            canonical,
            "{}|{:016x}|{:016x}|{}|{}|{}|{};",
            run.date.timestamp_millis(),
            run.distance_km.to_bits(),
            run.duration_minutes.to_bits(),
            run.average_pace
                .map_or_else(|| "-".to_owned(), |p| format!("{:016x}", p.to_bits())),
            run.average_heart_rate
                .map_or_else(|| "-".to_owned(), |hr| hr.to_string()),
            run.effort_level
                .map_or_else(|| "-".to_owned(), |e| e.to_string()),
            u8::from(run.is_race),
        );
    }

    Some(hex::encode(Sha256::digest(canonical.as_bytes())))
}

/// Cache key for fitness metrics of a run history
#[must_use]
pub fn fitness_cache_key(runs: &[RunRecord]) -> Option<String> {
    run_signature(runs).map(|signature| format!("{FITNESS_KEY_PREFIX}{signature}"))
}

/// SHA-256 of a value's JSON encoding, `None` if it cannot be serialized
#[must_use]
pub fn content_hash<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_vec(value)
        .ok()
        .map(|bytes| hex::encode(Sha256::digest(&bytes)))
}
