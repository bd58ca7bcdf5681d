// ABOUTME: Integration tests for engine configuration loading and validation
// ABOUTME: Environment overrides run serially since they mutate process state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacekeeper::config::{ConfigError, EngineConfig};
use pacekeeper::errors::{AppError, ErrorCode};
use pacekeeper::logging::{LogFormat, LoggingConfig};
use pacekeeper::EngineContext;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: [&str; 4] = [
    "PACEKEEPER_CACHE_MAX_ENTRIES",
    "PACEKEEPER_CACHE_MAX_AGE_SECS",
    "PACEKEEPER_DISTRIBUTION_TOLERANCE",
    "PACEKEEPER_MAX_ADJUSTMENT_ITERATIONS",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults() {
    let config = EngineConfig::default();

    assert_eq!(config.cache.max_entries, 100);
    assert_eq!(config.cache.max_age(), Duration::from_secs(300));
    assert!((config.adjustment.tolerance_percent - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.adjustment.max_iterations, 10);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_vars();
    env::set_var("PACEKEEPER_CACHE_MAX_ENTRIES", "250");
    env::set_var("PACEKEEPER_CACHE_MAX_AGE_SECS", "60");
    env::set_var("PACEKEEPER_DISTRIBUTION_TOLERANCE", "7.5");
    env::set_var("PACEKEEPER_MAX_ADJUSTMENT_ITERATIONS", "3");

    let config = EngineConfig::from_env();
    clear_vars();

    assert_eq!(config.cache.max_entries, 250);
    assert_eq!(config.cache.max_age_secs, 60);
    assert!((config.adjustment.tolerance_percent - 7.5).abs() < f64::EPSILON);
    assert_eq!(config.adjustment.max_iterations, 3);
}

#[test]
#[serial]
fn test_invalid_values_fall_back_to_defaults() {
    clear_vars();
    env::set_var("PACEKEEPER_CACHE_MAX_ENTRIES", "lots");
    env::set_var("PACEKEEPER_MAX_ADJUSTMENT_ITERATIONS", "-1");

    let config = EngineConfig::from_env();
    clear_vars();

    assert_eq!(config.cache.max_entries, 100);
    assert_eq!(config.adjustment.max_iterations, 10);
}

#[test]
#[serial]
fn test_context_from_env_rejects_invalid_config() {
    clear_vars();
    env::set_var("PACEKEEPER_DISTRIBUTION_TOLERANCE", "75");

    let result = EngineContext::from_env();
    clear_vars();

    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_validation_rejects_zero_values() {
    let mut config = EngineConfig::default();
    config.cache.max_entries = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = EngineConfig::default();
    config.adjustment.max_iterations = 0;
    assert!(config.validate().is_err());

    let mut config = EngineConfig::default();
    config.adjustment.tolerance_percent = -1.0;
    let err: AppError = config.validate().unwrap_err().into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.format, LogFormat::Json);
}
