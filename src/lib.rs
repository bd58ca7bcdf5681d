// ABOUTME: Main library entry point for the Pacekeeper running fitness engine
// ABOUTME: Fitness metrics, training load, plan intensity auditing and methodology dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

#![deny(unsafe_code)]

//! # Pacekeeper
//!
//! A synchronous, in-memory computation library that turns a runner's
//! workout history into physiological fitness estimates and audits
//! periodized training plans against methodology-specific intensity targets.
//!
//! ## Features
//!
//! - **Fitness metrics**: VDOT, critical speed, running economy, lactate
//!   threshold, EWMA training load, injury risk and recovery score
//! - **Memoization**: run histories are hashed into signatures and results
//!   cached with LRU eviction and max-age expiry
//! - **Intensity auditing**: realized easy/moderate/hard shares per phase
//!   checked against targets, with bounded auto-adjustment
//! - **Methodologies**: Daniels, Lydiard, Pfitzinger, Hansons and 80/20
//!   phase targets, pace zones and workout selection
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pacekeeper::context::EngineContext;
//! use pacekeeper::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let engine = EngineContext::from_env()?;
//!     let metrics = engine.compute_fitness_metrics(&[]);
//!     println!("VDOT {}", metrics.vdot);
//!
//!     let strategy = engine.get_methodology_strategy("daniels")?;
//!     println!("Pace system {:?}", strategy.pace_system);
//!     Ok(())
//! }
//! ```

/// Memoization cache and run-history signatures
pub mod cache;

/// Engine configuration
pub mod config;

/// Domain constants
pub mod constants;

/// Engine context owning caches and configuration
pub mod context;

/// Unified error handling
pub mod errors;

/// Fitness metrics and training load
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Training methodology strategies
pub mod methodology;

/// Run history and plan data model
pub mod models;

/// Plan intensity validation and auto-adjustment
pub mod plan;

pub use context::EngineContext;
pub use errors::{AppError, AppResult, ErrorCode};
