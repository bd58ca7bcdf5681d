// ABOUTME: Core types and constants for the pacekeeper training engine
// ABOUTME: Foundation crate with error handling, run/plan data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

#![deny(unsafe_code)]

//! # Pacekeeper Core
//!
//! Foundation crate providing the shared data model and constants for the
//! pacekeeper engine. It changes rarely so the engine crate benefits from
//! incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Physiological, intensity and cache constants organized by domain
//! - **models**: Run records and the Plan / Block / Microcycle / Workout / Segment tree

/// Unified error handling with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Run history and training plan data model
pub mod models;
