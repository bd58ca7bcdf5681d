// ABOUTME: Error re-exports for the engine crate
// ABOUTME: The unified AppError lives in pacekeeper-core so data and engine share one type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

//! # Unified Error Handling
//!
//! Re-exports [`AppError`], [`ErrorCode`] and [`AppResult`] from
//! `pacekeeper-core`.

pub use pacekeeper_core::errors::{AppError, AppResult, ErrorCode};
