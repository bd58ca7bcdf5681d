// ABOUTME: Engine constants organized by domain
// ABOUTME: Cache sizing, physiological model coefficients and intensity thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

/// Memoization cache sizing and expiry defaults
pub mod cache;

/// Intensity buckets, distribution tolerance and severity bands
pub mod intensity;

/// Physiological model coefficients and fail-open defaults
pub mod physiology;
