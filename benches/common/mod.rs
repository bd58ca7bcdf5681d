// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides deterministic run-history and plan generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
