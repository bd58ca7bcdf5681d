// ABOUTME: Constant re-exports for the engine crate
// ABOUTME: Domain constants are defined once in pacekeeper-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

pub use pacekeeper_core::constants::{cache, intensity, physiology};
