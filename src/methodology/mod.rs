// ABOUTME: Training methodology dispatch: strategies, pace derivation and the strategy registry
// ABOUTME: Methodologies are data tables with one pace-system switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

/// Built-in methodology tables
pub mod catalog;
/// Pace systems and pace zones
pub mod paces;
/// Cached strategy lookup
pub mod registry;
/// Strategy type and workout selection
pub mod strategy;

pub use paces::{FoundationMetric, PaceSystem, PaceZone, PaceZones};
pub use registry::StrategyRegistry;
pub use strategy::{Methodology, MethodologyStrategy, PhaseTable};
