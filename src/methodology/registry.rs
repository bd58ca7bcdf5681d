// ABOUTME: Strategy registry building each methodology once and handing out shared handles
// ABOUTME: Unknown methodology names are reported as not-found errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use super::catalog::strategy_for;
use super::strategy::{Methodology, MethodologyStrategy};
use crate::errors::AppResult;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Cache of configured methodology strategies
///
/// Uses `DashMap` so concurrent lookups of different methodologies do not
/// contend on a single lock.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    strategies: DashMap<Methodology, Arc<MethodologyStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strategy for a methodology name, built on first request
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ResourceNotFound` for an unrecognized name
    pub fn get(&self, name: &str) -> AppResult<Arc<MethodologyStrategy>> {
        let methodology: Methodology = name.parse()?;
        Ok(self.get_methodology(methodology))
    }

    /// Strategy for a known methodology, built on first request
    #[must_use]
    pub fn get_methodology(&self, methodology: Methodology) -> Arc<MethodologyStrategy> {
        Arc::clone(
            self.strategies
                .entry(methodology)
                .or_insert_with(|| {
                    debug!(%methodology, "Building methodology strategy");
                    Arc::new(strategy_for(methodology))
                })
                .value(),
        )
    }

    /// Number of strategies built so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether no strategy has been built yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Drop every cached strategy
    pub fn clear(&self) {
        self.strategies.clear();
    }
}
