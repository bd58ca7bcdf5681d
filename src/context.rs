// ABOUTME: Engine context owning configuration, the fitness memoization cache and strategy registry
// ABOUTME: Every public engine operation is an explicit method on a context value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

use crate::cache::{content_hash, fitness_cache_key, CacheStats, MemoizationCache};
use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::intelligence::{
    FitnessMetrics, FitnessMetricsCalculator, TrainingLoadCalculator, TrainingLoadSample,
};
use crate::methodology::{MethodologyStrategy, StrategyRegistry};
use crate::models::{Plan, RunRecord};
use crate::plan::{
    AdjustmentOutcome, AutoAdjustmentEngine, IntensityDistributionValidator, ValidationReport,
    Violation,
};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Process-local engine state
///
/// Construct one per session (or per test) instead of sharing a global; the
/// cache is guarded by a single mutex so a context can be shared across
/// threads.
#[derive(Debug)]
pub struct EngineContext {
    config: EngineConfig,
    fitness_cache: Mutex<MemoizationCache<FitnessMetrics>>,
    training_load: TrainingLoadCalculator,
    strategies: StrategyRegistry,
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EngineContext {
    /// Create a context from configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let fitness_cache = Mutex::new(MemoizationCache::from_config(&config.cache));
        Self {
            config,
            fitness_cache,
            training_load: TrainingLoadCalculator::new(),
            strategies: StrategyRegistry::new(),
        }
    }

    /// Create a context from validated environment configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the loaded configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = EngineConfig::from_env();
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn cache(&self) -> MutexGuard<'_, MemoizationCache<FitnessMetrics>> {
        // Entries are whole values, so a panic mid-update cannot leave one half-written
        self.fitness_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Fitness metrics for a run history, memoized by run signature
    ///
    /// An empty history has no signature and is computed without touching the cache.
    #[must_use]
    pub fn compute_fitness_metrics(&self, runs: &[RunRecord]) -> FitnessMetrics {
        let Some(key) = fitness_cache_key(runs) else {
            return FitnessMetricsCalculator::compute(runs);
        };

        let cached = self.cache().get(&key);
        if let Some(metrics) = cached {
            return metrics;
        }

        // Computed outside the lock; a concurrent miss on the same key stores an identical value
        let metrics = FitnessMetricsCalculator::compute(runs);
        self.cache()
            .set(key, metrics.clone(), content_hash(&metrics));
        metrics
    }

    /// Fitness metrics for several run histories, in input order
    ///
    /// Cached histories are answered from the cache; the rest are deduplicated
    /// by signature and computed in parallel, then stored.
    #[must_use]
    pub fn compute_fitness_metrics_batch(
        &self,
        histories: &[Vec<RunRecord>],
    ) -> Vec<FitnessMetrics> {
        let keys: Vec<Option<String>> = histories
            .iter()
            .map(|runs| fitness_cache_key(runs))
            .collect();

        let mut results: Vec<Option<FitnessMetrics>> = vec![None; histories.len()];
        let mut pending: HashMap<&str, usize> = HashMap::new();
        {
            let mut cache = self.cache();
            for (index, key) in keys.iter().enumerate() {
                match key {
                    Some(key) => {
                        if let Some(cached) = cache.get(key) {
                            results[index] = Some(cached);
                        } else {
                            pending.entry(key.as_str()).or_insert(index);
                        }
                    }
                    None => results[index] = Some(FitnessMetricsCalculator::compute(&[])),
                }
            }
        }

        debug!(
            batch = histories.len(),
            cached = histories.len() - pending.len(),
            computing = pending.len(),
            "Fitness batch partitioned"
        );

        let computed: HashMap<&str, FitnessMetrics> = pending
            .into_par_iter()
            .map(|(key, index)| (key, FitnessMetricsCalculator::compute(&histories[index])))
            .collect();

        {
            let mut cache = self.cache();
            for (key, metrics) in &computed {
                cache.set(*key, metrics.clone(), content_hash(metrics));
            }
        }

        results
            .into_iter()
            .zip(&keys)
            .map(|(result, key)| {
                result
                    .or_else(|| key.as_deref().and_then(|key| computed.get(key).cloned()))
                    .unwrap_or_else(|| FitnessMetricsCalculator::compute(&[]))
            })
            .collect()
    }

    /// Training load series for a run history at the given threshold pace (min/km)
    #[must_use]
    pub fn compute_training_load(
        &self,
        runs: &[RunRecord],
        threshold_pace: f64,
    ) -> Vec<TrainingLoadSample> {
        self.training_load.calculate(runs, threshold_pace)
    }

    /// Latest training load summary, ratio 1 when there is no history
    #[must_use]
    pub fn latest_training_load(
        &self,
        runs: &[RunRecord],
        threshold_pace: f64,
    ) -> TrainingLoadSample {
        self.training_load.latest(runs, threshold_pace)
    }

    /// Strategy handle for a methodology name, shared across calls
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ResourceNotFound` for an unrecognized name
    pub fn get_methodology_strategy(&self, name: &str) -> AppResult<Arc<MethodologyStrategy>> {
        self.strategies.get(name)
    }

    fn validator(&self) -> IntensityDistributionValidator {
        IntensityDistributionValidator::new(self.config.adjustment.tolerance_percent)
    }

    /// Validate a plan's intensity distribution against a methodology's phase targets
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ResourceNotFound` for an unrecognized methodology
    pub fn validate_intensity_distribution(
        &self,
        plan: &Plan,
        methodology: &str,
    ) -> AppResult<ValidationReport> {
        let strategy = self.get_methodology_strategy(methodology)?;
        Ok(self
            .validator()
            .validate(plan, |phase| strategy.phase_target(phase)))
    }

    /// Rewrite a plan to fix violations, returning the best plan and a report
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ResourceNotFound` for an unrecognized methodology
    pub fn auto_adjust_intensity_distribution(
        &self,
        plan: &Plan,
        violations: &[Violation],
        methodology: &str,
    ) -> AppResult<AdjustmentOutcome> {
        let strategy = self.get_methodology_strategy(methodology)?;
        let engine = AutoAdjustmentEngine::from_config(&self.config.adjustment);
        Ok(engine.adjust(plan, violations, |phase| strategy.phase_target(phase)))
    }

    /// Validate and, when needed, adjust a plan in one call
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ResourceNotFound` for an unrecognized methodology
    pub fn enforce_intensity_distribution(
        &self,
        plan: &Plan,
        methodology: &str,
    ) -> AppResult<AdjustmentOutcome> {
        let report = self.validate_intensity_distribution(plan, methodology)?;
        self.auto_adjust_intensity_distribution(plan, &report.violations, methodology)
    }

    /// Fitness cache statistics
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache().stats()
    }

    /// Entries currently held by the fitness cache
    #[must_use]
    pub fn cache_size(&self) -> usize {
        self.cache().size()
    }

    /// Drop every cached fitness result and methodology strategy
    pub fn clear_caches(&self) {
        self.cache().clear();
        self.strategies.clear();
        info!("Engine caches cleared");
    }
}
