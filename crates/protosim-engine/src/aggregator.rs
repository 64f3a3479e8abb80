//! MonteCarloAggregator: repeats iterations and folds them into metrics.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use protosim_core::config::SimConfig;
use protosim_core::constants::SIMULATION_ID_PREFIX;
use protosim_core::errors::{ConfigError, ProtosimErrorCode, SimResult, SimulationError};
use protosim_core::models::{
    AggregatedMetrics, ExecutionMode, IterationResult, ProtocolStep, SimulationParams,
    SimulationResult, UnknownTemplatePolicy,
};
use protosim_core::tracing::events;
use rayon::prelude::*;
use tracing::debug;
use uuid::Uuid;

use crate::catalog::ProtocolCatalog;
use crate::executor::StepExecutor;
use crate::rng::SimRng;
use crate::runner::IterationRunner;
use crate::stats::Summary;

/// Root of the engine: resolves a template, runs it `num_runs` times and
/// aggregates the results.
///
/// Owns the random stream. Every call to [`run_simulation`] advances it, so
/// two aggregators built from the same seed and fed the same requests
/// produce identical runs and metrics.
///
/// [`run_simulation`]: MonteCarloAggregator::run_simulation
#[derive(Debug, Clone)]
pub struct MonteCarloAggregator {
    catalog: ProtocolCatalog,
    runner: IterationRunner,
    rng: SimRng,
    execution_mode: ExecutionMode,
    unknown_template: UnknownTemplatePolicy,
}

impl MonteCarloAggregator {
    /// Built-in catalog, default factors, sequential execution, strict
    /// template lookup.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            catalog: ProtocolCatalog::with_builtins(),
            runner: IterationRunner::default(),
            rng: SimRng::new(seed),
            execution_mode: ExecutionMode::Sequential,
            unknown_template: UnknownTemplatePolicy::Strict,
        }
    }

    /// Build from a resolved config: catalog with configured templates,
    /// configured factors, cohort defaults, seed, mode, and template policy.
    /// A fallback template must exist in the resulting catalog.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        SimConfig::validate(config)?;
        let catalog = ProtocolCatalog::from_config(&config.templates)?;
        let unknown_template = config.engine.effective_unknown_template_policy();
        if let UnknownTemplatePolicy::FallbackTo(ref fallback) = unknown_template {
            if !catalog.contains(fallback) {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.fallback_template".to_string(),
                    message: format!("template '{fallback}' is not in the catalog"),
                }
                .into());
            }
        }
        let executor = StepExecutor::with_factors(
            config.engine.effective_retention_factor(),
            config.engine.effective_degradation_factor(),
        )?;
        let runner = IterationRunner::new(executor).with_cohort_defaults(&config.defaults)?;

        Ok(Self {
            catalog,
            runner,
            rng: SimRng::new(config.engine.seed),
            execution_mode: config.engine.effective_execution_mode(),
            unknown_template,
        })
    }

    pub fn with_catalog(mut self, catalog: ProtocolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_runner(mut self, runner: IterationRunner) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    pub fn with_unknown_template_policy(mut self, policy: UnknownTemplatePolicy) -> Self {
        self.unknown_template = policy;
        self
    }

    pub fn catalog(&self) -> &ProtocolCatalog {
        &self.catalog
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Master seed, if the stream was seeded.
    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// Run `template_id` over `num_runs` fresh cohorts of `num_samples`.
    ///
    /// All validation happens before the first random draw: a rejected
    /// request leaves the stream untouched.
    pub fn run_simulation(
        &mut self,
        template_id: &str,
        num_samples: usize,
        num_runs: usize,
        params: &SimulationParams,
    ) -> SimResult<SimulationResult> {
        if let Err(e) = validate_request(num_samples, num_runs, params) {
            events::simulation_rejected(template_id, e.error_code(), &e.to_string());
            return Err(e);
        }
        let resolved = match self.catalog.resolve(template_id, &self.unknown_template) {
            Ok(resolved) => resolved,
            Err(e) => {
                events::simulation_rejected(template_id, e.error_code(), &e.to_string());
                return Err(e);
            }
        };

        let sim_id = format!("{SIMULATION_ID_PREFIX}{}", Uuid::new_v4());
        let started = Instant::now();
        events::simulation_started(
            &sim_id,
            resolved.template_id,
            num_samples,
            num_runs,
            self.execution_mode.as_str(),
        );

        let runs = match self.execution_mode {
            ExecutionMode::Sequential => {
                run_sequential(&self.runner, resolved.steps, num_samples, num_runs, params, &mut self.rng)
            }
            ExecutionMode::Parallel => {
                let base_seed = self.rng.next_seed();
                debug!(base_seed, "deriving per-run streams");
                run_parallel(&self.runner, resolved.steps, num_samples, num_runs, params, base_seed)
            }
        };

        let aggregated_metrics = aggregate(&runs, num_samples, resolved.steps)?;
        events::simulation_completed(
            &sim_id,
            aggregated_metrics.avg_success_rate,
            started.elapsed().as_millis(),
        );

        Ok(SimulationResult {
            sim_id,
            created_at: Utc::now(),
            template_id: resolved.template_id.to_string(),
            requested_template_id: template_id.to_string(),
            num_samples,
            num_runs,
            parameters: params.clone(),
            seed: self.rng.seed(),
            execution_mode: self.execution_mode,
            runs,
            aggregated_metrics,
        })
    }
}

fn validate_request(num_samples: usize, num_runs: usize, params: &SimulationParams) -> SimResult<()> {
    if num_samples == 0 {
        return Err(SimulationError::InvalidSampleCount { num_samples });
    }
    if num_runs == 0 {
        return Err(SimulationError::InvalidRunCount { num_runs });
    }
    params.validate()
}

fn run_sequential(
    runner: &IterationRunner,
    steps: &[ProtocolStep],
    num_samples: usize,
    num_runs: usize,
    params: &SimulationParams,
    rng: &mut SimRng,
) -> Vec<IterationResult> {
    (0..num_runs)
        .map(|run_index| {
            let result = runner.run_iteration(steps, num_samples, params, rng);
            log_iteration(run_index, &result);
            result
        })
        .collect()
}

/// Each run gets its own stream (`base_seed + run_index`); output order is
/// run-index order regardless of scheduling.
fn run_parallel(
    runner: &IterationRunner,
    steps: &[ProtocolStep],
    num_samples: usize,
    num_runs: usize,
    params: &SimulationParams,
    base_seed: u64,
) -> Vec<IterationResult> {
    (0..num_runs)
        .into_par_iter()
        .map(|run_index| {
            let mut rng = SimRng::for_run(base_seed, run_index);
            let result = runner.run_iteration(steps, num_samples, params, &mut rng);
            log_iteration(run_index, &result);
            result
        })
        .collect()
}

fn log_iteration(run_index: usize, result: &IterationResult) {
    events::iteration_completed(
        run_index,
        result.success_count,
        result.failure_count,
        result.total_cost,
    );
}

/// Fold per-run results into cross-run metrics.
///
/// The success rate is Σ survivors / (runs × `num_samples`) as a percentage.
/// Empty run sets and empty cohorts are rejected rather than divided by.
pub fn aggregate(
    runs: &[IterationResult],
    num_samples: usize,
    steps: &[ProtocolStep],
) -> SimResult<AggregatedMetrics> {
    if num_samples == 0 {
        return Err(SimulationError::InvalidSampleCount { num_samples });
    }
    let durations: Vec<f64> = runs.iter().map(|r| r.duration_minutes).collect();
    let costs: Vec<f64> = runs.iter().map(|r| r.total_cost).collect();
    let yields: Vec<f64> = runs.iter().map(|r| r.final_yield_mg).collect();

    let (Some(duration), Some(cost), Some(final_yield)) = (
        Summary::of(&durations),
        Summary::of(&costs),
        Summary::of(&yields),
    ) else {
        return Err(SimulationError::InvalidRunCount { num_runs: 0 });
    };

    let overall_success_count: usize = runs.iter().map(|r| r.success_count).sum();
    let overall_failure_count: usize = runs.iter().map(|r| r.failure_count).sum();
    let total_samples = (runs.len() * num_samples) as f64;

    Ok(AggregatedMetrics {
        avg_duration_minutes: duration.mean,
        min_duration_minutes: duration.min,
        max_duration_minutes: duration.max,
        std_dev_duration: duration.std_dev,
        avg_cost: cost.mean,
        min_cost: cost.min,
        max_cost: cost.max,
        std_dev_cost: cost.std_dev,
        avg_final_yield_mg: final_yield.mean,
        avg_success_rate: overall_success_count as f64 / total_samples * 100.0,
        overall_success_count,
        overall_failure_count,
        nominal_reagent_usage: nominal_reagent_usage(steps),
    })
}

/// Per-run nominal reagent draw: each step's usage summed by reagent.
fn nominal_reagent_usage(steps: &[ProtocolStep]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for step in steps {
        for (reagent, quantity) in &step.reagent_usage {
            *totals.entry(reagent.clone()).or_insert(0.0) += quantity;
        }
    }
    totals
}
