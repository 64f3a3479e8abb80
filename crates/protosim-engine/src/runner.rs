use protosim_core::config::CohortConfig;
use protosim_core::constants::{DEFAULT_INITIAL_VOLUME_ML, DEFAULT_INITIAL_YIELD_MG};
use protosim_core::errors::ConfigError;
use protosim_core::models::{IterationResult, ProtocolStep, Sample, SimulationParams};

use crate::executor::StepExecutor;
use crate::rng::SimRng;

/// Drives one full pass of a template over a fresh cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRunner {
    executor: StepExecutor,
    default_yield_mg: f64,
    default_volume_ml: f64,
}

impl IterationRunner {
    pub fn new(executor: StepExecutor) -> Self {
        Self {
            executor,
            default_yield_mg: DEFAULT_INITIAL_YIELD_MG,
            default_volume_ml: DEFAULT_INITIAL_VOLUME_ML,
        }
    }

    /// Use the configured cohort defaults for parameters the caller omits.
    /// Negative or non-finite quantities are rejected.
    pub fn with_cohort_defaults(mut self, cohort: &CohortConfig) -> Result<Self, ConfigError> {
        cohort.validate()?;
        self.default_yield_mg = cohort.effective_initial_yield();
        self.default_volume_ml = cohort.effective_initial_volume();
        Ok(self)
    }

    pub fn executor(&self) -> &StepExecutor {
        &self.executor
    }

    /// Fresh, all-active cohort of `num_samples` samples.
    pub fn new_cohort(&self, num_samples: usize, params: &SimulationParams) -> Vec<Sample> {
        let initial_yield = params.effective_initial_yield(self.default_yield_mg);
        let initial_volume = params.effective_initial_volume(self.default_volume_ml);
        (0..num_samples)
            .map(|i| Sample::new(i, initial_yield, initial_volume))
            .collect()
    }

    /// Run every step of `steps` in order over a new cohort.
    ///
    /// `num_samples = 0` is valid here and yields an all-zero result.
    pub fn run_iteration(
        &self,
        steps: &[ProtocolStep],
        num_samples: usize,
        params: &SimulationParams,
        rng: &mut SimRng,
    ) -> IterationResult {
        let mut cohort = self.new_cohort(num_samples, params);

        let mut outcomes = Vec::with_capacity(steps.len());
        let mut current_time = 0.0;
        let mut total_cost = 0.0;

        for step in steps {
            let mut outcome = self.executor.execute(step, &mut cohort, rng);
            outcome.schedule_at(current_time);
            current_time = outcome.end_time;
            total_cost += outcome.cost;
            outcomes.push(outcome);
        }

        let active: Vec<&Sample> = cohort.iter().filter(|s| s.is_active()).collect();
        let success_count = active.len();
        let (final_yield_mg, final_quality) = if active.is_empty() {
            (0.0, 0.0)
        } else {
            let n = success_count as f64;
            (
                active.iter().map(|s| s.yield_mg).sum::<f64>() / n,
                active.iter().map(|s| s.quality_factor).sum::<f64>() / n,
            )
        };

        IterationResult {
            duration_minutes: current_time,
            total_cost,
            steps: outcomes,
            final_yield_mg,
            final_quality,
            success_count,
            failure_count: num_samples - success_count,
        }
    }
}

impl Default for IterationRunner {
    fn default() -> Self {
        Self::new(StepExecutor::new())
    }
}
