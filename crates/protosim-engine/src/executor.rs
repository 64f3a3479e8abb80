use protosim_core::config::check_unit_factor;
use protosim_core::constants::{DEFAULT_DEGRADATION_FACTOR, DEFAULT_RETENTION_FACTOR};
use protosim_core::errors::ConfigError;
use protosim_core::models::{ProtocolStep, Sample, StepOutcome};

use crate::rng::SimRng;

/// Advances a cohort through one protocol step.
///
/// Draw order per step is fixed: one normal draw for the duration, then one
/// uniform draw per active sample in cohort order. Reproducibility of a
/// seeded simulation depends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepExecutor {
    retention_factor: f64,
    degradation_factor: f64,
}

impl StepExecutor {
    /// Executor with the default retention (0.95) and degradation (0.98) factors.
    pub fn new() -> Self {
        Self {
            retention_factor: DEFAULT_RETENTION_FACTOR,
            degradation_factor: DEFAULT_DEGRADATION_FACTOR,
        }
    }

    /// Executor with custom factors. Both must lie in (0, 1] so yield and
    /// quality never grow and quality never reaches zero.
    pub fn with_factors(retention_factor: f64, degradation_factor: f64) -> Result<Self, ConfigError> {
        check_unit_factor("retention_factor", retention_factor)?;
        check_unit_factor("degradation_factor", degradation_factor)?;
        Ok(Self {
            retention_factor,
            degradation_factor,
        })
    }

    pub fn retention_factor(&self) -> f64 {
        self.retention_factor
    }

    pub fn degradation_factor(&self) -> f64 {
        self.degradation_factor
    }

    /// Run `step` over `cohort`, mutating samples in place.
    ///
    /// The returned outcome starts at time 0; the runner places it on the
    /// iteration timeline. Empty or fully failed cohorts produce zero counts
    /// and zero cost.
    pub fn execute(&self, step: &ProtocolStep, cohort: &mut [Sample], rng: &mut SimRng) -> StepOutcome {
        let duration = rng
            .normal(step.base_duration_minutes, step.duration_std_dev)
            .max(0.0);

        let mut success_count = 0;
        let mut failure_count = 0;

        for sample in cohort.iter_mut().filter(|s| s.is_active()) {
            // Quality decays on every step, pass or fail.
            sample.quality_factor *= self.degradation_factor;

            if rng.uniform() < step.success_rate {
                success_count += 1;
                sample.yield_mg *= self.retention_factor;
            } else {
                failure_count += 1;
                sample.fail();
            }
        }

        // Billed against what proceeds to the next step.
        let survivors = cohort.iter().filter(|s| s.is_active()).count();
        let cost = step.cost_per_sample * survivors as f64;

        StepOutcome {
            name: step.name.clone(),
            duration,
            start_time: 0.0,
            end_time: duration,
            success_count,
            failure_count,
            cost,
            reagent_usage: step.reagent_usage.clone(),
        }
    }
}

impl Default for StepExecutor {
    fn default() -> Self {
        Self::new()
    }
}
