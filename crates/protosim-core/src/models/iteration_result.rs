use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::StepOutcome;

/// Result of one full pass of a template over a fresh cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IterationResult {
    /// Sum of step durations; steps run back to back.
    pub duration_minutes: f64,
    /// Sum of step costs.
    pub total_cost: f64,
    pub steps: Vec<StepOutcome>,
    /// Mean yield of samples still active, 0 when none survived.
    pub final_yield_mg: f64,
    /// Mean quality factor of samples still active, 0 when none survived.
    pub final_quality: f64,
    pub success_count: usize,
    pub failure_count: usize,
}

impl IterationResult {
    /// Cohort size this iteration ran with.
    pub fn cohort_size(&self) -> usize {
        self.success_count + self.failure_count
    }
}
