use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What happened to a cohort during one step of one iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StepOutcome {
    pub name: String,
    /// Drawn duration in minutes, never negative.
    pub duration: f64,
    /// Minutes since the iteration started when this step began.
    pub start_time: f64,
    pub end_time: f64,
    /// Samples that passed this step.
    pub success_count: usize,
    /// Samples that failed on this step. Earlier failures are not counted.
    pub failure_count: usize,
    /// Per-sample cost times survivors after this step.
    pub cost: f64,
    /// Nominal reagent draw copied from the step, not scaled by cohort size.
    pub reagent_usage: BTreeMap<String, f64>,
}

impl StepOutcome {
    /// Place the step on the iteration timeline starting at `start_time`.
    pub fn schedule_at(&mut self, start_time: f64) {
        self.start_time = start_time;
        self.end_time = start_time + self.duration;
    }
}
