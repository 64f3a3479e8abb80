use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_QUALITY_FACTOR, SAMPLE_ID_PREFIX};

/// Lifecycle status of a sample within one iteration.
///
/// There is no "completed" state: a sample still `Active` after the last
/// step is the success outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleStatus {
    Active,
    Failed,
}

/// A cohort member. Created fresh per iteration and dropped at its end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: String,
    pub status: SampleStatus,
    pub yield_mg: f64,
    pub volume_ml: f64,
    /// In (0, 1]. Starts at 1.0 and only ever shrinks.
    pub quality_factor: f64,
}

impl Sample {
    /// Create the `index`-th (zero-based) sample of a cohort.
    pub fn new(index: usize, initial_yield_mg: f64, initial_volume_ml: f64) -> Self {
        Self {
            sample_id: format!("{SAMPLE_ID_PREFIX}{}", index + 1),
            status: SampleStatus::Active,
            yield_mg: initial_yield_mg,
            volume_ml: initial_volume_ml,
            quality_factor: INITIAL_QUALITY_FACTOR,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SampleStatus::Active
    }

    /// Mark the sample as failed. Failure is permanent.
    pub fn fail(&mut self) {
        self.status = SampleStatus::Failed;
    }
}
