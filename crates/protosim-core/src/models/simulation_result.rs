use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{AggregatedMetrics, ExecutionMode, IterationResult, SimulationParams};
use crate::errors::{SimResult, SimulationError};

/// Everything a caller gets back from one simulation request.
///
/// Contains no random-stream state; the seed is echoed as a plain number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulationResult {
    /// Unique per invocation, `sim-<uuid>`.
    pub sim_id: String,
    pub created_at: DateTime<Utc>,
    /// Template the runs actually used.
    pub template_id: String,
    /// Template the caller asked for. Differs from `template_id` only when a
    /// fallback policy substituted a template.
    pub requested_template_id: String,
    pub num_samples: usize,
    pub num_runs: usize,
    pub parameters: SimulationParams,
    pub seed: Option<u64>,
    pub execution_mode: ExecutionMode,
    pub runs: Vec<IterationResult>,
    pub aggregated_metrics: AggregatedMetrics,
}

impl SimulationResult {
    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self).map_err(serialization_failed)
    }

    /// Serialize to single-line JSON.
    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string(self).map_err(serialization_failed)
    }
}

fn serialization_failed(e: serde_json::Error) -> SimulationError {
    SimulationError::SerializationFailed {
        message: e.to_string(),
    }
}
