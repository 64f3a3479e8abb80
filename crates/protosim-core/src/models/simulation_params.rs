use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{SimResult, SimulationError};

/// Caller-supplied cohort parameters.
///
/// Absent values fall back to the configured defaults. Unrecognized keys in
/// incoming JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SimulationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_volume: Option<f64>,
}

impl SimulationParams {
    pub fn with_initial_yield(mut self, value: f64) -> Self {
        self.initial_yield = Some(value);
        self
    }

    pub fn with_initial_volume(mut self, value: f64) -> Self {
        self.initial_volume = Some(value);
        self
    }

    /// Parse parameters from a JSON object. Unknown keys are dropped.
    pub fn from_json(json: &str) -> SimResult<Self> {
        serde_json::from_str(json).map_err(|e| SimulationError::InvalidParameter {
            field: "parameters".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the effective initial yield, defaulting to `fallback`.
    pub fn effective_initial_yield(&self, fallback: f64) -> f64 {
        self.initial_yield.unwrap_or(fallback)
    }

    /// Returns the effective initial volume, defaulting to `fallback`.
    pub fn effective_initial_volume(&self, fallback: f64) -> f64 {
        self.initial_volume.unwrap_or(fallback)
    }

    /// Reject negative or non-finite starting quantities.
    pub fn validate(&self) -> SimResult<()> {
        check_quantity("initial_yield", self.initial_yield)?;
        check_quantity("initial_volume", self.initial_volume)
    }
}

fn check_quantity(field: &str, value: Option<f64>) -> SimResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(SimulationError::InvalidParameter {
            field: field.to_string(),
            message: format!("must be finite and >= 0, got {v}"),
        }),
        _ => Ok(()),
    }
}
