use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One step of a protocol template.
///
/// Steps never change once a template is registered. The reagent map is a
/// `BTreeMap` so serialized output has a stable key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProtocolStep {
    pub name: String,
    /// Mean duration of the step in minutes.
    pub base_duration_minutes: f64,
    /// Standard deviation of the duration draw. Zero means deterministic.
    pub duration_std_dev: f64,
    /// Probability in [0, 1] that an active sample passes this step.
    pub success_rate: f64,
    /// Cost charged per sample that survives the step.
    pub cost_per_sample: f64,
    /// Nominal reagent draw, reagent name to quantity.
    #[serde(default)]
    pub reagent_usage: BTreeMap<String, f64>,
}

impl ProtocolStep {
    pub fn new(
        name: impl Into<String>,
        base_duration_minutes: f64,
        duration_std_dev: f64,
        success_rate: f64,
        cost_per_sample: f64,
    ) -> Self {
        Self {
            name: name.into(),
            base_duration_minutes,
            duration_std_dev,
            success_rate,
            cost_per_sample,
            reagent_usage: BTreeMap::new(),
        }
    }

    /// Add a reagent to the step's nominal usage.
    pub fn with_reagent(mut self, reagent: impl Into<String>, quantity: f64) -> Self {
        self.reagent_usage.insert(reagent.into(), quantity);
        self
    }

    /// Check the step's numeric fields. Returns a description of the first
    /// violation found.
    pub fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !self.base_duration_minutes.is_finite() || self.base_duration_minutes < 0.0 {
            return Err(format!(
                "base_duration_minutes must be finite and >= 0, got {}",
                self.base_duration_minutes
            ));
        }
        if !self.duration_std_dev.is_finite() || self.duration_std_dev < 0.0 {
            return Err(format!(
                "duration_std_dev must be finite and >= 0, got {}",
                self.duration_std_dev
            ));
        }
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(format!(
                "success_rate must be between 0.0 and 1.0, got {}",
                self.success_rate
            ));
        }
        if !self.cost_per_sample.is_finite() || self.cost_per_sample < 0.0 {
            return Err(format!(
                "cost_per_sample must be finite and >= 0, got {}",
                self.cost_per_sample
            ));
        }
        for (reagent, quantity) in &self.reagent_usage {
            if !quantity.is_finite() || *quantity < 0.0 {
                return Err(format!(
                    "reagent {reagent} quantity must be finite and >= 0, got {quantity}"
                ));
            }
        }
        Ok(())
    }
}
