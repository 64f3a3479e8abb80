//! Cohort defaults applied when the caller omits a parameter.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::validation::check_quantity;
use crate::errors::ConfigError;

/// Starting quantities for fresh samples.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CohortConfig {
    /// Initial yield (mg). Default: 100.
    pub initial_yield: Option<f64>,
    /// Initial volume (ml). Default: 50.
    pub initial_volume: Option<f64>,
}

impl CohortConfig {
    pub fn effective_initial_yield(&self) -> f64 {
        self.initial_yield
            .unwrap_or(defaults::DEFAULT_INITIAL_YIELD_MG)
    }

    pub fn effective_initial_volume(&self) -> f64 {
        self.initial_volume
            .unwrap_or(defaults::DEFAULT_INITIAL_VOLUME_ML)
    }

    /// Set quantities must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(value) = self.initial_yield {
            check_quantity("defaults.initial_yield", value)?;
        }
        if let Some(value) = self.initial_volume {
            check_quantity("defaults.initial_volume", value)?;
        }
        Ok(())
    }
}
