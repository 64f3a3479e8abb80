//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{ExecutionMode, UnknownTemplatePolicy};

/// How unknown template ids are treated, as written in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTemplateMode {
    Strict,
    Fallback,
}

/// Configuration for the simulation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Master seed. Unset means seed from OS entropy.
    pub seed: Option<u64>,
    /// Yield multiplier per passed step. Default: 0.95.
    pub retention_factor: Option<f64>,
    /// Quality multiplier per step. Default: 0.98.
    pub degradation_factor: Option<f64>,
    /// Iteration scheduling. Default: sequential.
    pub execution_mode: Option<ExecutionMode>,
    /// Unknown template handling. Default: strict.
    pub unknown_template: Option<UnknownTemplateMode>,
    /// Template substituted when `unknown_template = "fallback"`.
    pub fallback_template: Option<String>,
}

impl EngineConfig {
    /// Returns the effective retention factor, defaulting to 0.95.
    pub fn effective_retention_factor(&self) -> f64 {
        self.retention_factor
            .unwrap_or(defaults::DEFAULT_RETENTION_FACTOR)
    }

    /// Returns the effective degradation factor, defaulting to 0.98.
    pub fn effective_degradation_factor(&self) -> f64 {
        self.degradation_factor
            .unwrap_or(defaults::DEFAULT_DEGRADATION_FACTOR)
    }

    /// Returns the effective execution mode, defaulting to sequential.
    pub fn effective_execution_mode(&self) -> ExecutionMode {
        self.execution_mode.unwrap_or_default()
    }

    /// Returns the unknown-template policy. Fallback without an explicit
    /// target substitutes the built-in template.
    pub fn effective_unknown_template_policy(&self) -> UnknownTemplatePolicy {
        match self.unknown_template {
            Some(UnknownTemplateMode::Fallback) => UnknownTemplatePolicy::FallbackTo(
                self.fallback_template
                    .clone()
                    .unwrap_or_else(|| defaults::DEFAULT_TEMPLATE_ID.to_string()),
            ),
            Some(UnknownTemplateMode::Strict) | None => UnknownTemplatePolicy::Strict,
        }
    }
}
