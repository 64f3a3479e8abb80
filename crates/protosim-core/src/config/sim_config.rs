//! Top-level protosim configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::validation::check_unit_factor;
use super::{defaults, CohortConfig, EngineConfig, ObservabilityConfig, TemplateConfig};
use crate::errors::ConfigError;
use crate::models::ExecutionMode;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PROTOSIM_*`)
/// 3. Project config (`protosim.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub engine: EngineConfig,
    pub defaults: CohortConfig,
    pub observability: ObservabilityConfig,
    pub templates: Vec<TemplateConfig>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub execution_mode: Option<ExecutionMode>,
    pub log_level: Option<String>,
}

impl SimConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load a single explicit config file on top of the defaults, then apply
    /// environment and CLI overrides.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Template step contents are checked by the catalog when the templates
    /// are registered; only template ids are checked here.
    pub fn validate(config: &SimConfig) -> Result<(), ConfigError> {
        if let Some(factor) = config.engine.retention_factor {
            check_unit_factor("engine.retention_factor", factor)?;
        }
        if let Some(factor) = config.engine.degradation_factor {
            check_unit_factor("engine.degradation_factor", factor)?;
        }
        if let Some(ref id) = config.engine.fallback_template {
            if id.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.fallback_template".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        config.defaults.validate()?;
        if let Some(ref level) = config.observability.log_level {
            if !defaults::VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: format!(
                        "must be one of {}",
                        defaults::VALID_LOG_LEVELS.join(", ")
                    ),
                });
            }
        }
        for template in &config.templates {
            if template.id.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "templates.id".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SimConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SimConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut SimConfig, other: &SimConfig) {
        // Engine
        if other.engine.seed.is_some() {
            base.engine.seed = other.engine.seed;
        }
        if other.engine.retention_factor.is_some() {
            base.engine.retention_factor = other.engine.retention_factor;
        }
        if other.engine.degradation_factor.is_some() {
            base.engine.degradation_factor = other.engine.degradation_factor;
        }
        if other.engine.execution_mode.is_some() {
            base.engine.execution_mode = other.engine.execution_mode;
        }
        if other.engine.unknown_template.is_some() {
            base.engine.unknown_template = other.engine.unknown_template;
        }
        if other.engine.fallback_template.is_some() {
            base.engine.fallback_template = other.engine.fallback_template.clone();
        }

        // Cohort defaults
        if other.defaults.initial_yield.is_some() {
            base.defaults.initial_yield = other.defaults.initial_yield;
        }
        if other.defaults.initial_volume.is_some() {
            base.defaults.initial_volume = other.defaults.initial_volume;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }

        // Templates
        if !other.templates.is_empty() {
            base.templates = other.templates.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PROTOSIM_SEED`, `PROTOSIM_EXECUTION_MODE`, etc.
    /// Values that fail to parse are ignored.
    pub(crate) fn apply_env_overrides<F>(config: &mut SimConfig, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("PROTOSIM_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.engine.seed = Some(v);
            }
        }
        if let Some(val) = var("PROTOSIM_EXECUTION_MODE") {
            if let Some(mode) = ExecutionMode::parse(&val) {
                config.engine.execution_mode = Some(mode);
            }
        }
        if let Some(val) = var("PROTOSIM_RETENTION_FACTOR") {
            if let Ok(v) = val.parse::<f64>() {
                config.engine.retention_factor = Some(v);
            }
        }
        if let Some(val) = var("PROTOSIM_DEGRADATION_FACTOR") {
            if let Ok(v) = val.parse::<f64>() {
                config.engine.degradation_factor = Some(v);
            }
        }
        if let Some(val) = var("PROTOSIM_LOG_LEVEL") {
            config.observability.log_level = Some(val.to_ascii_lowercase());
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut SimConfig, cli: &CliOverrides) {
        if let Some(v) = cli.seed {
            config.engine.seed = Some(v);
        }
        if let Some(v) = cli.execution_mode {
            config.engine.execution_mode = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
