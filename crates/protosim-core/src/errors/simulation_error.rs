//! Simulation request errors.
//!
//! Request errors are reported before any random draw is made.

use super::error_code::{self, ProtosimErrorCode};
use super::{CatalogError, ConfigError};

/// Errors returned by a simulation request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("unknown template: {template_id}")]
    UnknownTemplate { template_id: String },

    #[error("sample count must be positive, got {num_samples}")]
    InvalidSampleCount { num_samples: usize },

    #[error("run count must be positive, got {num_runs}")]
    InvalidRunCount { num_runs: usize },

    #[error("invalid parameter {field}: {message}")]
    InvalidParameter { field: String, message: String },

    #[error("result serialization failed: {message}")]
    SerializationFailed { message: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ProtosimErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTemplate { .. } => error_code::UNKNOWN_TEMPLATE,
            Self::InvalidSampleCount { .. } => error_code::INVALID_SAMPLE_COUNT,
            Self::InvalidRunCount { .. } => error_code::INVALID_RUN_COUNT,
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::SerializationFailed { .. } => error_code::SERIALIZATION_FAILED,
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
