//! Protocol catalog errors.

use super::error_code::{self, ProtosimErrorCode};

/// Errors raised while registering protocol templates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("template already registered: {template_id}")]
    DuplicateTemplate { template_id: String },

    #[error("template {template_id} has no steps")]
    EmptyTemplate { template_id: String },

    #[error("invalid step {step} in template {template_id}: {message}")]
    InvalidStep {
        template_id: String,
        step: String,
        message: String,
    },
}

impl ProtosimErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
