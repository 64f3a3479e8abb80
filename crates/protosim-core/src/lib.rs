//! # protosim-core
//!
//! Foundation crate for the protocol simulation engine.
//! Defines the data model, errors, config, tracing setup, and constants.
//! The engine crate and the CLI both depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::SimConfig;
pub use errors::{CatalogError, ConfigError, ProtosimErrorCode, SimResult, SimulationError};
pub use models::{
    AggregatedMetrics, ExecutionMode, IterationResult, ProtocolStep, Sample, SampleStatus,
    SimulationParams, SimulationResult, StepOutcome, UnknownTemplatePolicy,
};
