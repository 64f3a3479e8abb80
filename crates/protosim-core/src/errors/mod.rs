//! Error handling for protosim.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod simulation_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::ProtosimErrorCode;
pub use simulation_error::SimulationError;

/// Convenience alias used across the engine.
pub type SimResult<T> = Result<T, SimulationError>;
