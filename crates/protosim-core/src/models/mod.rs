//! Plain value types flowing through the simulation.
//!
//! Steps and templates are immutable inputs; samples are the only mutable
//! state and live for exactly one iteration. Everything the caller receives
//! is serializable.

pub mod aggregated_metrics;
pub mod execution;
pub mod iteration_result;
pub mod protocol_step;
pub mod sample;
pub mod simulation_params;
pub mod simulation_result;
pub mod step_outcome;

pub use aggregated_metrics::AggregatedMetrics;
pub use execution::{ExecutionMode, UnknownTemplatePolicy};
pub use iteration_result::IterationResult;
pub use protocol_step::ProtocolStep;
pub use sample::{Sample, SampleStatus};
pub use simulation_params::SimulationParams;
pub use simulation_result::SimulationResult;
pub use step_outcome::StepOutcome;
