//! Configuration system for protosim.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod cohort_config;
pub mod defaults;
pub mod engine_config;
pub mod observability_config;
pub mod sim_config;
pub mod template_config;
pub mod validation;

pub use cohort_config::CohortConfig;
pub use engine_config::{EngineConfig, UnknownTemplateMode};
pub use observability_config::ObservabilityConfig;
pub use sim_config::{CliOverrides, SimConfig};
pub use template_config::TemplateConfig;
pub use validation::{check_quantity, check_unit_factor};
