// Compiled defaults for every config field.

pub use crate::constants::{
    DEFAULT_DEGRADATION_FACTOR, DEFAULT_INITIAL_VOLUME_ML, DEFAULT_INITIAL_YIELD_MG,
    DEFAULT_RETENTION_FACTOR, DEFAULT_TEMPLATE_ID,
};

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "protosim.toml";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
