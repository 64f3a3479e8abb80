// Single source of truth for engine constants.

/// Identifier of the built-in plasmid prep template.
pub const DEFAULT_TEMPLATE_ID: &str = "template-crispr-plasmid-prep-v1";

// --- Per-step sample physics ---
/// Yield multiplier applied to a sample on each step it passes (5% loss).
pub const DEFAULT_RETENTION_FACTOR: f64 = 0.95;
/// Quality multiplier applied to every active sample on every step.
pub const DEFAULT_DEGRADATION_FACTOR: f64 = 0.98;
/// Quality factor of a freshly prepared sample.
pub const INITIAL_QUALITY_FACTOR: f64 = 1.0;

// --- Cohort defaults ---
pub const DEFAULT_INITIAL_YIELD_MG: f64 = 100.0;
pub const DEFAULT_INITIAL_VOLUME_ML: f64 = 50.0;

// --- Identifiers ---
pub const SIMULATION_ID_PREFIX: &str = "sim-";
pub const SAMPLE_ID_PREFIX: &str = "sample-";

// --- Observability ---
/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "PROTOSIM_LOG";
/// Filter used when `PROTOSIM_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "protosim=info";
