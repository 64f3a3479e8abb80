//! ProtosimErrorCode trait for the caller boundary.

/// Stable error code strings for callers that cannot match on Rust enums
/// (the dashboard, the CLI exit path).
pub trait ProtosimErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_TEMPLATE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted caller string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_TEMPLATE: &str = "UNKNOWN_TEMPLATE";
pub const INVALID_SAMPLE_COUNT: &str = "INVALID_SAMPLE_COUNT";
pub const INVALID_RUN_COUNT: &str = "INVALID_RUN_COUNT";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const SERIALIZATION_FAILED: &str = "SERIALIZATION_FAILED";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
