use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How iterations are scheduled.
///
/// `Sequential` draws every iteration from one shared stream. `Parallel`
/// gives each iteration its own stream seeded from the master stream and the
/// run index, so it is reproducible but not numerically equal to
/// `Sequential`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}

impl ExecutionMode {
    /// Parse a mode name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Some(Self::Sequential),
            "parallel" => Some(Self::Parallel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

/// What the catalog does with an id it does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UnknownTemplatePolicy {
    /// Report `UnknownTemplate` to the caller.
    #[default]
    Strict,
    /// Substitute the named template and log a warning.
    FallbackTo(String),
}
