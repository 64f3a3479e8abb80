use serde::{Deserialize, Serialize};

use crate::models::ProtocolStep;

/// A user-defined protocol template, `[[templates]]` in TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateConfig {
    pub id: String,
    #[serde(default)]
    pub steps: Vec<ProtocolStep>,
}
