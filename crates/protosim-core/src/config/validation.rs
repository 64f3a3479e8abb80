//! Field checks shared by config validation and the engine constructors.

use crate::errors::ConfigError;

/// Factors are multipliers that may not grow a quantity or zero it out.
pub fn check_unit_factor(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be in (0.0, 1.0], got {value}"),
        })
    }
}

pub fn check_quantity(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be finite and >= 0, got {value}"),
        })
    }
}
