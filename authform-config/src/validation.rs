// Checks applied to loaded configuration values

use crate::{ConfigError, Result};

/// Implemented by settings structs that must be checked after loading.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reusable checks for `Validate` implementations.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display,
    {
        if value < min || value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between {} and {}, got {}",
                field, min, max, value
            )));
        }
        Ok(())
    }

    /// Every character must be printable ASCII punctuation.
    pub fn ascii_punctuation(value: &str, field: &str) -> Result<()> {
        if let Some(bad) = value.chars().find(|c| !c.is_ascii_punctuation()) {
            return Err(ConfigError::ValidationError(format!(
                "{} may only contain ASCII punctuation, found {:?}",
                field, bad
            )));
        }
        Ok(())
    }
}
