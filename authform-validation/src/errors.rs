// Rule failures and engine construction errors

#[cfg(feature = "config")]
use authform_config::ConfigError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single rule failing for a field.
///
/// This is an ordinary outcome of validation, not an exceptional condition;
/// the validator folds it into a [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Field the failure is reported under
    pub field: String,

    /// Message shown next to the field
    pub message: String,

    /// Name of the rule that failed (`notEmpty`, `pattern`, ...)
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while building rule sets, never while validating.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] ConfigError),
}
