// Validation outcomes

use crate::ValidationError;
use serde::Serialize;

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub field: String,
    pub valid: bool,
    /// Empty when `valid`
    pub message: String,
    /// Name of the failing rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl ValidationResult {
    pub fn valid(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            valid: true,
            message: String::new(),
            constraint: None,
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            field: error.field,
            valid: false,
            message: error.message,
            constraint: Some(error.constraint),
        }
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self::invalid(error)
    }
}

/// Every field's result for one snapshot, plus the combined verdict.
///
/// Always rebuilt from scratch; `form_valid` is true only when every result
/// (single-field, cross-field and flag rules alike) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationReport {
    form_valid: bool,
    results: Vec<ValidationResult>,
}

impl FormValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        let form_valid = results.iter().all(|r| r.valid);
        Self {
            form_valid,
            results,
        }
    }

    pub fn form_valid(&self) -> bool {
        self.form_valid
    }

    /// Results in field registration order.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn get(&self, field: &str) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field == field)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    pub fn first_failure(&self) -> Option<&ValidationResult> {
        self.failures().next()
    }

    /// `{ "formValid": bool, "errors": [{ field, message, constraint }] }`, failing fields only.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "formValid": self.form_valid,
            "errors": self.failures().map(|r| {
                serde_json::json!({
                    "field": r.field,
                    "message": r.message,
                    "constraint": r.constraint,
                })
            }).collect::<Vec<_>>()
        })
    }
}
