// Runs a rule registry against value snapshots

use crate::{FieldValues, FormValidationReport, RuleRegistry, ValidationResult};
use authform_log::{debug, trace};
use std::sync::Arc;

/// UI event that prompted a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Keystroke in a text input
    Input,
    /// Checkbox or select changed
    Change,
    /// Focus left the field
    Blur,
    /// Form submission
    Submit,
}

/// Stateless validator over a fixed [`RuleRegistry`].
///
/// Cloning shares the registry. Validation never mutates anything, so the same
/// validator can check independent snapshots from any thread.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
}

impl Validator {
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// First failing rule for `field`, or a valid result.
    ///
    /// A field with no registered rules is valid.
    pub fn validate_field(&self, field: &str, values: &FieldValues) -> ValidationResult {
        for rule in self.registry.rules_for(field) {
            if let Err(error) = rule.check(field, values) {
                trace!(
                    target: "authform::validator",
                    "{} failed {}",
                    field,
                    error.constraint
                );
                return ValidationResult::invalid(error);
            }
        }
        ValidationResult::valid(field)
    }

    /// Validate every registered field.
    pub fn validate_form(&self, values: &FieldValues) -> FormValidationReport {
        let results = self
            .registry
            .fields()
            .iter()
            .map(|field| self.validate_field(field, values))
            .collect();

        let report = FormValidationReport::new(results);
        debug!(
            target: "authform::validator",
            "form validated: {} fields, {} failing",
            report.results().len(),
            report.failures().count()
        );
        report
    }

    /// Revalidate `field` in response to `event`.
    ///
    /// Leaving a field that is still blank yields `None` so an untouched input
    /// is not flagged before the user typed anything.
    pub fn on_event(
        &self,
        field: &str,
        event: FieldEvent,
        values: &FieldValues,
    ) -> Option<ValidationResult> {
        match event {
            FieldEvent::Blur if values.get(field).trim().is_empty() => None,
            FieldEvent::Input | FieldEvent::Change | FieldEvent::Blur | FieldEvent::Submit => {
                Some(self.validate_field(field, values))
            }
        }
    }
}
