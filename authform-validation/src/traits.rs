// Typed form inputs

use crate::{FieldValues, FormKind, FormValidationReport, Validator};

/// A typed form that can be flattened into a [`FieldValues`] snapshot.
pub trait FormInput {
    /// Which built-in rule set applies.
    const KIND: FormKind;

    fn to_values(&self) -> FieldValues;

    /// Validate this input with `validator`.
    fn validate_with(&self, validator: &Validator) -> FormValidationReport {
        validator.validate_form(&self.to_values())
    }
}
