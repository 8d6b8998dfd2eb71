// authform - validation for authentication forms
//
// Facade over the workspace crates: the validation engine is re-exported at
// the root, logging and configuration are available as modules.

pub use authform_validation::*;

pub use authform_log;

#[cfg(feature = "config")]
pub use authform_config;

/// Build the validator for `kind` from the policy in `.env` and `AUTHFORM_*`
/// environment variables.
#[cfg(feature = "config")]
pub fn validator_from_env(kind: FormKind) -> Result<Validator, FormError> {
    let policy = FormPolicy::from_env()?;
    kind.validator(&policy)
}

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FieldEvent,
        FieldRule,
        FieldValues,
        FormInput,
        FormKind,
        FormPolicy,
        FormValidationReport,
        PasswordVisibility,
        RuleRegistry,
        StatusBanner,
        SubmitDecision,
        ValidationResult,
        Validator,
        fields,
    };
}
