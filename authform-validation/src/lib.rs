//! Form validation engine for authentication pages.
//!
//! Validation is a pure function of a [`FieldValues`] snapshot and a fixed
//! [`RuleRegistry`]: values in, [`FormValidationReport`] out. Nothing reads or
//! writes the page; the [`presenter`] helpers describe what a UI layer should
//! do with a report.
//!
//! # Examples
//!
//! ## Built-in forms
//!
//! ```
//! use authform_validation::{FieldValues, FormKind, FormPolicy};
//!
//! let validator = FormKind::Registration
//!     .validator(&FormPolicy::default())
//!     .unwrap();
//!
//! let values = FieldValues::new()
//!     .with("username", "ana.maria")
//!     .with("email", "ana@example.com")
//!     .with("phone", "612345678")
//!     .with("password", "Abc123@")
//!     .with("confirmPassword", "Abc123@")
//!     .with_flag("termsAccepted", true);
//!
//! assert!(validator.validate_form(&values).form_valid());
//!
//! let phone = validator.validate_field("phone", &values.clone().with("phone", "12345678"));
//! assert!(!phone.valid);
//! assert_eq!(phone.message, "Phone number must be exactly 9 digits");
//! ```
//!
//! ## Custom rules
//!
//! ```
//! use authform_validation::{FieldRule, FieldValues, NotEmpty, RuleRegistry, Validator};
//!
//! let registry = RuleRegistry::new()
//!     .rule("nickname", NotEmpty::rule("Pick a nickname"))
//!     .rule(
//!         "nickname",
//!         FieldRule::new("noAdmin", |v| !v.eq_ignore_ascii_case("admin"), "Reserved name"),
//!     );
//! let validator = Validator::new(registry);
//!
//! let result = validator.validate_field("nickname", &FieldValues::new().with("nickname", "Admin"));
//! assert_eq!(result.message, "Reserved name");
//! ```

mod errors;
mod forms;
pub mod page;
mod policy;
pub mod presenter;
mod report;
mod rules;
mod traits;
mod validator;
mod validators;
mod values;

pub use errors::*;
pub use forms::*;
pub use policy::*;
pub use presenter::{PasswordVisibility, StatusBanner, SubmitDecision};
pub use report::*;
pub use rules::*;
pub use traits::*;
pub use validator::*;
pub use validators::*;
pub use values::*;
