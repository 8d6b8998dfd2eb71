//! Fuzz target for the form validation engine.
//!
//! Arbitrary snapshots must never panic, and validating the same snapshot
//! twice must produce the same report.

#![no_main]

use arbitrary::Arbitrary;
use authform_validation::{FieldValues, FormKind, FormPolicy, StatusBanner};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzForm {
    text: Vec<(String, String)>,
    flags: Vec<(String, bool)>,
    phone_digits: u8,
    query: String,
}

fuzz_target!(|data: FuzzForm| {
    let mut values: FieldValues = data.text.into_iter().collect();
    for (field, checked) in data.flags {
        values.set_flag(field, checked);
    }

    let policy = FormPolicy {
        phone_digits: usize::from(data.phone_digits % 20) + 1,
        ..FormPolicy::default()
    };

    for kind in [FormKind::Login, FormKind::Registration, FormKind::ChangePassword] {
        let Ok(validator) = kind.validator(&policy) else {
            continue;
        };
        let first = validator.validate_form(&values);
        let second = validator.validate_form(&values);
        assert_eq!(first, second);
        assert_eq!(first.form_valid(), first.failures().next().is_none());
    }

    let _ = StatusBanner::from_query(&data.query);
});
