//! Integration tests for authform-validation

#[cfg(feature = "config")]
use authform_config::{ConfigService, FileFormat};
use authform_validation::fields::*;
use authform_validation::*;
#[cfg(feature = "config")]
use std::io::Write;

fn registration() -> Validator {
    FormKind::Registration
        .validator(&FormPolicy::default())
        .unwrap()
}

fn login() -> Validator {
    FormKind::Login.validator(&FormPolicy::default()).unwrap()
}

fn valid_registration() -> FieldValues {
    FieldValues::new()
        .with(USERNAME, "ana_01")
        .with(EMAIL, "ana@example.com")
        .with(PHONE, "123456789")
        .with(PASSWORD, "Abc123@")
        .with(CONFIRM_PASSWORD, "Abc123@")
        .with_flag(TERMS_ACCEPTED, true)
}

#[test]
fn test_email_field() {
    let v = registration();

    let ok = v.validate_field(EMAIL, &FieldValues::new().with(EMAIL, "a@b.com"));
    assert!(ok.valid);
    assert!(ok.message.is_empty());

    let bad = v.validate_field(EMAIL, &FieldValues::new().with(EMAIL, "not-an-email"));
    assert!(!bad.valid);
    assert_eq!(bad.message, "Please enter a valid email address");
}

#[test]
fn test_phone_field() {
    let v = registration();
    assert!(!v.validate_field(PHONE, &FieldValues::new().with(PHONE, "12345678")).valid);
    assert!(v.validate_field(PHONE, &FieldValues::new().with(PHONE, "123456789")).valid);
}

#[test]
fn test_password_strength() {
    let v = registration();

    let weak = v.validate_field(PASSWORD, &FieldValues::new().with(PASSWORD, "abc123"));
    assert!(!weak.valid);
    assert!(weak.message.contains("an uppercase letter"));
    assert!(weak.message.contains("a special character"));

    assert!(v.validate_field(PASSWORD, &FieldValues::new().with(PASSWORD, "Abc123@")).valid);
}

#[test]
fn test_password_confirmation() {
    let v = registration();
    let same = FieldValues::new()
        .with(PASSWORD, "Abc123@")
        .with(CONFIRM_PASSWORD, "Abc123@");
    assert!(v.validate_field(CONFIRM_PASSWORD, &same).valid);

    let different = same.clone().with(CONFIRM_PASSWORD, "abc123@");
    let result = v.validate_field(CONFIRM_PASSWORD, &different);
    assert!(!result.valid);
    assert_eq!(result.message, "Passwords do not match");
}

#[test]
fn test_registration_each_rule_failing_alone() {
    let v = registration();
    assert!(v.validate_form(&valid_registration()).form_valid());

    let cases: Vec<(&str, FieldValues)> = vec![
        (USERNAME, valid_registration().with(USERNAME, "")),
        (USERNAME, valid_registration().with(USERNAME, "ana!")),
        (EMAIL, valid_registration().with(EMAIL, "ana@example")),
        (PHONE, valid_registration().with(PHONE, "12345678a")),
        (
            PASSWORD,
            valid_registration()
                .with(PASSWORD, "abc123")
                .with(CONFIRM_PASSWORD, "abc123"),
        ),
        (CONFIRM_PASSWORD, valid_registration().with(CONFIRM_PASSWORD, "Abc123#")),
        (TERMS_ACCEPTED, valid_registration().with_flag(TERMS_ACCEPTED, false)),
    ];

    for (field, values) in cases {
        let report = v.validate_form(&values);
        assert!(!report.form_valid(), "expected {} to fail", field);

        let failing: Vec<&str> = report.failures().map(|r| r.field.as_str()).collect();
        assert_eq!(failing, [field], "only {} should fail", field);
    }
}

#[test]
fn test_long_username_is_valid_by_default() {
    let v = registration();
    let result = v.validate_field(USERNAME, &FieldValues::new().with(USERNAME, "a".repeat(51)));
    assert!(result.valid);
    assert_eq!(result.constraint, None);

    let values = valid_registration().with(USERNAME, "a".repeat(200));
    assert!(v.validate_form(&values).form_valid());
}

#[test]
fn test_login_each_rule_failing_alone() {
    let v = login();
    let valid = FieldValues::new()
        .with(USERNAME, "ana@example.com")
        .with(PASSWORD, "x");
    assert!(v.validate_form(&valid).form_valid());

    let cases = [
        (USERNAME, "notEmpty", valid.clone().with(USERNAME, "")),
        (USERNAME, "loginEmail", valid.clone().with(USERNAME, "ana")),
        (PASSWORD, "notEmpty", valid.clone().with(PASSWORD, "")),
    ];

    for (field, constraint, values) in cases {
        let report = v.validate_form(&values);
        assert!(!report.form_valid());
        let failure = report.first_failure().unwrap();
        assert_eq!(failure.field, field);
        assert_eq!(failure.constraint.as_deref(), Some(constraint));
        assert_eq!(report.failures().count(), 1);
    }
}

#[test]
fn test_login_distinguishes_empty_from_malformed() {
    let v = login();
    let empty = v.validate_field(USERNAME, &FieldValues::new());
    let malformed = v.validate_field(USERNAME, &FieldValues::new().with(USERNAME, "ana"));

    assert_eq!(empty.message, "Please enter your email address");
    assert_eq!(malformed.message, "Please enter a valid email address");
}

#[test]
fn test_login_password_is_not_strength_checked() {
    let v = login();
    let values = FieldValues::new()
        .with(USERNAME, "ana@example.com")
        .with(PASSWORD, "abc");
    assert!(v.validate_form(&values).form_valid());
}

#[test]
fn test_validation_is_idempotent() {
    let v = registration();
    let snapshots = [
        valid_registration(),
        FieldValues::new(),
        valid_registration().with(PASSWORD, "abc123"),
    ];

    for values in &snapshots {
        assert_eq!(v.validate_form(values), v.validate_form(values));
    }
}

#[test]
fn test_missing_values_fail_instead_of_panicking() {
    let report = registration().validate_form(&FieldValues::new());
    assert!(!report.form_valid());
    assert_eq!(report.results().len(), 6);
    // Two blank passwords match each other.
    assert!(report.get(CONFIRM_PASSWORD).unwrap().valid);
    assert!(!report.get(TERMS_ACCEPTED).unwrap().valid);
}

#[test]
fn test_typed_form_round_trip_through_json() {
    let body = r#"{
        "username": "ana_01",
        "email": "ana@example.com",
        "phone": "123456789",
        "password": "Abc123@",
        "confirmPassword": "Abc123@",
        "termsAccepted": true
    }"#;
    let form: RegistrationForm = serde_json::from_str(body).unwrap();
    let report = form.validate_with(&RegistrationForm::KIND.validator(&FormPolicy::default()).unwrap());
    assert!(report.form_valid());

    let decision = SubmitDecision::from_report(RegistrationForm::KIND, &report);
    assert!(decision.allows_submit());
}

#[test]
fn test_blocked_submission_carries_messages() {
    let v = registration();
    let values = valid_registration()
        .with(EMAIL, "bad")
        .with_flag(TERMS_ACCEPTED, false);
    let report = v.validate_form(&values);

    match SubmitDecision::from_report(FormKind::Registration, &report) {
        SubmitDecision::Block { errors } => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, [EMAIL, TERMS_ACCEPTED]);
        }
        other => panic!("expected block, got {:?}", other),
    }
}

#[cfg(feature = "config")]
#[test]
fn test_policy_from_toml_file_drives_rules() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "phone_digits = 10").unwrap();
    writeln!(file, "password_min_length = 8").unwrap();

    let service = ConfigService::builder()
        .add_file(file.path(), FileFormat::Toml)
        .build()
        .unwrap();
    let policy = FormPolicy::from_config(service.manager()).unwrap();
    let v = FormKind::Registration.validator(&policy).unwrap();

    assert!(v.validate_field(PHONE, &FieldValues::new().with(PHONE, "1234567890")).valid);
    let short = v.validate_field(PASSWORD, &FieldValues::new().with(PASSWORD, "Abc123@"));
    assert_eq!(short.message, "Password must have at least 8 characters");
}

#[cfg(feature = "config")]
#[test]
fn test_policy_from_dotenv_file() {
    let mut file = tempfile::Builder::new().suffix(".env").tempfile().unwrap();
    writeln!(file, "AFVALTEST_PASSWORD_MIN_LENGTH=8").unwrap();
    writeln!(file, "AFVALTEST_USERNAME_MAX_LENGTH=12").unwrap();

    let service = ConfigService::builder()
        .with_prefix("AFVALTEST")
        .load_dotenv(Some(file.path().to_path_buf()))
        .build()
        .unwrap();
    unsafe {
        std::env::remove_var("AFVALTEST_PASSWORD_MIN_LENGTH");
        std::env::remove_var("AFVALTEST_USERNAME_MAX_LENGTH");
    }

    let policy = FormPolicy::from_config(service.manager()).unwrap();
    assert_eq!(policy.password_min_length, 8);
    assert_eq!(policy.username_max_length, Some(12));

    let v = FormKind::Registration.validator(&policy).unwrap();
    let long = v.validate_field(USERNAME, &FieldValues::new().with(USERNAME, "a".repeat(13)));
    assert_eq!(long.message, "Username must be at most 12 characters");
}
