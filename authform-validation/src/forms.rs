// Rule sets and typed inputs for the login, registration and
// password-change forms

use crate::validators::*;
use crate::{FieldValues, FormError, FormInput, FormPolicy, RuleRegistry, Validator};
use serde::{Deserialize, Serialize};

/// Field names shared by the forms and their markup.
pub mod fields {
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const TERMS_ACCEPTED: &str = "termsAccepted";
    pub const CURRENT_PASSWORD: &str = "currentPassword";
    pub const NEW_PASSWORD: &str = "newPassword";
    pub const CONFIRM_NEW_PASSWORD: &str = "confirmNewPassword";
}

use fields::*;

/// The forms with built-in rule sets.
///
/// Login and registration deliberately use different password policies:
/// signing in only needs a non-empty password, registering enforces strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    Login,
    Registration,
    ChangePassword,
}

impl FormKind {
    pub fn name(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Registration => "registration",
            FormKind::ChangePassword => "changePassword",
        }
    }

    pub fn rules(&self, policy: &FormPolicy) -> Result<RuleRegistry, FormError> {
        match self {
            FormKind::Login => Ok(login_rules()),
            FormKind::Registration => registration_rules(policy),
            FormKind::ChangePassword => Ok(change_password_rules(policy)),
        }
    }

    pub fn validator(&self, policy: &FormPolicy) -> Result<Validator, FormError> {
        Ok(Validator::new(self.rules(policy)?))
    }
}

/// Sign-in: email-shaped username, any non-blank password.
pub fn login_rules() -> RuleRegistry {
    RuleRegistry::new()
        .rule(USERNAME, NotEmpty::rule("Please enter your email address"))
        .rule(USERNAME, IsLoginEmail::rule("Please enter a valid email address"))
        .rule(PASSWORD, NotEmpty::rule("Please enter your password"))
}

/// Account creation.
pub fn registration_rules(policy: &FormPolicy) -> Result<RuleRegistry, FormError> {
    let phone = Matches::digits(policy.phone_digits)?;
    let strength = PasswordStrength {
        min_length: policy.password_min_length,
        special_chars: policy.password_special_chars.clone(),
        allow_whitespace: true,
    };

    let mut registry = RuleRegistry::new().rule(
        USERNAME,
        IsUsername::rule("Only letters, digits, '.', '_' and '-' are allowed"),
    );
    if let Some(max) = policy.username_max_length {
        registry.register(USERNAME, MaxLength(max).rule("Username"));
    }

    Ok(registry
        .rule(EMAIL, IsEmail::rule("Please enter a valid email address"))
        .rule(
            PHONE,
            phone.rule(
                "phoneDigits",
                format!("Phone number must be exactly {} digits", policy.phone_digits),
            ),
        )
        .rule(PASSWORD, strength.rule())
        .cross_rule(CONFIRM_PASSWORD, EqualsField(PASSWORD).rule("Passwords do not match"))
        .cross_rule(
            TERMS_ACCEPTED,
            FlagSet(TERMS_ACCEPTED).rule("You must accept the terms and conditions"),
        ))
}

/// Changing the password of a signed-in account.
pub fn change_password_rules(policy: &FormPolicy) -> RuleRegistry {
    let strength = PasswordStrength {
        min_length: policy.change_password_min_length,
        special_chars: policy.change_password_special_chars.clone(),
        allow_whitespace: false,
    };

    RuleRegistry::new()
        .rule(CURRENT_PASSWORD, NotEmpty::rule("Current password is required"))
        .rule(NEW_PASSWORD, NotEmpty::rule("New password is required"))
        .rule(NEW_PASSWORD, strength.rule())
        .cross_rule(
            NEW_PASSWORD,
            DiffersFrom(CURRENT_PASSWORD)
                .rule("New password must be different from the current one"),
        )
        .rule(
            CONFIRM_NEW_PASSWORD,
            NotEmpty::rule("Please confirm the new password"),
        )
        .cross_rule(
            CONFIRM_NEW_PASSWORD,
            EqualsField(NEW_PASSWORD).rule("Passwords do not match"),
        )
}

/// Sign-in form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl FormInput for LoginForm {
    const KIND: FormKind = FormKind::Login;

    // Leading/trailing spaces are not part of what the user meant to type.
    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with(USERNAME, self.username.trim())
            .with(PASSWORD, self.password.trim())
    }
}

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl FormInput for RegistrationForm {
    const KIND: FormKind = FormKind::Registration;

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with(USERNAME, self.username.as_str())
            .with(EMAIL, self.email.as_str())
            .with(PHONE, self.phone.as_str())
            .with(PASSWORD, self.password.as_str())
            .with(CONFIRM_PASSWORD, self.confirm_password.as_str())
            .with_flag(TERMS_ACCEPTED, self.terms_accepted)
    }
}

/// Password-change form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl FormInput for ChangePasswordForm {
    const KIND: FormKind = FormKind::ChangePassword;

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with(CURRENT_PASSWORD, self.current_password.as_str())
            .with(NEW_PASSWORD, self.new_password.as_str())
            .with(CONFIRM_NEW_PASSWORD, self.confirm_new_password.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> FieldValues {
        RegistrationForm {
            username: "ana.maria".to_string(),
            email: "ana@example.com".to_string(),
            phone: "612345678".to_string(),
            password: "Abc123@".to_string(),
            confirm_password: "Abc123@".to_string(),
            terms_accepted: true,
        }
        .to_values()
    }

    fn registration() -> Validator {
        FormKind::Registration
            .validator(&FormPolicy::default())
            .unwrap()
    }

    #[test]
    fn test_registration_field_order() {
        let rules = registration_rules(&FormPolicy::default()).unwrap();
        assert_eq!(
            rules.fields(),
            [USERNAME, EMAIL, PHONE, PASSWORD, CONFIRM_PASSWORD, TERMS_ACCEPTED]
        );
    }

    #[test]
    fn test_valid_registration_passes() {
        let report = registration().validate_form(&valid_registration());
        assert!(report.form_valid(), "{:?}", report);
    }

    #[test]
    fn test_username_rules() {
        let v = registration();
        let bad = valid_registration().with(USERNAME, "ana maria");
        let result = v.validate_field(USERNAME, &bad);
        assert_eq!(result.message, "Only letters, digits, '.', '_' and '-' are allowed");

        let long = valid_registration().with(USERNAME, "a".repeat(51));
        assert!(v.validate_field(USERNAME, &long).valid);
    }

    #[test]
    fn test_username_cap_is_opt_in() {
        let policy = FormPolicy {
            username_max_length: Some(50),
            ..FormPolicy::default()
        };
        let v = FormKind::Registration.validator(&policy).unwrap();

        let long = valid_registration().with(USERNAME, "a".repeat(51));
        let result = v.validate_field(USERNAME, &long);
        assert_eq!(result.constraint.as_deref(), Some("maxLength"));
        assert_eq!(result.message, "Username must be at most 50 characters");
        assert!(v.validate_field(USERNAME, &valid_registration()).valid);
    }

    #[test]
    fn test_phone_digits_follow_policy() {
        let policy = FormPolicy {
            phone_digits: 10,
            ..FormPolicy::default()
        };
        let v = FormKind::Registration.validator(&policy).unwrap();

        let nine = FieldValues::new().with(PHONE, "123456789");
        let ten = FieldValues::new().with(PHONE, "1234567890");
        assert!(!v.validate_field(PHONE, &nine).valid);
        assert_eq!(
            v.validate_field(PHONE, &nine).message,
            "Phone number must be exactly 10 digits"
        );
        assert!(v.validate_field(PHONE, &ten).valid);
    }

    #[test]
    fn test_terms_flag() {
        let v = registration();
        let unchecked = valid_registration().with_flag(TERMS_ACCEPTED, false);
        let result = v.validate_field(TERMS_ACCEPTED, &unchecked);
        assert!(!result.valid);
        assert_eq!(result.message, "You must accept the terms and conditions");
    }

    #[test]
    fn test_login_trims_input() {
        let form = LoginForm {
            username: "  ana@example.com ".to_string(),
            password: "   ".to_string(),
            remember_me: false,
        };
        let v = FormKind::Login.validator(&FormPolicy::default()).unwrap();
        let report = v.validate_form(&form.to_values());

        assert!(report.get(USERNAME).unwrap().valid);
        assert_eq!(report.get(PASSWORD).unwrap().message, "Please enter your password");
    }

    #[test]
    fn test_change_password_rules() {
        let v = FormKind::ChangePassword
            .validator(&FormPolicy::default())
            .unwrap();
        let form = ChangePasswordForm {
            current_password: "OldPass1!".to_string(),
            new_password: "NewPass1!".to_string(),
            confirm_new_password: "NewPass1!".to_string(),
        };
        assert!(v.validate_form(&form.to_values()).form_valid());

        let same = ChangePasswordForm {
            new_password: "OldPass1!".to_string(),
            confirm_new_password: "OldPass1!".to_string(),
            ..form.clone()
        };
        let result = v.validate_field(NEW_PASSWORD, &same.to_values());
        assert_eq!(result.constraint.as_deref(), Some("differsFrom"));

        let short = ChangePasswordForm {
            new_password: "Ab1!".to_string(),
            confirm_new_password: "Ab1!".to_string(),
            ..form
        };
        let result = v.validate_field(NEW_PASSWORD, &short.to_values());
        assert_eq!(result.message, "Password must have at least 8 characters");
    }

    #[test]
    fn test_form_kind_serde_names() {
        let kind: FormKind = serde_json::from_str("\"changePassword\"").unwrap();
        assert_eq!(kind, FormKind::ChangePassword);
        assert_eq!(kind.name(), "changePassword");
    }
}
