// Tunable parameters of the built-in rule sets

use crate::validators::DEFAULT_PASSWORD_SPECIALS;
#[cfg(feature = "config")]
use authform_config::{
    ConfigError, ConfigManager, ConfigService, ConfigValidator, Validate,
};
#[cfg(feature = "config")]
use authform_log::info;
use serde::{Deserialize, Serialize};

/// Numbers and character sets the form rule sets are built from.
///
/// Defaults reproduce the stock rules: 9-digit phone numbers, usernames of
/// any length, 6-character registration passwords with one of `@#$%^&+=`,
/// and 8-character password changes that also accept `!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPolicy {
    pub phone_digits: usize,
    /// Optional cap on registration usernames; no cap when unset.
    pub username_max_length: Option<usize>,
    pub password_min_length: usize,
    pub password_special_chars: String,
    pub change_password_min_length: usize,
    pub change_password_special_chars: String,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            phone_digits: 9,
            username_max_length: None,
            password_min_length: 6,
            password_special_chars: DEFAULT_PASSWORD_SPECIALS.to_string(),
            change_password_min_length: 8,
            change_password_special_chars: "@#$%^&+=!".to_string(),
        }
    }
}

#[cfg(feature = "config")]
impl FormPolicy {
    /// Read the policy from loaded configuration; missing keys keep defaults.
    pub fn from_config(manager: &ConfigManager) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let policy = Self {
            phone_digits: manager.get_parsed_or("phone_digits", defaults.phone_digits)?,
            username_max_length: if manager.has("username_max_length") {
                Some(manager.get_parsed("username_max_length")?)
            } else {
                defaults.username_max_length
            },
            password_min_length: manager
                .get_parsed_or("password_min_length", defaults.password_min_length)?,
            password_special_chars: manager
                .get_parsed_or("password_special_chars", defaults.password_special_chars)?,
            change_password_min_length: manager.get_parsed_or(
                "change_password_min_length",
                defaults.change_password_min_length,
            )?,
            change_password_special_chars: manager.get_parsed_or(
                "change_password_special_chars",
                defaults.change_password_special_chars,
            )?,
        };

        policy.validate()?;
        info!(
            target: "authform::policy",
            "form policy loaded: phone_digits={} password_min_length={}",
            policy.phone_digits,
            policy.password_min_length
        );
        Ok(policy)
    }

    /// Load from `.env` and `AUTHFORM_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let service = ConfigService::builder().load_dotenv(None).build()?;
        Self::from_config(service.manager())
    }
}

#[cfg(feature = "config")]
impl Validate for FormPolicy {
    fn validate(&self) -> authform_config::Result<()> {
        ConfigValidator::in_range(self.phone_digits, 1, 20, "phone_digits")?;
        if let Some(max) = self.username_max_length {
            ConfigValidator::in_range(max, 1, 255, "username_max_length")?;
        }
        ConfigValidator::in_range(self.password_min_length, 1, 128, "password_min_length")?;
        ConfigValidator::in_range(
            self.change_password_min_length,
            1,
            128,
            "change_password_min_length",
        )?;
        ConfigValidator::not_empty(&self.password_special_chars, "password_special_chars")?;
        ConfigValidator::ascii_punctuation(&self.password_special_chars, "password_special_chars")?;
        ConfigValidator::not_empty(
            &self.change_password_special_chars,
            "change_password_special_chars",
        )?;
        ConfigValidator::ascii_punctuation(
            &self.change_password_special_chars,
            "change_password_special_chars",
        )
    }
}
