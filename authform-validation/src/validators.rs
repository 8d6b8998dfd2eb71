// Built-in rule constructors

use crate::FieldRule;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Loose `local@domain.tld` shape accepted on the sign-in form.
static LOGIN_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

/// Default special characters required by the registration password rule.
pub const DEFAULT_PASSWORD_SPECIALS: &str = "@#$%^&+=";

/// Value must contain something other than whitespace.
pub struct NotEmpty;

impl NotEmpty {
    pub fn is_valid(value: &str) -> bool {
        !value.trim().is_empty()
    }

    pub fn rule(message: &'static str) -> FieldRule {
        FieldRule::new("notEmpty", Self::is_valid, message)
    }
}

/// Sign-in identifier: trimmed value shaped like an email address.
pub struct IsLoginEmail;

impl IsLoginEmail {
    pub fn is_valid(value: &str) -> bool {
        LOGIN_EMAIL_REGEX.is_match(&value.trim().to_lowercase())
    }

    pub fn rule(message: &'static str) -> FieldRule {
        FieldRule::new("loginEmail", Self::is_valid, message)
    }
}

/// Strict address format used on registration.
pub struct IsEmail;

impl IsEmail {
    pub fn is_valid(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }

    pub fn rule(message: &'static str) -> FieldRule {
        FieldRule::new("isEmail", Self::is_valid, message)
    }
}

/// Letters, digits, `.`, `_` and `-`; at least one character.
pub struct IsUsername;

impl IsUsername {
    pub fn is_valid(value: &str) -> bool {
        USERNAME_REGEX.is_match(value)
    }

    pub fn rule(message: &'static str) -> FieldRule {
        FieldRule::new("username", Self::is_valid, message)
    }
}

/// At most N characters (not bytes).
pub struct MaxLength(pub usize);

impl MaxLength {
    pub fn is_valid(&self, value: &str) -> bool {
        value.chars().count() <= self.0
    }

    pub fn rule(self, field_label: &str) -> FieldRule {
        let message = format!("{} must be at most {} characters", field_label, self.0);
        FieldRule::new("maxLength", move |v| self.is_valid(v), message)
    }
}

/// Custom regex rule.
pub struct Matches(pub Regex);

impl Matches {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self(Regex::new(pattern)?))
    }

    /// Exactly `count` ASCII digits, nothing else.
    pub fn digits(count: usize) -> Result<Self, regex::Error> {
        Self::new(&format!("^[0-9]{{{}}}$", count))
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn rule(self, constraint: &str, message: impl Into<String>) -> FieldRule {
        let message: String = message.into();
        FieldRule::new(constraint, move |v| self.is_valid(v), message)
    }
}

/// Value must equal another field byte for byte.
pub struct EqualsField(pub &'static str);

impl EqualsField {
    pub fn rule(self, message: &'static str) -> FieldRule {
        let other = self.0;
        FieldRule::cross("equalsField", move |v, all| v == all.get(other), message)
    }
}

/// Value must differ from another field.
pub struct DiffersFrom(pub &'static str);

impl DiffersFrom {
    pub fn rule(self, message: &'static str) -> FieldRule {
        let other = self.0;
        FieldRule::cross("differsFrom", move |v, all| v != all.get(other), message)
    }
}

/// A checkbox flag must be set.
pub struct FlagSet(pub &'static str);

impl FlagSet {
    pub fn rule(self, message: &'static str) -> FieldRule {
        let flag = self.0;
        FieldRule::cross("flagSet", move |_, all| all.flag(flag), message)
    }
}

/// One requirement class a password may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    MinLength(usize),
    Digit,
    Lowercase,
    Uppercase,
    Special(String),
    NoWhitespace,
    SingleLine,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::MinLength(n) => write!(f, "at least {} characters", n),
            Requirement::Digit => f.write_str("a number"),
            Requirement::Lowercase => f.write_str("a lowercase letter"),
            Requirement::Uppercase => f.write_str("an uppercase letter"),
            Requirement::Special(set) => write!(f, "a special character ({})", set),
            Requirement::NoWhitespace => f.write_str("no spaces"),
            Requirement::SingleLine => f.write_str("no line breaks"),
        }
    }
}

/// Password strength: length plus one character from each class.
///
/// Length is counted in UTF-16 code units, the way browsers measure an
/// input's value, so an emoji counts as two. Letter classes are ASCII,
/// matching `[a-z]`/`[A-Z]`. Line terminators (`\n`, `\r`, U+2028, U+2029)
/// are never accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub min_length: usize,
    pub special_chars: String,
    pub allow_whitespace: bool,
}

impl Default for PasswordStrength {
    fn default() -> Self {
        Self {
            min_length: 6,
            special_chars: DEFAULT_PASSWORD_SPECIALS.to_string(),
            allow_whitespace: true,
        }
    }
}

impl PasswordStrength {
    /// Requirements `value` does not meet, in a fixed order.
    pub fn missing(&self, value: &str) -> Vec<Requirement> {
        let mut missing = Vec::new();

        if value.encode_utf16().count() < self.min_length {
            missing.push(Requirement::MinLength(self.min_length));
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            missing.push(Requirement::Digit);
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            missing.push(Requirement::Lowercase);
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            missing.push(Requirement::Uppercase);
        }
        if !value.chars().any(|c| self.special_chars.contains(c)) {
            missing.push(Requirement::Special(self.special_chars.clone()));
        }
        if !self.allow_whitespace {
            if value.chars().any(char::is_whitespace) {
                missing.push(Requirement::NoWhitespace);
            }
        } else if value.chars().any(is_line_terminator) {
            missing.push(Requirement::SingleLine);
        }

        missing
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.missing(value).is_empty()
    }

    /// "Password must have at least 6 characters, an uppercase letter"
    pub fn describe(missing: &[Requirement]) -> String {
        let parts: Vec<String> = missing.iter().map(ToString::to_string).collect();
        format!("Password must have {}", parts.join(", "))
    }

    pub fn rule(self) -> FieldRule {
        FieldRule::with_check("passwordStrength", move |value, _| {
            let missing = self.missing(value);
            if missing.is_empty() {
                Ok(())
            } else {
                Err(Self::describe(&missing))
            }
        })
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
