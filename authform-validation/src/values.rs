// Snapshot of the values a form currently holds

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current input of one form, owned by the caller and passed in per call.
///
/// Text inputs and checkbox flags live in separate maps. Reads never fail:
/// an absent text value is `""` and an absent flag is `false`, which makes
/// the corresponding required/format rules fail instead of the lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    #[serde(default)]
    text: HashMap<String, String>,
    #[serde(default)]
    flags: HashMap<String, bool>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder form of [`set_flag`](Self::set_flag).
    pub fn with_flag(mut self, field: impl Into<String>, checked: bool) -> Self {
        self.set_flag(field, checked);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.text.insert(field.into(), value.into());
    }

    pub fn set_flag(&mut self, field: impl Into<String>, checked: bool) {
        self.flags.insert(field.into(), checked);
    }

    /// Text value of `field`, `""` when absent.
    pub fn get(&self, field: &str) -> &str {
        self.text.get(field).map(String::as_str).unwrap_or("")
    }

    /// Checkbox state of `field`, `false` when absent.
    pub fn flag(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.text.contains_key(field) || self.flags.contains_key(field)
    }

    /// Drop every value, as after a successful submission.
    pub fn clear(&mut self) {
        self.text.clear();
        self.flags.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (field, value) in iter {
            values.set(field, value);
        }
        values
    }
}

impl From<HashMap<String, String>> for FieldValues {
    fn from(text: HashMap<String, String>) -> Self {
        Self {
            text,
            flags: HashMap::new(),
        }
    }
}
