// Field rules and the per-form rule registry

use crate::{FieldValues, ValidationError};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Check run against a field's value; `Err` carries the message to show.
///
/// The whole snapshot is passed along so cross-field rules (confirmation,
/// checkbox flags) share the same shape as single-field rules.
pub type RuleFn = Arc<dyn Fn(&str, &FieldValues) -> Result<(), String> + Send + Sync>;

/// A named constraint on one field.
#[derive(Clone)]
pub struct FieldRule {
    constraint: String,
    check: RuleFn,
}

impl FieldRule {
    /// Rule with a fixed failure message.
    pub fn new<P>(
        constraint: impl Into<String>,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::with_check(constraint, move |value, _| {
            if predicate(value) {
                Ok(())
            } else {
                Err(message.to_string())
            }
        })
    }

    /// Rule whose predicate also reads other fields of the snapshot.
    pub fn cross<P>(
        constraint: impl Into<String>,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        P: Fn(&str, &FieldValues) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::with_check(constraint, move |value, values| {
            if predicate(value, values) {
                Ok(())
            } else {
                Err(message.to_string())
            }
        })
    }

    /// Rule that builds its own message, e.g. listing what is missing.
    pub fn with_check<F>(constraint: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str, &FieldValues) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            constraint: constraint.into(),
            check: Arc::new(check),
        }
    }

    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    /// Evaluate the rule for `field` in `values`.
    pub fn check(&self, field: &str, values: &FieldValues) -> Result<(), ValidationError> {
        (self.check)(values.get(field), values).map_err(|message| {
            ValidationError::new(field, message).with_constraint(self.constraint.as_str())
        })
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("constraint", &self.constraint)
            .finish_non_exhaustive()
    }
}

/// Fixed set of rules for one form.
///
/// Field rules run before cross-field rules targeting the same field; within
/// each group rules run in registration order. Registering a rule whose
/// constraint name already exists for that field replaces it in place.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    fields: Vec<String>,
    field_rules: HashMap<String, Vec<FieldRule>>,
    cross_rules: HashMap<String, Vec<FieldRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a single-field rule.
    pub fn register(&mut self, field: impl Into<String>, rule: FieldRule) -> &mut Self {
        let field = field.into();
        self.track(&field);
        upsert(self.field_rules.entry(field).or_default(), rule);
        self
    }

    /// Add or replace a rule spanning several fields, reported under `target`.
    pub fn register_cross(&mut self, target: impl Into<String>, rule: FieldRule) -> &mut Self {
        let target = target.into();
        self.track(&target);
        upsert(self.cross_rules.entry(target).or_default(), rule);
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn rule(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.register(field, rule);
        self
    }

    /// Builder form of [`register_cross`](Self::register_cross).
    pub fn cross_rule(mut self, target: impl Into<String>, rule: FieldRule) -> Self {
        self.register_cross(target, rule);
        self
    }

    /// Rules for `field` in evaluation order; empty when none are registered.
    pub fn rules_for(&self, field: &str) -> Vec<&FieldRule> {
        let own = self.field_rules.get(field).into_iter().flatten();
        let cross = self.cross_rules.get(field).into_iter().flatten();
        own.chain(cross).collect()
    }

    /// Registered field names in first-registration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of rules across all fields.
    pub fn len(&self) -> usize {
        self.field_rules.values().map(Vec::len).sum::<usize>()
            + self.cross_rules.values().map(Vec::len).sum::<usize>()
    }

    fn track(&mut self, field: &str) {
        if !self.fields.iter().any(|f| f == field) {
            self.fields.push(field.to_string());
        }
    }
}

fn upsert(rules: &mut Vec<FieldRule>, rule: FieldRule) {
    match rules.iter_mut().find(|r| r.constraint == rule.constraint) {
        Some(existing) => *existing = rule,
        None => rules.push(rule),
    }
}
