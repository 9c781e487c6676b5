//! Validation registry - the per-validator table of field rules.
//!
//! Rules are grouped by field key. Keys compare case-insensitively and
//! iterate in first-registration order; rules under a key keep their
//! registration order. The registry is filled by
//! [`ValidatorBuilder`](crate::ValidatorBuilder) and never mutated once the
//! validator is built.

use std::fmt;

use indexmap::IndexMap;

use crate::foundation::error::normalize_key;
use crate::foundation::{FieldError, LabeledCheck};

pub(crate) type Stage<T> = Box<dyn Fn(&T) -> LabeledCheck + Send + Sync>;

// ============================================================================
// FIELD
// ============================================================================

/// Registration descriptor: which key a rule reports under, how the field is
/// named in messages, and an optional replacement message.
///
/// `&str` and `String` convert into a `Field` whose display name is the key.
///
/// # Examples
///
/// ```rust,ignore
/// let field = Field::named("due_at")
///     .display_as("Due date")
///     .with_message("Pick a due date in the future");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    key: String,
    display_name: Option<String>,
    message: Option<String>,
}

impl Field {
    /// A field reported under `key`.
    pub fn named(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// A rule on the value as a whole, reported under the empty key.
    pub fn unkeyed() -> Self {
        Self::default()
    }

    /// Name bound into rule messages instead of the key.
    #[must_use = "builder methods must be chained or built"]
    pub fn display_as(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Message reported instead of the rule's own messages on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The report key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn resolve_display_name(&self, default_field_name: &str) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None if self.key.is_empty() => default_field_name.to_string(),
            None => self.key.clone(),
        }
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<&str> for Field {
    fn from(key: &str) -> Self {
        Self::named(key)
    }
}

impl From<String> for Field {
    fn from(key: String) -> Self {
        Self::named(key)
    }
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// One registered rule: the erased rule over the whole value, the name it
/// is bound to, and its optional replacement message.
pub struct FieldRule<T> {
    display_name: String,
    stage: Stage<T>,
    message: Option<String>,
}

impl<T> FieldRule<T> {
    pub(crate) fn new(display_name: String, stage: Stage<T>, message: Option<String>) -> Self {
        Self {
            display_name,
            stage,
            message,
        }
    }

    /// Name bound into this rule's messages.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Replacement message, if any.
    pub fn message_override(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs both rule stages against the whole value.
    pub fn evaluate(&self, value: &T) -> Result<(), FieldError> {
        (self.stage)(value).run(&self.display_name)
    }
}

impl<T> fmt::Debug for FieldRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("display_name", &self.display_name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

struct Entry<T> {
    key: String,
    rules: Vec<FieldRule<T>>,
}

/// Field key → ordered rules.
pub struct ValidationRegistry<T> {
    entries: IndexMap<String, Entry<T>>,
}

impl<T> ValidationRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Appends `rule` under `key`.
    ///
    /// The first registration of a key fixes its position and its spelling.
    pub fn register(&mut self, key: &str, rule: FieldRule<T>) {
        self.entries
            .entry(normalize_key(key))
            .or_insert_with(|| Entry {
                key: key.to_string(),
                rules: Vec::new(),
            })
            .rules
            .push(rule);
    }

    /// `(key, rules)` pairs in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldRule<T>])> {
        self.entries
            .values()
            .map(|entry| (entry.key.as_str(), entry.rules.as_slice()))
    }

    /// Registered keys in first-registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|entry| entry.key.as_str())
    }

    /// Rules registered under `key`, if any.
    pub fn rules_for(&self, key: &str) -> Option<&[FieldRule<T>]> {
        self.entries
            .get(&normalize_key(key))
            .map(|entry| entry.rules.as_slice())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rules across all keys.
    pub fn rule_count(&self) -> usize {
        self.entries.values().map(|entry| entry.rules.len()).sum()
    }
}

impl<T> Default for ValidationRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ValidationRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRegistry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("rule_count", &self.rule_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(message: &'static str) -> FieldRule<i32> {
        FieldRule::new(
            "N".to_string(),
            Box::new(move |_| LabeledCheck::fail(move |_| message.to_string())),
            None,
        )
    }

    #[test]
    fn test_field_display_name_resolution() {
        assert_eq!(Field::named("Label").resolve_display_name("Value"), "Label");
        assert_eq!(Field::unkeyed().resolve_display_name("Value"), "Value");
        assert_eq!(
            Field::named("due_at")
                .display_as("Due date")
                .resolve_display_name("Value"),
            "Due date"
        );
    }

    #[test]
    fn test_field_from_str() {
        let field: Field = "Label".into();
        assert_eq!(field.key(), "Label");
        assert!(field.message().is_none());
    }

    #[test]
    fn test_register_groups_case_insensitively_in_order() {
        let mut registry = ValidationRegistry::new();
        registry.register("Label", failing("a"));
        registry.register("IntValue", failing("b"));
        registry.register("label", failing("c"));

        assert_eq!(registry.keys().collect::<Vec<_>>(), ["Label", "IntValue"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.rule_count(), 3);
        assert_eq!(registry.rules_for("LABEL").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_register_groups_non_ascii_keys() {
        let mut registry = ValidationRegistry::new();
        registry.register("ΟΔΟΣ", failing("a"));
        registry.register("οδος", failing("b"));

        assert_eq!(registry.keys().collect::<Vec<_>>(), ["ΟΔΟΣ"]);
        assert_eq!(registry.rules_for("οδοσ").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_field_rule_evaluate_binds_display_name() {
        let rule = FieldRule::new(
            "Due date".to_string(),
            Box::new(|n: &i32| {
                LabeledCheck::ensure(*n > 0, |field| format!("{field} is in the past"))
            }),
            Some("override".to_string()),
        );

        assert!(rule.evaluate(&1).is_ok());
        let error = rule.evaluate(&0).unwrap_err();
        assert_eq!(error.messages(), ["Due date is in the past"]);
        assert_eq!(rule.message_override(), Some("override"));
    }
}
