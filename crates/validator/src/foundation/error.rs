//! Error model: per-field messages and the aggregated report.
//!
//! - [`FieldError`] holds every message recorded for one field key.
//! - [`ErrorReport`] maps field keys to [`FieldError`]s. Keys compare
//!   case-insensitively and enumerate in first-insertion order.
//! - [`ReportError`] signals misuse of the model (merging mismatched keys,
//!   strict lookup of a key that was never populated).
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::foundation::ErrorReport;
//!
//! let mut report = ErrorReport::new();
//! report.add("Email", "Email must not be empty");
//! report.add("email", "Email must be a valid e-mail address");
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.lookup("EMAIL")?.messages().len(), 2);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::foundation::config::ReportFormat;

/// Normalizes a field key to its case-insensitive identity.
///
/// Lowercases per char, so the result does not depend on a char's position
/// in the word, and folds final sigma into `σ`.
pub(crate) fn normalize_key(key: &str) -> String {
    key.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

// ============================================================================
// REPORT ERROR
// ============================================================================

/// Misuse of the error model.
///
/// These are programming defects, never validation outcomes: callers
/// either merged errors that belong to different fields or asked for a
/// field that was never reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// A [`FieldError`] was merged into one with a different key.
    #[error("cannot merge errors for field '{found}' into field '{expected}'")]
    KeyMismatch {
        /// Key of the receiving error.
        expected: String,
        /// Key of the error being merged.
        found: String,
    },

    /// Strict lookup of a key with no recorded errors.
    #[error("no errors recorded for field '{key}'")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// Ordered validation messages for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    key: String,
    messages: Vec<String>,
}

impl FieldError {
    /// Creates a field error holding one message.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            messages: vec![message.into()],
        }
    }

    /// Creates a field error from any number of messages.
    pub fn with_messages<I, M>(key: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            key: key.into(),
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// The field key, in the case it was first recorded with.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the error and returns its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no message has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns true if `key` identifies the same field (case-insensitive).
    pub fn has_key(&self, key: &str) -> bool {
        normalize_key(&self.key) == normalize_key(key)
    }

    /// Appends one message.
    pub fn append(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Appends every message of `other`.
    ///
    /// # Errors
    ///
    /// [`ReportError::KeyMismatch`] if `other` belongs to a different field.
    /// `self` is left untouched in that case.
    pub fn merge(&mut self, other: FieldError) -> Result<(), ReportError> {
        if !self.has_key(&other.key) {
            return Err(ReportError::KeyMismatch {
                expected: self.key.clone(),
                found: other.key,
            });
        }
        self.messages.extend(other.messages);
        Ok(())
    }

    pub(crate) fn extend_messages<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.messages.extend(messages);
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key, self.messages.join(", "))
    }
}

// ============================================================================
// ERROR REPORT
// ============================================================================

/// Every validation failure of one run, grouped by field key.
///
/// At most one [`FieldError`] exists per case-insensitive key. Adding to a
/// key that is already present appends to its message list. Iteration
/// follows the order in which keys were first added.
#[derive(Debug, Clone, Default)]
pub struct ErrorReport {
    entries: IndexMap<String, FieldError>,
}

impl ErrorReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` under `key`.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        match self.entries.get_mut(&normalize_key(&key)) {
            Some(existing) => existing.append(message),
            None => {
                self.entries
                    .insert(normalize_key(&key), FieldError::new(key, message));
            }
        }
    }

    /// Records every message of `error` under its key.
    ///
    /// An error without messages records nothing.
    pub fn add_error(&mut self, error: FieldError) {
        if error.is_empty() {
            return;
        }
        let normalized = normalize_key(&error.key);
        match self.entries.get_mut(&normalized) {
            Some(existing) => existing.extend_messages(error.messages),
            None => {
                self.entries.insert(normalized, error);
            }
        }
    }

    /// Records every entry of `other`, preserving its order for new keys.
    pub fn merge(&mut self, other: ErrorReport) {
        for error in other.entries.into_values() {
            self.add_error(error);
        }
    }

    /// Strict lookup.
    ///
    /// # Errors
    ///
    /// [`ReportError::KeyNotFound`] if nothing was recorded for `key`. Use
    /// [`get`](Self::get) or [`contains_key`](Self::contains_key) to probe.
    pub fn lookup(&self, key: &str) -> Result<&FieldError, ReportError> {
        self.get(key).ok_or_else(|| ReportError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Optimistic lookup.
    pub fn get(&self, key: &str) -> Option<&FieldError> {
        self.entries.get(&normalize_key(key))
    }

    /// Returns true if anything was recorded for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    /// Number of distinct field keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when validation produced no failure.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of messages across all keys.
    pub fn total_messages(&self) -> usize {
        self.entries.values().map(FieldError::len).sum()
    }

    /// Field errors in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.values()
    }

    /// Keys as first recorded, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(FieldError::key)
    }

    /// Every message, field by field.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries
            .values()
            .flat_map(|error| error.messages.iter().map(String::as_str))
    }

    /// Renders the report with a caller-supplied format.
    pub fn render(&self, format: &ReportFormat) -> String {
        if self.is_empty() {
            return format.empty_marker.clone();
        }
        self.entries
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&format.separator)
    }
}

impl PartialEq for ErrorReport {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for ErrorReport {}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportFormat::default()))
    }
}

impl std::error::Error for ErrorReport {}

impl From<FieldError> for ErrorReport {
    fn from(error: FieldError) -> Self {
        let mut report = Self::new();
        report.add_error(error);
        report
    }
}

impl FromIterator<FieldError> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut report = Self::new();
        for error in iter {
            report.add_error(error);
        }
        report
    }
}

impl IntoIterator for ErrorReport {
    type Item = FieldError;
    type IntoIter = indexmap::map::IntoValues<String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a FieldError;
    type IntoIter = indexmap::map::Values<'a, String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Serializes as an ordered object of `key -> [messages]`.
impl Serialize for ErrorReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for error in self.entries.values() {
            map.serialize_entry(&error.key, &error.messages)?;
        }
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_append() {
        let mut error = FieldError::new("Name", "Name must not be empty");
        error.append("Name must be longer than 3 characters");

        assert_eq!(error.key(), "Name");
        assert_eq!(error.len(), 2);
        assert_eq!(error.messages()[1], "Name must be longer than 3 characters");
    }

    #[test]
    fn test_field_error_merge_same_key_ignores_case() {
        let mut error = FieldError::new("Name", "first");
        error.merge(FieldError::new("NAME", "second")).unwrap();

        assert_eq!(error.messages(), ["first", "second"]);
        assert_eq!(error.key(), "Name");
    }

    #[test]
    fn test_field_error_merge_key_mismatch() {
        let mut error = FieldError::new("Name", "first");
        let result = error.merge(FieldError::new("Age", "second"));

        assert_eq!(
            result,
            Err(ReportError::KeyMismatch {
                expected: "Name".to_string(),
                found: "Age".to_string(),
            })
        );
        assert_eq!(error.len(), 1);
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::with_messages("Label", ["too short", "bad prefix"]);
        assert_eq!(error.to_string(), "Label - too short, bad prefix");
    }

    #[test]
    fn test_report_add_groups_by_case_insensitive_key() {
        let mut report = ErrorReport::new();
        report.add("Email", "missing");
        report.add("Age", "negative");
        report.add("EMAIL", "malformed");

        assert_eq!(report.len(), 2);
        assert_eq!(report.total_messages(), 3);
        assert_eq!(report.keys().collect::<Vec<_>>(), ["Email", "Age"]);
        assert_eq!(report.lookup("email").unwrap().messages(), ["missing", "malformed"]);
    }

    #[test]
    fn test_report_groups_non_ascii_keys() {
        let mut report = ErrorReport::new();
        report.add("ΟΔΟΣ", "a");
        report.add("οδοσ", "b");
        report.add("οδος", "c");
        report.add("Ärger", "d");
        report.add("ärger", "e");

        assert_eq!(report.keys().collect::<Vec<_>>(), ["ΟΔΟΣ", "Ärger"]);
        assert_eq!(report.lookup("οδοσ").unwrap().messages(), ["a", "b", "c"]);
        assert_eq!(report.lookup("ÄRGER").unwrap().len(), 2);
        assert!(FieldError::new("ΟΔΟΣ", "a").has_key("οδος"));
    }

    #[test]
    fn test_report_add_error_merges() {
        let mut report = ErrorReport::new();
        report.add("Tags", "first");
        report.add_error(FieldError::with_messages("tags", ["second", "third"]));

        assert_eq!(report.len(), 1);
        assert_eq!(report.lookup("Tags").unwrap().len(), 3);
    }

    #[test]
    fn test_report_lookup_missing_key() {
        let report = ErrorReport::new();

        assert_eq!(
            report.lookup("Name").unwrap_err(),
            ReportError::KeyNotFound {
                key: "Name".to_string()
            }
        );
        assert!(report.get("Name").is_none());
        assert!(!report.contains_key("Name"));
    }

    #[test]
    fn test_report_merge_keeps_first_seen_order() {
        let mut left = ErrorReport::new();
        left.add("B", "b1");

        let mut right = ErrorReport::new();
        right.add("A", "a1");
        right.add("b", "b2");

        left.merge(right);

        assert_eq!(left.keys().collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(left.lookup("B").unwrap().messages(), ["b1", "b2"]);
    }

    #[test]
    fn test_report_equality_is_order_sensitive() {
        let mut first = ErrorReport::new();
        first.add("A", "a");
        first.add("B", "b");

        let mut second = ErrorReport::new();
        second.add("B", "b");
        second.add("A", "a");

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn test_report_render() {
        let mut report = ErrorReport::new();
        report.add("Label", "Label must not be empty");
        report.add("Label", "Label must be longer than 3 characters");
        report.add("IntValue", "IntValue must be greater than 0");

        assert_eq!(
            report.to_string(),
            "Label - Label must not be empty, Label must be longer than 3 characters; \
             IntValue - IntValue must be greater than 0"
        );

        let format = ReportFormat::default().with_separator("\n");
        assert_eq!(report.render(&format).lines().count(), 2);
    }

    #[test]
    fn test_empty_report_renders_marker() {
        let report = ErrorReport::new();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "(no errors)");

        let format = ReportFormat::default().with_empty_marker("<ok>");
        assert_eq!(report.render(&format), "<ok>");
    }

    #[test]
    fn test_report_serializes_in_insertion_order() {
        let mut report = ErrorReport::new();
        report.add("Zeta", "z");
        report.add("Alpha", "a");

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"Zeta":["z"],"Alpha":["a"]}"#);
    }
}
