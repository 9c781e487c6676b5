//! Configuration for validators and report rendering.
//!
//! Both structs deserialize with `#[serde(default)]`, so a host can embed
//! them in its own configuration file and only spell out what it overrides.

use serde::{Deserialize, Serialize};

/// Default display name for rules registered without a field key.
pub const DEFAULT_FIELD_NAME: &str = "Value";

/// Default separator between fields in a rendered report.
pub const DEFAULT_SEPARATOR: &str = "; ";

/// Default rendering of a report without errors.
pub const DEFAULT_EMPTY_MARKER: &str = "(no errors)";

// ============================================================================
// VALIDATOR OPTIONS
// ============================================================================

/// Options applied while a validator is being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Display name bound to rules registered without a field key.
    pub default_field_name: String,
}

impl ValidatorOptions {
    /// Sets the display name used for unkeyed rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_field_name(mut self, name: impl Into<String>) -> Self {
        self.default_field_name = name.into();
        self
    }
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            default_field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

// ============================================================================
// REPORT FORMAT
// ============================================================================

/// How an [`ErrorReport`](crate::foundation::ErrorReport) renders to text.
///
/// Each field renders as `"key - msg1, msg2"`; fields are joined by
/// `separator`. A report with no entries renders as `empty_marker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFormat {
    /// Text placed between two rendered fields.
    pub separator: String,
    /// Text rendered for an empty report.
    pub empty_marker: String,
}

impl ReportFormat {
    /// Sets the field separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the empty marker.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_empty_marker(mut self, marker: impl Into<String>) -> Self {
        self.empty_marker = marker.into();
        self
    }
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            empty_marker: DEFAULT_EMPTY_MARKER.to_string(),
        }
    }
}
