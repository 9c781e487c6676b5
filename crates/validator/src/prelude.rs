//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the validator, its builder, the rule algebra and every built-in
//! rule.
//!
//! Collection rules share names with string rules, so they stay behind the
//! `collection::` path:
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let tags = collection::min_items::<String>(1);
//! let label = not_empty::<str>();
//! ```

// ============================================================================
// FOUNDATION: Rule algebra, errors, configuration
// ============================================================================

pub use crate::foundation::{
    ErrorReport, FieldError, LabeledCheck, ReportError, ReportFormat, Rule, Validatable,
    ValidationResult, ValidatorOptions, must,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::collection;
pub use crate::validators::{
    at_least, at_most, between, contains, e164_phone, email, empty, ends_with, equal_to,
    exact_length, greater_than, guid_empty, guid_not_empty, length_between, less_than,
    longer_than, matches, matches_regex, max_length, min_length, not_empty, not_equal_to, one_of,
    shorter_than, starts_with, url,
};

// ============================================================================
// COMBINATORS: Structural rules
// ============================================================================

pub use crate::combinators::{for_each, for_each_valid, is_valid, optional, required};

// ============================================================================
// VALIDATOR
// ============================================================================

pub use crate::registry::Field;
pub use crate::validator::{Validator, ValidatorBuilder};
