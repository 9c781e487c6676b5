//! The rule algebra.
//!
//! A [`Rule<T>`] is a two-stage function: given a value it produces a
//! [`LabeledCheck`], and the check, given a field name, produces the outcome.
//!
//! ```text
//! rule.apply(&value)      -> LabeledCheck
//! check.run("FieldName")  -> Result<(), FieldError>
//! ```
//!
//! Keeping the stages apart lets one rule instance be registered under
//! several field names; each failure message is rendered with whatever name
//! the rule ends up bound to.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ErrorReport, FieldError, LabeledCheck};

// ============================================================================
// RULE
// ============================================================================

/// A reusable validation rule over `T`.
///
/// Rules are immutable and cheap to clone. They capture only their own
/// parameters (bounds, patterns, nested validators).
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let positive = Rule::new(|n: &i32| {
///     LabeledCheck::ensure(*n > 0, |field| format!("{field} must be positive"))
/// });
///
/// assert!(positive.check(&5, "Count").is_ok());
/// assert_eq!(
///     positive.check(&-1, "Count").unwrap_err().messages(),
///     ["Count must be positive"]
/// );
/// ```
pub struct Rule<T: ?Sized> {
    stage: Arc<dyn Fn(&T) -> LabeledCheck + Send + Sync>,
}

impl<T: ?Sized> Rule<T> {
    /// Creates a rule from its first stage.
    pub fn new<F>(stage: F) -> Self
    where
        F: Fn(&T) -> LabeledCheck + Send + Sync + 'static,
    {
        Self {
            stage: Arc::new(stage),
        }
    }

    /// Creates a rule from a predicate and a message template.
    ///
    /// The template receives the bound field name.
    pub fn predicate<P, M>(predicate: P, message: M) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
        M: Fn(&str) -> String + Send + Sync + 'static,
    {
        let message = Arc::new(message);
        Self::new(move |value| {
            if predicate(value) {
                LabeledCheck::pass()
            } else {
                let message = Arc::clone(&message);
                LabeledCheck::fail(move |field| message(field))
            }
        })
    }

    /// First stage: evaluates the rule against `value`.
    pub fn apply(&self, value: &T) -> LabeledCheck {
        (self.stage)(value)
    }

    /// Runs both stages.
    pub fn check(&self, value: &T, field: &str) -> Result<(), FieldError> {
        self.apply(value).run(field)
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            stage: Arc::clone(&self.stage),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Creates a rule from a predicate and a message template.
///
/// Shorthand for [`Rule::predicate`].
pub fn must<T, P, M>(predicate: P, message: M) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    M: Fn(&str) -> String + Send + Sync + 'static,
{
    Rule::predicate(predicate, message)
}

// ============================================================================
// VALIDATABLE
// ============================================================================

/// Anything that can validate a whole `T` into an [`ErrorReport`].
///
/// Implemented by [`Validator`](crate::Validator). Nested delegation
/// ([`is_valid`](crate::combinators::is_valid)) accepts any implementor, so a
/// hand-written validator can stand in for a registry-backed one.
pub trait Validatable<T: ?Sized> {
    /// Validates `value`, returning every failure. An empty report means
    /// the value is valid.
    fn report(&self, value: &T) -> ErrorReport;

    /// Validates `value` as a `Result`.
    fn check(&self, value: &T) -> Result<(), ErrorReport> {
        let report = self.report(value);
        if report.is_empty() { Ok(()) } else { Err(report) }
    }
}

impl<T: ?Sized, V: Validatable<T> + ?Sized> Validatable<T> for &V {
    fn report(&self, value: &T) -> ErrorReport {
        (**self).report(value)
    }
}

impl<T: ?Sized, V: Validatable<T> + ?Sized> Validatable<T> for Arc<V> {
    fn report(&self, value: &T) -> ErrorReport {
        (**self).report(value)
    }
}

impl<T: ?Sized, V: Validatable<T> + ?Sized> Validatable<T> for Box<V> {
    fn report(&self, value: &T) -> ErrorReport {
        (**self).report(value)
    }
}
