//! Equality and ordering rules
//!
//! Every rule renders its message from the bound field name and its own
//! parameters, e.g. `"IntValue must be greater than 0"`.

use std::fmt::Display;

use crate::foundation::Rule;

// ============================================================================
// EQUALITY
// ============================================================================

/// Value must equal `expected`.
pub fn equal_to<T>(expected: T) -> Rule<T>
where
    T: PartialEq + Display + Clone + Send + Sync + 'static,
{
    let shown = expected.clone();
    Rule::predicate(
        move |value: &T| *value == expected,
        move |field| format!("{field} must be equal to {shown}"),
    )
}

/// Value must differ from `unexpected`.
pub fn not_equal_to<T>(unexpected: T) -> Rule<T>
where
    T: PartialEq + Display + Clone + Send + Sync + 'static,
{
    let shown = unexpected.clone();
    Rule::predicate(
        move |value: &T| *value != unexpected,
        move |field| format!("{field} must not be equal to {shown}"),
    )
}

/// Value must be one of `allowed`.
pub fn one_of<T, I>(allowed: I) -> Rule<T>
where
    T: PartialEq + Display + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let allowed: Vec<T> = allowed.into_iter().collect();
    let shown = allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Rule::predicate(
        move |value: &T| allowed.contains(value),
        move |field| format!("{field} must be one of: {shown}"),
    )
}

// ============================================================================
// ORDERING
// ============================================================================

/// Value must be strictly greater than `bound`.
pub fn greater_than<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let shown = bound.clone();
    Rule::predicate(
        move |value: &T| *value > bound,
        move |field| format!("{field} must be greater than {shown}"),
    )
}

/// Value must be greater than or equal to `bound`.
pub fn at_least<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let shown = bound.clone();
    Rule::predicate(
        move |value: &T| *value >= bound,
        move |field| format!("{field} must be greater than or equal to {shown}"),
    )
}

/// Value must be strictly less than `bound`.
pub fn less_than<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let shown = bound.clone();
    Rule::predicate(
        move |value: &T| *value < bound,
        move |field| format!("{field} must be less than {shown}"),
    )
}

/// Value must be less than or equal to `bound`.
pub fn at_most<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let shown = bound.clone();
    Rule::predicate(
        move |value: &T| *value <= bound,
        move |field| format!("{field} must be less than or equal to {shown}"),
    )
}

/// Value must lie within `min..=max`.
pub fn between<T>(min: T, max: T) -> Rule<T>
where
    T: PartialOrd + Display + Clone + Send + Sync + 'static,
{
    let message = format!("must be between {min} and {max}");
    Rule::predicate(
        move |value: &T| *value >= min && *value <= max,
        move |field| format!("{field} {message}"),
    )
}
