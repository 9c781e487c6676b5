//! Collection rules over slices.
//!
//! Select a `Vec<U>` field with `|t| t.items.as_slice()` to apply these.

use crate::foundation::Rule;

/// Collection must contain at least one item.
pub fn not_empty<U>() -> Rule<[U]>
where
    U: 'static,
{
    Rule::predicate(
        |items: &[U]| !items.is_empty(),
        |field| format!("{field} must contain at least one item"),
    )
}

/// Collection must contain no items.
pub fn empty<U>() -> Rule<[U]>
where
    U: 'static,
{
    Rule::predicate(
        |items: &[U]| items.is_empty(),
        |field| format!("{field} must not contain any items"),
    )
}

/// Collection must contain at least `min` items.
pub fn min_items<U>(min: usize) -> Rule<[U]>
where
    U: 'static,
{
    Rule::predicate(
        move |items: &[U]| items.len() >= min,
        move |field| format!("{field} must contain at least {min} items"),
    )
}

/// Collection must contain at most `max` items.
pub fn max_items<U>(max: usize) -> Rule<[U]>
where
    U: 'static,
{
    Rule::predicate(
        move |items: &[U]| items.len() <= max,
        move |field| format!("{field} must contain at most {max} items"),
    )
}
