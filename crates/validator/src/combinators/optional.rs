//! REQUIRED / OPTIONAL combinators - lift rules over `Option`
//!
//! Both combinators take any number of inner rules. Only the presence check
//! short-circuits; once a value is present every inner rule runs and all of
//! their failures are reported, in order.
//!
//! | input     | `required(rules)`           | `optional(rules)`  |
//! |-----------|-----------------------------|--------------------|
//! | `None`    | one failure: `"<field> is required"` | success   |
//! | `Some(v)` | all `rules` against `v`     | all `rules` against `v` |

use std::sync::Arc;

use crate::foundation::{LabeledCheck, Rule};

fn apply_all<U>(rules: &[Rule<U>], value: &U) -> LabeledCheck {
    LabeledCheck::all(rules.iter().map(|rule| rule.apply(value)))
}

/// Value must be present, and satisfy every rule in `rules`.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let rule = required([not_empty(), longer_than(3)]);
/// assert!(rule.check(&Some("long enough".to_string()), "Title").is_ok());
/// assert_eq!(
///     rule.check(&None, "Title").unwrap_err().messages(),
///     ["Title is required"]
/// );
/// ```
pub fn required<U, I>(rules: I) -> Rule<Option<U>>
where
    U: 'static,
    I: IntoIterator<Item = Rule<U>>,
{
    let rules: Arc<[Rule<U>]> = rules.into_iter().collect();
    Rule::new(move |value: &Option<U>| match value {
        None => LabeledCheck::fail(|field| format!("{field} is required")),
        Some(inner) => apply_all(&rules, inner),
    })
}

/// Value may be absent; when present it must satisfy every rule in `rules`.
pub fn optional<U, I>(rules: I) -> Rule<Option<U>>
where
    U: 'static,
    I: IntoIterator<Item = Rule<U>>,
{
    let rules: Arc<[Rule<U>]> = rules.into_iter().collect();
    Rule::new(move |value: &Option<U>| match value {
        None => LabeledCheck::pass(),
        Some(inner) => apply_all(&rules, inner),
    })
}
