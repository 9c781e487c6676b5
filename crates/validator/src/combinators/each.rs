//! FOR-EACH combinator - validates each element of a collection
//!
//! Every element is checked, in order. Failures of all elements are
//! reported under the collection's own field key; messages carry no index,
//! their order is the only link back to the element.

use crate::combinators::nested::is_valid;
use crate::foundation::{LabeledCheck, Rule, Validatable};

/// Applies `rule` to every element.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let rule = for_each(greater_than(0));
/// let error = rule.check(&[-1, 2, -3], "Scores").unwrap_err();
/// assert_eq!(error.len(), 2);
/// ```
pub fn for_each<U>(rule: Rule<U>) -> Rule<[U]>
where
    U: 'static,
{
    Rule::new(move |items: &[U]| LabeledCheck::all(items.iter().map(|item| rule.apply(item))))
}

/// Validates every element with a nested validator.
///
/// Shorthand for `for_each(is_valid(validator))`.
pub fn for_each_valid<U, V>(validator: V) -> Rule<[U]>
where
    U: 'static,
    V: Validatable<U> + Send + Sync + 'static,
{
    for_each(is_valid(validator))
}
