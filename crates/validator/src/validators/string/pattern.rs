//! String pattern rules
//!
//! Prefix, suffix and substring checks plus arbitrary regular expressions.

use regex::Regex;

use crate::foundation::Rule;

/// String must start with `prefix`.
pub fn starts_with<S>(prefix: impl Into<String>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let prefix = prefix.into();
    let message = format!("must start with '{prefix}'");
    Rule::predicate(
        move |value: &S| value.as_ref().starts_with(prefix.as_str()),
        move |field| format!("{field} {message}"),
    )
}

/// String must end with `suffix`.
pub fn ends_with<S>(suffix: impl Into<String>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let suffix = suffix.into();
    let message = format!("must end with '{suffix}'");
    Rule::predicate(
        move |value: &S| value.as_ref().ends_with(suffix.as_str()),
        move |field| format!("{field} {message}"),
    )
}

/// String must contain `needle`.
pub fn contains<S>(needle: impl Into<String>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let needle = needle.into();
    let message = format!("must contain '{needle}'");
    Rule::predicate(
        move |value: &S| value.as_ref().contains(needle.as_str()),
        move |field| format!("{field} {message}"),
    )
}

/// String must match the regular expression `pattern`.
///
/// # Errors
///
/// Returns the compile error if `pattern` is not a valid regex.
pub fn matches<S>(pattern: &str) -> Result<Rule<S>, regex::Error>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Ok(matches_regex(Regex::new(pattern)?))
}

/// String must match an already compiled regular expression.
pub fn matches_regex<S>(regex: Regex) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let message = format!("must match the pattern '{}'", regex.as_str());
    Rule::predicate(
        move |value: &S| regex.is_match(value.as_ref()),
        move |field| format!("{field} {message}"),
    )
}
