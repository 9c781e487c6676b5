//! String emptiness and length rules
//!
//! Length is measured in Unicode scalar values (chars). All rules are
//! generic over `S: AsRef<str> + ?Sized`, so the same constructor serves
//! `str` selectors and `String` values unwrapped from an `Option`.

use crate::foundation::Rule;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// EMPTINESS
// ============================================================================

/// String must contain at least one character.
pub fn not_empty<S>() -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        |value: &S| !value.as_ref().is_empty(),
        |field| format!("{field} must not be empty"),
    )
}

/// String must be empty.
pub fn empty<S>() -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        |value: &S| value.as_ref().is_empty(),
        |field| format!("{field} must be empty"),
    )
}

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

/// String must have at least `min` characters.
pub fn min_length<S>(min: usize) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        move |value: &S| char_len(value.as_ref()) >= min,
        move |field| format!("{field} must be at least {min} characters long"),
    )
}

/// String must have at most `max` characters.
pub fn max_length<S>(max: usize) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        move |value: &S| char_len(value.as_ref()) <= max,
        move |field| format!("{field} must be at most {max} characters long"),
    )
}

/// String must have more than `length` characters.
pub fn longer_than<S>(length: usize) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        move |value: &S| char_len(value.as_ref()) > length,
        move |field| format!("{field} must be longer than {length} characters"),
    )
}

/// String must have fewer than `length` characters.
pub fn shorter_than<S>(length: usize) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        move |value: &S| char_len(value.as_ref()) < length,
        move |field| format!("{field} must be shorter than {length} characters"),
    )
}

/// String must have exactly `length` characters.
pub fn exact_length<S>(length: usize) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        move |value: &S| char_len(value.as_ref()) == length,
        move |field| format!("{field} must be exactly {length} characters long"),
    )
}

/// String length must lie within `min..=max` characters.
pub fn length_between<S>(min: usize, max: usize) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        move |value: &S| (min..=max).contains(&char_len(value.as_ref())),
        move |field| format!("{field} must be between {min} and {max} characters long"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty::<str>().check("x", "Label").is_ok());
        assert_eq!(
            not_empty::<str>().check("", "Label").unwrap_err().messages(),
            ["Label must not be empty"]
        );
    }

    #[test]
    fn test_not_empty_on_owned_string() {
        let rule = not_empty::<String>();
        assert!(rule.check(&"x".to_string(), "Label").is_ok());
        assert!(rule.check(&String::new(), "Label").is_err());
    }

    #[test]
    fn test_empty() {
        assert!(empty::<str>().check("", "Unused").is_ok());
        assert!(empty::<str>().check(" ", "Unused").is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 3 chars, 6 bytes
        let input = "äöü";
        assert!(exact_length::<str>(3).check(input, "Word").is_ok());
        assert!(max_length::<str>(3).check(input, "Word").is_ok());
        assert!(min_length::<str>(4).check(input, "Word").is_err());
    }

    #[test]
    fn test_longer_and_shorter_than_are_strict() {
        assert!(longer_than::<str>(3).check("abc", "Label").is_err());
        assert!(longer_than::<str>(3).check("abcd", "Label").is_ok());
        assert!(shorter_than::<str>(3).check("abc", "Label").is_err());
        assert!(shorter_than::<str>(3).check("ab", "Label").is_ok());
    }

    #[test]
    fn test_length_between() {
        let rule = length_between::<str>(2, 4);
        assert!(rule.check("ab", "Code").is_ok());
        assert!(rule.check("abcd", "Code").is_ok());
        assert_eq!(
            rule.check("a", "Code").unwrap_err().messages(),
            ["Code must be between 2 and 4 characters long"]
        );
    }
}
