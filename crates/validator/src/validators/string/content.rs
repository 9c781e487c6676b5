//! String content rules: e-mail, URL and phone number formats.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::Rule;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("e-mail pattern is valid")
});

// `+`, a country code not starting with 0, at most 15 digits in total.
static E164_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid"));

// ============================================================================
// EMAIL
// ============================================================================

/// String must be a syntactically valid e-mail address.
pub fn email<S>() -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        |value: &S| EMAIL_REGEX.is_match(value.as_ref()),
        |field| format!("{field} must be a valid e-mail address"),
    )
}

// ============================================================================
// URL
// ============================================================================

/// String must be an absolute URL.
pub fn url<S>() -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        |value: &S| url::Url::parse(value.as_ref()).is_ok(),
        |field| format!("{field} must be a valid URL"),
    )
}

// ============================================================================
// PHONE
// ============================================================================

/// String must be a phone number in E.164 format, e.g. `+14155551234`.
pub fn e164_phone<S>() -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::predicate(
        |value: &S| E164_REGEX.is_match(value.as_ref()),
        |field| format!("{field} must be a valid E.164 phone number"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email::<str>().check(input, "Email").is_ok(), ok);
    }

    #[rstest]
    #[case("https://example.com/path?q=1", true)]
    #[case("ftp://files.example.com", true)]
    #[case("example.com", false)]
    #[case("", false)]
    fn test_url(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(url::<str>().check(input, "Homepage").is_ok(), ok);
    }

    #[rstest]
    #[case("+14155551234", true)]
    #[case("+442071234567", true)]
    #[case("14155551234", false)]
    #[case("+0123456", false)]
    #[case("+1 415 555 1234", false)]
    #[case("+1234567890123456", false)]
    fn test_e164_phone(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(e164_phone::<str>().check(input, "Phone").is_ok(), ok);
    }

    #[test]
    fn test_messages() {
        let error = email::<str>().check("nope", "Contact").unwrap_err();
        assert_eq!(error.messages(), ["Contact must be a valid e-mail address"]);

        let error = e164_phone::<str>().check("nope", "Phone").unwrap_err();
        assert_eq!(error.messages(), ["Phone must be a valid E.164 phone number"]);
    }
}
