//! GUID rules over [`uuid::Uuid`].

use uuid::Uuid;

use crate::foundation::Rule;

/// GUID must not be the nil (all-zero) value.
pub fn guid_not_empty() -> Rule<Uuid> {
    Rule::predicate(
        |value: &Uuid| !value.is_nil(),
        |field| format!("{field} must not be an empty GUID"),
    )
}

/// GUID must be the nil (all-zero) value.
pub fn guid_empty() -> Rule<Uuid> {
    Rule::predicate(Uuid::is_nil, |field| format!("{field} must be an empty GUID"))
}
