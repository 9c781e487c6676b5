//! Built-in primitive rules
//!
//! Every constructor returns a [`Rule`](crate::foundation::Rule) whose failure
//! message is rendered from the field name it is eventually bound to.
//!
//! - **Comparison**: [`equal_to`], [`not_equal_to`], [`one_of`],
//!   [`greater_than`], [`at_least`], [`less_than`], [`at_most`], [`between`]
//! - **String**: [`not_empty`], [`empty`], [`min_length`], [`max_length`],
//!   [`longer_than`], [`shorter_than`], [`exact_length`], [`length_between`],
//!   [`starts_with`], [`ends_with`], [`contains`], [`matches`], [`email`],
//!   [`url`], [`e164_phone`]
//! - **GUID**: [`guid_empty`], [`guid_not_empty`]
//! - **Collection**: [`collection::not_empty`], [`collection::empty`],
//!   [`collection::min_items`], [`collection::max_items`]
//!
//! Collection rules share names with string rules and are reached through
//! their module path.

pub mod collection;
pub mod comparison;
pub mod guid;
pub mod string;

pub use comparison::{
    at_least, at_most, between, equal_to, greater_than, less_than, not_equal_to, one_of,
};
pub use guid::{guid_empty, guid_not_empty};
pub use string::{
    contains, e164_phone, email, empty, ends_with, exact_length, length_between, longer_than,
    matches, matches_regex, max_length, min_length, not_empty, shorter_than, starts_with, url,
};
