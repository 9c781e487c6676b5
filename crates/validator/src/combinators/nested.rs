//! Nested validator delegation
//!
//! [`is_valid`] turns a whole-value validator into a [`Rule`], so a
//! sub-object can be checked by its own validator from a parent one.
//!
//! Nested field keys are collapsed: every message of the nested report is
//! reported under the *outer* field key, in the nested report's order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let address = Validator::<Address>::builder()
//!     .rule("Street", |a| a.street.as_str(), not_empty())
//!     .build();
//!
//! let person = Validator::<Person>::builder()
//!     .rule("Address", |p| &p.address, is_valid(address))
//!     .build();
//! ```

use crate::foundation::{LabeledCheck, Rule, Validatable};

/// Value must pass `validator`.
///
/// The validator is injected as an instance; wrap shared validators in an
/// `Arc` or clone a [`Validator`](crate::Validator), which is cheap.
pub fn is_valid<U, V>(validator: V) -> Rule<U>
where
    U: ?Sized + 'static,
    V: Validatable<U> + Send + Sync + 'static,
{
    Rule::new(move |value: &U| {
        let report = validator.report(value);
        LabeledCheck::fail_with_messages(report.messages().map(str::to_owned).collect())
    })
}
