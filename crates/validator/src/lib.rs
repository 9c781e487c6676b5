//! # fieldcheck-validator
//!
//! Declarative, field-keyed validation. Rules are registered against fields
//! of a value once; validating a value runs every rule and collects every
//! failure into one [`ErrorReport`] grouped by field key.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let validator = Validator::<Todo>::builder()
//!     .rules("Label", |t| t.label.as_str(), [not_empty(), longer_than(3)])
//!     .rule("IntValue", |t| &t.int_value, greater_than(0))
//!     .build();
//!
//! let report = validator.validate(todo).unwrap_err();
//! for field in &report {
//!     println!("{field}");
//! }
//! ```
//!
//! ## Rules
//!
//! A [`Rule<T>`] is applied to a value first and bound to a field name
//! second, so the same rule renders "Label must not be empty" under one
//! registration and "Title must not be empty" under another.
//!
//! - **Primitive**: see [`validators`]
//! - **Structural**: [`required`](combinators::required),
//!   [`optional`](combinators::optional), [`for_each`](combinators::for_each),
//!   [`is_valid`](combinators::is_valid)
//! - **Custom**: [`must`](foundation::must), [`Rule::new`]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod validator;
pub mod validators;

pub use foundation::{
    ErrorReport, FieldError, LabeledCheck, ReportError, ReportFormat, Rule, Validatable,
    ValidationResult, ValidatorOptions,
};
pub use registry::{Field, FieldRule, ValidationRegistry};
pub use validator::{Validator, ValidatorBuilder};
