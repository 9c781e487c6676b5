//! Structural combinators
//!
//! Higher-order rule builders that lift element-level rules to optional
//! values, sequences and sub-objects:
//!
//! - [`required`] / [`optional`]: `Rule<U>` → `Rule<Option<U>>`
//! - [`for_each`]: `Rule<U>` → `Rule<[U]>`
//! - [`is_valid`]: `Validatable<U>` → `Rule<U>`
//! - [`for_each_valid`]: `Validatable<U>` → `Rule<[U]>`

pub mod each;
pub mod nested;
pub mod optional;

pub use each::{for_each, for_each_valid};
pub use nested::is_valid;
pub use optional::{optional, required};
