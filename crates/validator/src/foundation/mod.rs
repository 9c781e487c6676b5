//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Rule algebra**: [`Rule`], [`LabeledCheck`], [`must`]
//! - **Errors**: [`FieldError`], [`ErrorReport`], [`ReportError`]
//! - **Delegation**: [`Validatable`]
//! - **Configuration**: [`ValidatorOptions`], [`ReportFormat`]
//!
//! # Architecture
//!
//! ## 1. Two-stage rules
//!
//! A rule is applied to a value first and bound to a field name second:
//!
//! ```rust,ignore
//! let rule = min_length::<str>(3);
//! let check = rule.apply("ab");           // predicate evaluated here
//! let outcome = check.run("Username");    // message rendered here
//! ```
//!
//! ## 2. Aggregation, not short-circuit
//!
//! Failures are data. Every rule of a validator runs, and every failure
//! lands in one [`ErrorReport`], grouped by field key:
//!
//! ```rust,ignore
//! let report = validator.report(&input);
//! for field in &report {
//!     println!("{field}");
//! }
//! ```

// Module declarations
pub mod check;
pub mod config;
pub mod error;
pub mod rule;

// Re-export everything at the foundation level for convenience
pub use check::LabeledCheck;
pub use config::{ReportFormat, ValidatorOptions};
pub use error::{ErrorReport, FieldError, ReportError};
pub use rule::{Rule, Validatable, must};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The outcome of validating a whole value.
pub type ValidationResult<T> = Result<T, ErrorReport>;
