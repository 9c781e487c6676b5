//! String rules
//!
//! - Emptiness and length (`not_empty`, `min_length`, `longer_than`, ...)
//! - Patterns (`starts_with`, `ends_with`, `contains`, `matches`)
//! - Content formats (`email`, `url`, `e164_phone`)

pub mod content;
pub mod length;
pub mod pattern;

pub use content::{e164_phone, email, url};
pub use length::{
    empty, exact_length, length_between, longer_than, max_length, min_length, not_empty,
    shorter_than,
};
pub use pattern::{contains, ends_with, matches, matches_regex, starts_with};
