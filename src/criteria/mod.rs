//! Password criteria checks
//!
//! Each check tests the password against one fixed rule.

mod character_class;
mod length;

pub use character_class::{has_digit, has_lowercase, has_special_character, has_uppercase};
pub use length::has_min_length;

/// Signature shared by every criterion check.
///
/// Checks are total: they return a plain pass/fail for any input string,
/// including the empty string.
pub type CriterionCheck = fn(&str) -> bool;
