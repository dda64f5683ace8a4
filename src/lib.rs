//! Criteria-based password strength meter
//!
//! This library evaluates a password against five fixed rules and reports
//! a score (0-5), a qualitative label, and per-rule pass/fail feedback,
//! intended to be recomputed live as the user types.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async dispatch with cancellation support
//! - `tracing`: Enables logging via tracing crate (never logs the password)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = evaluate_password_strength(&password);
//!
//! assert_eq!(result.score.value(), 5);
//! assert_eq!(result.label(), StrengthLabel::Strong);
//!
//! for criterion in &result.criteria {
//!     println!("[{}] {}", if criterion.satisfied { "x" } else { " " }, criterion.description);
//! }
//! ```

// Internal modules
mod criteria;
mod evaluator;
mod types;

// Public API
pub use evaluator::evaluate_password_strength;
pub use types::{Criterion, ParseLabelError, Score, StrengthLabel, StrengthResult, CRITERIA_COUNT};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
