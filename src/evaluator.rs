//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{
    has_digit, has_lowercase, has_min_length, has_special_character, has_uppercase, CriterionCheck,
};
use crate::types::{Criterion, Score, StrengthResult, CRITERIA_COUNT};

/// The fixed criteria table, in identifier order.
///
/// Order is part of the contract: callers rely on positional stability
/// when rendering the checklist.
const CRITERIA: [(u8, &str, CriterionCheck); CRITERIA_COUNT] = [
    (1, "At least 8 characters", has_min_length),
    (2, "Contains uppercase letter", has_uppercase),
    (3, "Contains lowercase letter", has_lowercase),
    (4, "Contains a number", has_digit),
    (5, "Contains special character", has_special_character),
];

/// Evaluates password strength and returns a detailed result.
///
/// Total over every input string, including the empty string; there is no
/// failure path. Each call builds a fresh [`StrengthResult`] from scratch.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthResult` containing the score and per-criterion feedback.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();

    let criteria = CRITERIA.map(|(id, description, check)| Criterion {
        id,
        description,
        satisfied: check(pwd),
    });

    let satisfied = criteria.iter().filter(|c| c.satisfied).count() as u8;
    let result = StrengthResult {
        score: Score::new(satisfied),
        criteria,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(score = result.score.value(), label = %result.label(), "password evaluated");

    result
}

/// Debounce window applied before each dispatched evaluation.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the evaluation result via channel.
///
/// Waits out a short debounce window first; if `token` was cancelled in the
/// meantime (a newer keystroke superseded this one), nothing is sent. The
/// synchronous evaluation itself cannot be cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded before dispatch");
        return;
    }

    let result = evaluate_password_strength(password);
    if tx.send(result).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("strength result receiver dropped");
    }
}
