//! Verdict inspection command
//!
//! Evaluates one guess against a given target and reports the per-letter
//! verdicts, useful for checking how a pairing would render.

use crate::core::{AttemptRow, Word, WordError};

/// Result of evaluating one guess/target pair
pub struct EvalResult {
    pub guess: Word,
    pub target: Word,
    pub row: AttemptRow,
}

/// Evaluate `guess` against `target`
///
/// # Errors
/// Returns `WordError` if either string is not a valid 5-letter word.
pub fn evaluate_pair(guess: &str, target: &str) -> Result<EvalResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let row = AttemptRow::evaluate(&guess, &target);

    Ok(EvalResult { guess, target, row })
}
