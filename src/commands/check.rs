//! Evaluate a single guess against a chosen target

use crate::core::{Evaluation, Word};
use anyhow::{Context, Result};

/// A guess scored against a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
}

/// Score `guess` against `target` without starting a game
///
/// Neither word has to be in a word list.
///
/// # Errors
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;
    let evaluation = Evaluation::calculate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        evaluation,
    })
}
