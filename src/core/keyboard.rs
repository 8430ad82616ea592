//! On-screen keyboard hints
//!
//! Folds evaluations into the best status seen for every letter A-Z.

use super::word::{Word, letter_index};
use super::{Evaluation, LetterStatus};

/// Keyboard rows in QWERTY order
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known status for each letter in the current session
///
/// A letter's status only ever moves up `Empty < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    statuses: [LetterStatus; 26],
}

impl KeyboardState {
    /// Keyboard with every letter `Empty`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the keyboard after folding in one evaluated guess
    ///
    /// # Examples
    /// ```
    /// use wordle_mates::core::{Evaluation, KeyboardState, LetterStatus, Word};
    ///
    /// let target = Word::new("plane").unwrap();
    /// let guess = Word::new("slate").unwrap();
    /// let keyboard = KeyboardState::new()
    ///     .with_guess(&guess, &Evaluation::calculate(&guess, &target));
    ///
    /// assert_eq!(keyboard.status(b'L'), LetterStatus::Correct);
    /// assert_eq!(keyboard.status(b'S'), LetterStatus::Absent);
    /// assert_eq!(keyboard.status(b'Q'), LetterStatus::Empty);
    /// ```
    #[must_use]
    pub fn with_guess(mut self, guess: &Word, evaluation: &Evaluation) -> Self {
        self.record(guess, evaluation);
        self
    }

    /// In-place form of [`KeyboardState::with_guess`]
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &status) in guess.chars().iter().zip(evaluation.statuses()) {
            let slot = &mut self.statuses[letter_index(letter)];
            if status > *slot {
                *slot = status;
            }
        }
    }

    /// Status of an uppercase ASCII letter; anything else reads as `Empty`
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        if letter.is_ascii_uppercase() {
            self.statuses[letter_index(letter)]
        } else {
            LetterStatus::Empty
        }
    }

    /// All letters with their current status, A through Z
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'A'..=b'Z')
            .zip(self.statuses.iter().copied())
            .map(|(letter, status)| (char::from(letter), status))
    }
}
