//! Guess evaluation
//!
//! Maps a guess and the target word to one `LetterStatus` per position,
//! following Wordle's duplicate-letter rules.

use super::word::{WORD_LENGTH, Word, WordError, letter_index};
use super::LetterStatus;
use std::fmt;

/// Feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterStatus; WORD_LENGTH]);

impl Evaluation {
    /// All letters in the right place
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and consume those target letters
    /// 2. Second pass: scanning guess positions left to right, mark a letter
    ///    present while an unconsumed instance remains in the target, else absent
    ///
    /// A repeated guess letter is therefore only marked present as many times
    /// as the target still holds it after the exact matches.
    ///
    /// # Examples
    /// ```
    /// use wordle_mates::core::{Evaluation, LetterStatus, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let target = Word::new("plane").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &target);
    ///
    /// assert_eq!(evaluation.statuses()[1], LetterStatus::Correct);
    /// assert_eq!(evaluation.statuses()[3], LetterStatus::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // Allow: Index needed to compare guess[i] with target[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                result[i] = LetterStatus::Correct;
                available[letter_index(letter)] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let remaining = &mut available[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                result[i] = LetterStatus::Present;
                *remaining -= 1;
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as emoji tiles, e.g. "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

/// Evaluate a raw guess string against a raw target string
///
/// # Errors
/// Returns `WordError` if either string is not exactly five ASCII letters.
/// Nothing is computed for rejected input.
pub fn evaluate(guess: &str, target: &str) -> Result<Evaluation, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Evaluation::calculate(&guess, &target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;
    use LetterStatus::{Absent, Correct, Present};

    fn eval(guess: &str, target: &str) -> [LetterStatus; WORD_LENGTH] {
        *evaluate(guess, target).unwrap().statuses()
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn all_correct() {
        let evaluation = evaluate("crane", "CRANE").unwrap();
        assert_eq!(evaluation, Evaluation::SOLVED);
        assert!(evaluation.is_solved());
        assert_eq!(evaluation.count(Correct), 5);
    }

    #[test]
    fn duplicate_guess_letters_speed_erase() {
        // ERASE holds one S and two E's, none in the positions SPEED uses
        assert_eq!(
            eval("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_exact_match_consumed_first() {
        // Second O is exact, so the first O takes the remaining one
        assert_eq!(
            eval("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn excess_repeats_are_absent() {
        // Only the two exact E's count; the middle three have nothing left
        assert_eq!(
            eval("eeeee", "erase"),
            [Correct, Absent, Absent, Absent, Correct]
        );
        // The exact L at position 1 uses up PLANE's only L
        assert_eq!(
            eval("llama", "plane"),
            [Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn present_consumption_is_left_to_right() {
        // Single A in the target goes to the leftmost unmatched A
        assert_eq!(
            eval("aabbb", "xxxxa"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn plane_walkthrough() {
        assert_eq!(
            eval("slate", "plane"),
            [Absent, Correct, Correct, Absent, Correct]
        );
        assert_eq!(
            eval("place", "plane"),
            [Correct, Correct, Correct, Absent, Correct]
        );
        assert!(evaluate("plane", "plane").unwrap().is_solved());
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(evaluate("cran", "plane"), Err(WordError::InvalidLength(4)));
        assert_eq!(
            evaluate("crane", "plan3"),
            Err(WordError::InvalidCharacters)
        );
        assert!(evaluate("cranes", "plane").is_err());
    }

    #[test]
    fn evaluation_is_deterministic() {
        assert_eq!(evaluate("speed", "erase"), evaluate("speed", "erase"));
    }

    #[test]
    fn display_and_emoji() {
        let evaluation = evaluate("slate", "plane").unwrap();
        assert_eq!(evaluation.to_string(), "-GG-G");
        assert_eq!(evaluation.to_emoji(), "⬛🟩🟩⬛🟩");
    }

    #[test]
    fn correct_count_matches_exact_positions() {
        let words = words_from_slice(ANSWERS);
        for guess in words.iter().take(60) {
            for target in words.iter().rev().take(60) {
                let evaluation = Evaluation::calculate(guess, target);
                let exact = (0..WORD_LENGTH)
                    .filter(|&i| guess.char_at(i) == target.char_at(i))
                    .count();
                assert_eq!(evaluation.count(Correct), exact, "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn hits_never_exceed_target_letter_counts() {
        let words = words_from_slice(ANSWERS);
        for guess in words.iter().step_by(7) {
            for target in words.iter().step_by(11) {
                let evaluation = Evaluation::calculate(guess, target);
                let mut hits = [0u8; 26];
                for (i, status) in evaluation.statuses().iter().enumerate() {
                    if matches!(status, Correct | Present) {
                        hits[letter_index(guess.char_at(i))] += 1;
                    }
                }
                let available = target.letter_counts();
                for letter in 0..26 {
                    assert!(hits[letter] <= available[letter], "{guess} vs {target}");
                }
            }
        }
    }
}
