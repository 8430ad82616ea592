//! Hard mode constraints
//!
//! Revealed hints must be reused: green letters stay in place and yellow
//! letters appear somewhere in every later guess.

use super::Turn;
use crate::core::{LetterStatus, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// A guess that ignores an earlier hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A green letter was moved or dropped
    MissingAt { position: usize, letter: char },
    /// A revealed letter is used fewer times than hinted
    MissingLetter { letter: char, required: u8 },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAt { position, letter } => {
                write!(f, "{} letter must be {letter}", ordinal(position + 1))
            }
            Self::MissingLetter { letter, required } if *required > 1 => {
                write!(f, "Guess must contain {letter} {required} times")
            }
            Self::MissingLetter { letter, .. } => write!(f, "Guess must contain {letter}"),
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Check `guess` against every hint revealed by `turns`
///
/// # Errors
/// Returns the first violated hint, greens before yellows, oldest turn first.
pub fn check(guess: &Word, turns: &[Turn]) -> Result<(), HardModeViolation> {
    for turn in turns {
        let statuses = turn.evaluation.statuses();

        for position in 0..WORD_LENGTH {
            let letter = turn.guess.char_at(position);
            if statuses[position] == LetterStatus::Correct && guess.char_at(position) != letter {
                return Err(HardModeViolation::MissingAt {
                    position,
                    letter: char::from(letter),
                });
            }
        }

        let mut required = [0u8; 26];
        for (position, status) in statuses.iter().enumerate() {
            if matches!(status, LetterStatus::Correct | LetterStatus::Present) {
                required[letter_index(turn.guess.char_at(position))] += 1;
            }
        }

        let available = guess.letter_counts();

        // Walk the hinted guess so the reported letter follows its order
        for &letter in turn.guess.chars() {
            let index = letter_index(letter);
            if available[index] < required[index] {
                return Err(HardModeViolation::MissingLetter {
                    letter: char::from(letter),
                    required: required[index],
                });
            }
        }
    }
    Ok(())
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluation;

    fn turn(guess: &str, target: &str) -> Turn {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let evaluation = Evaluation::calculate(&guess, &target);
        Turn { guess, evaluation }
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn no_history_allows_anything() {
        assert!(check(&word("zesty"), &[]).is_ok());
    }

    #[test]
    fn green_must_stay_in_place() {
        // SLATE vs PLANE: L, A, E green
        let turns = [turn("slate", "plane")];
        assert_eq!(
            check(&word("crane"), &turns),
            Err(HardModeViolation::MissingAt {
                position: 1,
                letter: 'L'
            })
        );
        assert!(check(&word("place"), &turns).is_ok());
    }

    #[test]
    fn yellow_must_be_reused() {
        // LEAPT vs PLANE: L, E, P yellow, A green
        let turns = [turn("leapt", "plane")];
        assert_eq!(
            check(&word("chant"), &turns),
            Err(HardModeViolation::MissingLetter {
                letter: 'L',
                required: 1
            })
        );
        assert!(check(&word("plane"), &turns).is_ok());
    }

    #[test]
    fn duplicate_hints_need_duplicate_letters() {
        // SPEED vs ERASE: E yellow twice
        let turns = [turn("speed", "erase")];
        let violation = check(&word("steam"), &turns).unwrap_err();
        assert_eq!(
            violation,
            HardModeViolation::MissingLetter {
                letter: 'E',
                required: 2
            }
        );
        assert_eq!(violation.to_string(), "Guess must contain E 2 times");
        assert!(check(&word("erase"), &turns).is_ok());
    }

    #[test]
    fn messages_use_ordinals() {
        let violation = HardModeViolation::MissingAt {
            position: 2,
            letter: 'A',
        };
        assert_eq!(violation.to_string(), "3rd letter must be A");
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(5), "5th");
        assert_eq!(ordinal(11), "11th");
    }
}
