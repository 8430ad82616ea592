//! Per-letter feedback classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single letter relative to the target word
///
/// Variants are declared in upgrade order, so the derived `Ord` gives
/// `Empty < Absent < Present < Correct`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Not yet guessed
    #[default]
    Empty,
    /// Not in the target (or all instances already accounted for)
    Absent,
    /// In the target at a different position
    Present,
    /// In the target at this position
    Correct,
}

impl LetterStatus {
    /// Emoji tile for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Single-character code (`G`, `Y`, `-`, `.`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Empty => '.',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
