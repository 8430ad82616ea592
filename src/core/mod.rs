//! Core domain types for the game
//!
//! Pure, synchronous building blocks: words, per-letter feedback and the
//! keyboard hint map. Nothing here performs I/O.

mod evaluation;
mod keyboard;
mod status;
mod word;

pub use evaluation::{Evaluation, evaluate};
pub use keyboard::{KeyboardState, QWERTY_ROWS};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_index;
