//! Word lists and target selection
//!
//! Embedded lists are compiled into the binary; custom answer files can
//! replace the answers at runtime.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError, TargetSelection, WordSource, daily_index};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
