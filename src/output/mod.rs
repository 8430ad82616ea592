//! Terminal output formatting
//!
//! Colored panels and tile rows for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_evaluation, print_history, print_stats, write_keyboard, write_unlocked};
