//! Formatting utilities for terminal output

use crate::core::{Evaluation, KeyboardState, LetterStatus, QWERTY_ROWS, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its status
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Empty => tile.normal(),
    }
}

/// Guess rendered as colored tiles
#[must_use]
pub fn evaluation_row(guess: &Word, evaluation: &Evaluation) -> String {
    let mut row = String::with_capacity(WORD_LENGTH * 12);
    for (&letter, &status) in guess.chars().iter().zip(evaluation.statuses()) {
        row.push_str(&letter_tile(char::from(letter), status).to_string());
    }
    row
}

/// QWERTY rows with each key colored by its best known status
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|key| {
                    let text = char::from(key).to_string();
                    match keyboard.status(key) {
                        LetterStatus::Correct => text.green().bold().to_string(),
                        LetterStatus::Present => text.yellow().bold().to_string(),
                        LetterStatus::Absent => text.bright_black().to_string(),
                        LetterStatus::Empty => text.white().to_string(),
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one guess-distribution bucket, scaled to the largest bucket
///
/// Non-empty buckets always get at least one block.
#[must_use]
pub fn distribution_bar(count: u32, max: u32, width: usize) -> String {
    let bar = create_progress_bar(f64::from(count), f64::from(max), width);
    if count > 0 && !bar.starts_with('█') {
        let mut fixed = String::from("█");
        fixed.push_str(&"░".repeat(width.saturating_sub(1)));
        return fixed;
    }
    bar
}
