//! Wordle Mates
//!
//! A Wordle game with per-player statistics, achievements and pluggable
//! profile storage.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_mates::core::{Evaluation, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &target);
//! assert_eq!(evaluation.to_string(), "Y-YY-");
//! ```

// Core domain types
pub mod core;

// Single-game state machine
pub mod game;

// Statistics update rule and achievements
pub mod stats;

// Word lists and target selection
pub mod wordlists;

// Profile persistence backends
pub mod store;

// Recording finished games against a store
pub mod profile;

// User configuration file
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
