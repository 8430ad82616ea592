//! Command implementations

pub mod check;
pub mod settings;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_guess};
pub use settings::{SettingsUpdate, apply_settings, update_settings};
pub use simple::run_simple;
pub use stats::{recent_games, reset_stats, show_stats};
