//! Logger setup for the binary

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Default filter for the given verbosity
#[must_use]
pub fn default_filter(verbose: bool, interactive: bool) -> &'static str {
    match (verbose, interactive) {
        (true, _) => "wordle_mates=debug,warn",
        // stderr output would tear the TUI
        (false, true) => "off",
        (false, false) => "wordle_mates=info,warn",
    }
}

/// Initialize `env_logger`
///
/// `RUST_LOG` overrides the default filter. When `log_file` is given, output
/// is appended there instead of stderr, which keeps the TUI readable.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a logger is already set.
pub fn init_logging(verbose: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = if log_file.is_some() {
        default_filter(verbose, false)
    } else {
        default_filter(verbose, interactive)
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(filter));
    builder.format_timestamp_millis();

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init().context("Logger already initialized")?;
    Ok(())
}
