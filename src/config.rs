//! Persistent user configuration
//!
//! Stored as JSON at `{config_dir}/wordle_mates/config.json`. Every field has
//! a default so older or hand-edited files keep loading.

use crate::store::StoreConfig;
use crate::wordlists::TargetSelection;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Player id used when none is configured
pub const DEFAULT_PLAYER: &str = "player";

/// Gameplay toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    /// Revealed hints must be used in later guesses
    pub hard_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub player: String,
    pub settings: GameSettings,
    pub target: TargetSelection,
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER.to_string(),
            settings: GameSettings::default(),
            target: TargetSelection::Random,
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default location, if the platform has a config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordle_mates").join("config.json"))
    }

    /// Load from `path`, or the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            log::debug!("no config directory, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write to `path`, or the default location; returns the path written
    ///
    /// # Errors
    /// Returns an error if no location is available or the write fails.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(Self::default_path)
            .context("No config directory available")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        log::info!("saved config to {}", path.display());
        Ok(path)
    }
}
