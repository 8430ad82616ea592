//! View and change persistent settings

use crate::config::AppConfig;
use crate::store::UserId;
use crate::wordlists::TargetSelection;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Requested changes; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub player: Option<String>,
    pub hard_mode: Option<bool>,
    pub target: Option<TargetSelection>,
}

impl SettingsUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.player.is_none() && self.hard_mode.is_none() && self.target.is_none()
    }
}

/// Apply `update` to `config`
///
/// # Errors
/// Returns an error for an invalid player id or a fixed target, which cannot
/// be persisted.
pub fn apply_settings(config: &mut AppConfig, update: SettingsUpdate) -> Result<()> {
    if let Some(player) = update.player {
        UserId::new(player.as_str())?;
        config.player = player;
    }
    if let Some(hard_mode) = update.hard_mode {
        config.settings.hard_mode = hard_mode;
    }
    match update.target {
        Some(TargetSelection::Fixed(_)) => bail!("A fixed target cannot be saved as a setting"),
        Some(target) => config.target = target,
        None => {}
    }
    Ok(())
}

/// Load, update and save the config file; returns the new config and its path
///
/// # Errors
/// Returns an error if the config cannot be read, validated or written.
pub fn update_settings(
    path: Option<&Path>,
    update: SettingsUpdate,
) -> Result<(AppConfig, PathBuf)> {
    let mut config = AppConfig::load(path)?;
    apply_settings(&mut config, update)?;
    let written = config.save(path)?;
    Ok((config, written))
}
