//! Statistics commands

use crate::profile::Profiles;
use crate::stats::{GameRecord, PlayerStatistics};
use crate::store::UserId;
use anyhow::Result;

/// Current statistics for `user`, all zero if they have never played
///
/// # Errors
/// Returns an error if the store cannot be read.
pub fn show_stats(profiles: &Profiles, user: &UserId) -> Result<PlayerStatistics> {
    Ok(profiles.stats(user)?)
}

/// The `limit` most recent games for `user`, newest first
///
/// # Errors
/// Returns an error if the history cannot be read.
pub fn recent_games(profiles: &Profiles, user: &UserId, limit: usize) -> Result<Vec<GameRecord>> {
    let mut games = profiles.games(user)?;
    games.reverse();
    games.truncate(limit);
    Ok(games)
}

/// Clear every counter and achievement for `user`
///
/// # Errors
/// Returns an error if the defaults cannot be saved.
pub fn reset_stats(profiles: &Profiles, user: &UserId) -> Result<PlayerStatistics> {
    Ok(profiles.reset(user)?)
}
