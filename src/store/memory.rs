//! In-process store, used for tests and `--store memory`

use super::{ProfileStore, StoreError, UserId};
use crate::stats::{GameRecord, PlayerStatistics};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<FxHashMap<UserId, PlayerStatistics>>,
    games: Mutex<FxHashMap<UserId, Vec<GameRecord>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    ///
    /// # Errors
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.profiles.lock().map_err(|_| StoreError::Poisoned)?.len())
    }

    /// # Errors
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl ProfileStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, user: &UserId) -> Result<Option<PlayerStatistics>, StoreError> {
        let profiles = self.profiles.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(profiles.get(user).cloned())
    }

    fn save(&self, user: &UserId, stats: &PlayerStatistics) -> Result<(), StoreError> {
        let mut profiles = self.profiles.lock().map_err(|_| StoreError::Poisoned)?;
        profiles.insert(user.clone(), stats.clone());
        Ok(())
    }

    fn append_game(&self, user: &UserId, game: &GameRecord) -> Result<(), StoreError> {
        let mut games = self.games.lock().map_err(|_| StoreError::Poisoned)?;
        games.entry(user.clone()).or_default().push(game.clone());
        Ok(())
    }

    fn games(&self, user: &UserId) -> Result<Vec<GameRecord>, StoreError> {
        let games = self.games.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(games.get(user).cloned().unwrap_or_default())
    }
}
