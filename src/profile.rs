//! Player profiles
//!
//! Glue between finished games and the configured [`ProfileStore`]: loads the
//! stored statistics, applies the update rule, unlocks achievements and
//! writes the result back in a single save. The game itself is then appended
//! to the player's history.

use crate::stats::{Achievement, GameRecord, PlayerStatistics, StatsError};
use crate::store::{ProfileStore, StoreError, UserId};
use std::fmt;

/// Result of recording a finished game
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedGame {
    pub stats: PlayerStatistics,
    /// Achievements unlocked by this game only
    pub unlocked: Vec<Achievement>,
}

#[derive(Debug)]
pub enum ProfileError {
    InvalidOutcome(StatsError),
    /// The store could not be read
    Unavailable(StoreError),
    /// The new statistics were computed but could not be saved
    ///
    /// `pending` holds the value that should have been written so the caller
    /// can retry or show it anyway.
    Persistence {
        pending: Box<PlayerStatistics>,
        source: StoreError,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOutcome(e) => write!(f, "{e}"),
            Self::Unavailable(e) => write!(f, "Could not load profile: {e}"),
            Self::Persistence { source, .. } => write!(f, "Could not save profile: {source}"),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOutcome(e) => Some(e),
            Self::Unavailable(e) | Self::Persistence { source: e, .. } => Some(e),
        }
    }
}

impl From<StatsError> for ProfileError {
    fn from(e: StatsError) -> Self {
        Self::InvalidOutcome(e)
    }
}

impl From<StoreError> for ProfileError {
    fn from(e: StoreError) -> Self {
        Self::Unavailable(e)
    }
}

pub struct Profiles {
    store: Box<dyn ProfileStore>,
}

impl Profiles {
    #[must_use]
    pub fn new(store: Box<dyn ProfileStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &dyn ProfileStore {
        self.store.as_ref()
    }

    /// Make sure `user` has a stored profile, creating a default one on first use
    ///
    /// # Errors
    /// Returns `ProfileError` if the store cannot be read or written.
    pub fn initialize(&self, user: &UserId) -> Result<PlayerStatistics, ProfileError> {
        if let Some(stats) = self.store.fetch(user)? {
            return Ok(stats);
        }

        log::info!("creating profile for {user}");
        let stats = PlayerStatistics::default();
        self.store
            .save(user, &stats)
            .map_err(|source| ProfileError::Persistence {
                pending: Box::new(stats.clone()),
                source,
            })?;
        Ok(stats)
    }

    /// # Errors
    /// Returns `ProfileError::Unavailable` if the store cannot be read.
    pub fn stats(&self, user: &UserId) -> Result<PlayerStatistics, ProfileError> {
        Ok(self.store.load(user)?)
    }

    /// Fold a finished game into the stored statistics and history
    ///
    /// A history append that fails after the statistics were saved is only
    /// logged, so a retry never counts the game twice.
    ///
    /// # Errors
    /// - `InvalidOutcome` if `game` is a win outside 1-6 guesses; nothing is saved
    /// - `Unavailable` if the current statistics cannot be loaded
    /// - `Persistence` if the save fails; carries the computed statistics
    pub fn record_game(
        &self,
        user: &UserId,
        game: &GameRecord,
    ) -> Result<RecordedGame, ProfileError> {
        let outcome = game.outcome();
        let current = self.store.load(user)?;
        let mut stats = current.record(&outcome)?;
        let unlocked = Achievement::unlock_earned(&mut stats, &outcome);
        stats.last_played = Some(game.timestamp);

        for achievement in &unlocked {
            log::info!("{user} unlocked {}", achievement.title());
        }

        if let Err(source) = self.store.save(user, &stats) {
            log::warn!("failed to save statistics for {user}: {source}");
            return Err(ProfileError::Persistence {
                pending: Box::new(stats),
                source,
            });
        }

        if let Err(e) = self.store.append_game(user, game) {
            log::warn!("failed to add {} to the history of {user}: {e}", game.word);
        }

        log::debug!(
            "recorded game for {user}: {} played, streak {}",
            stats.games_played,
            stats.current_streak
        );
        Ok(RecordedGame { stats, unlocked })
    }

    /// Finished games, oldest first
    ///
    /// # Errors
    /// Returns `ProfileError::Unavailable` if the store cannot be read.
    pub fn games(&self, user: &UserId) -> Result<Vec<GameRecord>, ProfileError> {
        Ok(self.store.games(user)?)
    }

    /// # Errors
    /// Returns `ProfileError::Persistence` if the defaults cannot be saved.
    pub fn reset(&self, user: &UserId) -> Result<PlayerStatistics, ProfileError> {
        log::info!("resetting statistics for {user}");
        self.store
            .reset(user)
            .map_err(|source| ProfileError::Persistence {
                pending: Box::default(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::io;

    fn denied() -> StoreError {
        StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    /// Reads succeed, every write fails
    struct ReadOnlyStore;

    impl ProfileStore for ReadOnlyStore {
        fn backend(&self) -> &'static str {
            "read-only"
        }

        fn fetch(&self, _user: &UserId) -> Result<Option<PlayerStatistics>, StoreError> {
            Ok(None)
        }

        fn save(&self, _user: &UserId, _stats: &PlayerStatistics) -> Result<(), StoreError> {
            Err(denied())
        }

        fn append_game(&self, _user: &UserId, _game: &GameRecord) -> Result<(), StoreError> {
            Err(denied())
        }

        fn games(&self, _user: &UserId) -> Result<Vec<GameRecord>, StoreError> {
            Ok(Vec::new())
        }
    }

    /// Statistics work, the history cannot be written
    #[derive(Default)]
    struct NoHistoryStore(MemoryStore);

    impl ProfileStore for NoHistoryStore {
        fn backend(&self) -> &'static str {
            "no-history"
        }

        fn fetch(&self, user: &UserId) -> Result<Option<PlayerStatistics>, StoreError> {
            self.0.fetch(user)
        }

        fn save(&self, user: &UserId, stats: &PlayerStatistics) -> Result<(), StoreError> {
            self.0.save(user, stats)
        }

        fn append_game(&self, _user: &UserId, _game: &GameRecord) -> Result<(), StoreError> {
            Err(denied())
        }

        fn games(&self, user: &UserId) -> Result<Vec<GameRecord>, StoreError> {
            self.0.games(user)
        }
    }

    fn user() -> UserId {
        UserId::new("player").unwrap()
    }

    fn won_in(guesses: usize) -> GameRecord {
        let mut attempts = vec!["SLATE".to_string(); guesses.saturating_sub(1)];
        attempts.push("PLANE".to_string());
        GameRecord::new("PLANE", attempts, true)
    }

    #[test]
    fn initialize_creates_default_once() {
        let profiles = Profiles::new(Box::new(MemoryStore::new()));
        assert_eq!(profiles.store().fetch(&user()).unwrap(), None);

        let created = profiles.initialize(&user()).unwrap();
        assert_eq!(created, PlayerStatistics::default());
        assert_eq!(profiles.store().fetch(&user()).unwrap(), Some(created));

        profiles.record_game(&user(), &won_in(4)).unwrap();
        assert_eq!(profiles.initialize(&user()).unwrap().games_played, 1);
    }

    #[test]
    fn record_game_updates_and_persists() {
        let profiles = Profiles::new(Box::new(MemoryStore::new()));

        let game = won_in(3);
        let recorded = profiles.record_game(&user(), &game).unwrap();
        assert_eq!(recorded.stats.games_played, 1);
        assert_eq!(recorded.stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
        assert_eq!(recorded.unlocked, vec![Achievement::FirstVictory]);
        assert_eq!(recorded.stats.last_played, Some(game.timestamp));

        assert_eq!(profiles.stats(&user()).unwrap(), recorded.stats);

        let again = profiles.record_game(&user(), &won_in(2)).unwrap();
        assert_eq!(again.unlocked, vec![Achievement::WordWizard]);
        assert_eq!(again.stats.max_streak, 2);
    }

    #[test]
    fn record_game_appends_to_history() {
        let profiles = Profiles::new(Box::new(MemoryStore::new()));
        let lost = GameRecord::new("CRANE", vec!["AUDIO".into(); 6], false);

        profiles.record_game(&user(), &won_in(3)).unwrap();
        profiles.record_game(&user(), &lost).unwrap();

        let games = profiles.games(&user()).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].attempts, ["SLATE", "SLATE", "PLANE"]);
        assert_eq!(games[1], lost);

        profiles.reset(&user()).unwrap();
        assert_eq!(profiles.games(&user()).unwrap().len(), 2);
    }

    #[test]
    fn history_failure_keeps_saved_statistics() {
        let profiles = Profiles::new(Box::new(NoHistoryStore::default()));

        let recorded = profiles.record_game(&user(), &won_in(5)).unwrap();
        assert_eq!(recorded.stats.games_played, 1);
        assert_eq!(profiles.stats(&user()).unwrap(), recorded.stats);
        assert!(profiles.games(&user()).unwrap().is_empty());
    }

    #[test]
    fn invalid_outcome_saves_nothing() {
        let profiles = Profiles::new(Box::new(MemoryStore::new()));
        let err = profiles.record_game(&user(), &won_in(7)).unwrap_err();

        assert!(matches!(
            err,
            ProfileError::InvalidOutcome(StatsError::InvalidGuessCount(7))
        ));
        assert_eq!(profiles.store().fetch(&user()).unwrap(), None);
        assert!(profiles.games(&user()).unwrap().is_empty());
    }

    #[test]
    fn save_failure_returns_pending_stats() {
        let profiles = Profiles::new(Box::new(ReadOnlyStore));

        match profiles.record_game(&user(), &won_in(5)) {
            Err(ProfileError::Persistence { pending, source }) => {
                assert_eq!(pending.games_played, 1);
                assert_eq!(pending.guess_distribution[4], 1);
                assert!(matches!(source, StoreError::Io(_)));
            }
            other => panic!("expected persistence error, got {other:?}"),
        }

        assert!(matches!(
            profiles.reset(&user()),
            Err(ProfileError::Persistence { .. })
        ));
    }

    #[test]
    fn reset_clears_statistics() {
        let profiles = Profiles::new(Box::new(MemoryStore::new()));
        profiles.record_game(&user(), &won_in(1)).unwrap();

        assert_eq!(profiles.reset(&user()).unwrap(), PlayerStatistics::default());
        assert_eq!(profiles.stats(&user()).unwrap(), PlayerStatistics::default());
    }
}
