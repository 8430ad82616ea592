//! Per-player statistics and the update rule applied after every game

use super::Achievement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum guesses in a game, and the number of distribution buckets
pub const MAX_GUESSES: usize = 6;

/// Result of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    pub won: bool,
    /// Guesses submitted; only meaningful for wins (1-6)
    pub guesses_used: u8,
}

impl GameOutcome {
    #[must_use]
    pub const fn win(guesses_used: u8) -> Self {
        Self {
            won: true,
            guesses_used,
        }
    }

    #[must_use]
    pub const fn loss() -> Self {
        Self {
            won: false,
            guesses_used: MAX_GUESSES as u8,
        }
    }
}

/// Error type for rejected statistics updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A win reported with a guess count outside 1-6
    InvalidGuessCount(u8),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessCount(n) => {
                write!(f, "A win must take between 1 and {MAX_GUESSES} guesses, got {n}")
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// Cross-session performance record for one player
///
/// Serialized with camelCase keys; missing keys fall back to defaults so
/// partially written documents still load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatistics {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Index 0 = won in 1 guess, index 5 = won in 6
    pub guess_distribution: [u32; MAX_GUESSES],
    /// Sum of guesses over won games
    pub total_guesses: u32,
    /// `total_guesses / wins`, rounded to one decimal; 0 until the first win
    pub average_guesses: f64,
    pub achievements: BTreeSet<String>,
    /// Stamped by the profile layer when a game is recorded
    pub last_played: Option<DateTime<Utc>>,
}

impl PlayerStatistics {
    /// Compute the statistics after one more finished game
    ///
    /// `self` is left untouched; the caller decides when to persist the result.
    ///
    /// # Errors
    /// Returns `StatsError::InvalidGuessCount` for a win outside 1-6 guesses.
    ///
    /// # Examples
    /// ```
    /// use wordle_mates::stats::{GameOutcome, PlayerStatistics};
    ///
    /// let stats = PlayerStatistics::default()
    ///     .record(&GameOutcome::win(3))
    ///     .unwrap();
    /// assert_eq!(stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
    /// assert!((stats.average_guesses - 3.0).abs() < f64::EPSILON);
    /// ```
    pub fn record(&self, outcome: &GameOutcome) -> Result<Self, StatsError> {
        let mut next = self.clone();
        next.games_played = next.games_played.saturating_add(1);

        if outcome.won {
            let bucket = distribution_bucket(outcome.guesses_used)?;
            next.wins = next.wins.saturating_add(1);
            next.current_streak = next.current_streak.saturating_add(1);
            next.max_streak = next.max_streak.max(next.current_streak);
            next.guess_distribution[bucket] = next.guess_distribution[bucket].saturating_add(1);
            next.total_guesses = next
                .total_guesses
                .saturating_add(u32::from(outcome.guesses_used));
        } else {
            next.current_streak = 0;
        }

        if next.wins > 0 {
            next.average_guesses = round_one_decimal(next.total_guesses, next.wins);
        }

        Ok(next)
    }

    /// Replace every counter with its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Share of games won, as a whole percentage
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.wins) / f64::from(self.games_played) * 100.0).round() as u32
    }

    /// Largest distribution bucket, for scaling bar charts
    #[must_use]
    pub fn max_distribution(&self) -> u32 {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }

    /// Add an achievement; returns `false` if it was already unlocked
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        self.achievements.insert(achievement.id().to_string())
    }

    #[must_use]
    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(achievement.id())
    }
}

fn distribution_bucket(guesses_used: u8) -> Result<usize, StatsError> {
    match usize::from(guesses_used) {
        n @ 1..=MAX_GUESSES => Ok(n - 1),
        _ => Err(StatsError::InvalidGuessCount(guesses_used)),
    }
}

fn round_one_decimal(total: u32, count: u32) -> f64 {
    (f64::from(total) / f64::from(count) * 10.0).round() / 10.0
}
