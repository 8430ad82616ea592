//! Unlockable achievements

use super::{GameOutcome, PlayerStatistics};
use std::fmt;

/// Achievements a player can unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Achievement {
    /// Win any game
    FirstVictory,
    /// Win 5 games in a row
    StreakMaster,
    /// Win in 2 guesses or fewer
    WordWizard,
    /// Win 10 games in a row
    Champion,
}

impl Achievement {
    pub const ALL: [Self; 4] = [
        Self::FirstVictory,
        Self::StreakMaster,
        Self::WordWizard,
        Self::Champion,
    ];

    /// Stable identifier stored in `PlayerStatistics::achievements`
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FirstVictory => "first-victory",
            Self::StreakMaster => "streak-master",
            Self::WordWizard => "word-wizard",
            Self::Champion => "champion",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FirstVictory => "First Victory",
            Self::StreakMaster => "Streak Master",
            Self::WordWizard => "Word Wizard",
            Self::Champion => "Champion",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FirstVictory => "Complete your first game successfully",
            Self::StreakMaster => "Win 5 games in a row",
            Self::WordWizard => "Guess a word in 2 tries",
            Self::Champion => "Reach a 10-game win streak",
        }
    }

    /// Whether `stats` (already updated with `outcome`) qualifies
    #[must_use]
    pub fn is_earned(self, stats: &PlayerStatistics, outcome: &GameOutcome) -> bool {
        match self {
            Self::FirstVictory => stats.wins >= 1,
            Self::StreakMaster => stats.current_streak >= 5,
            Self::WordWizard => outcome.won && outcome.guesses_used <= 2,
            Self::Champion => stats.current_streak >= 10,
        }
    }

    /// Unlock everything `outcome` earned; returns the newly unlocked ones
    pub fn unlock_earned(stats: &mut PlayerStatistics, outcome: &GameOutcome) -> Vec<Self> {
        let mut unlocked = Vec::new();
        for achievement in Self::ALL {
            if achievement.is_earned(stats, outcome) && stats.unlock(achievement) {
                unlocked.push(achievement);
            }
        }
        unlocked
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
