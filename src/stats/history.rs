//! Per-game history kept alongside the statistics record

use super::GameOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished game as stored by a profile store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// The target word
    pub word: String,
    pub won: bool,
    /// Number of guesses submitted
    pub guesses: u8,
    /// Every guess in submission order
    pub attempts: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl GameRecord {
    /// Record a game finished now
    #[must_use]
    pub fn new(word: impl Into<String>, attempts: Vec<String>, won: bool) -> Self {
        Self {
            word: word.into(),
            won,
            guesses: u8::try_from(attempts.len()).unwrap_or(u8::MAX),
            attempts,
            timestamp: Utc::now(),
        }
    }

    /// The outcome fed to [`super::PlayerStatistics::record`]
    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        if self.won {
            GameOutcome::win(self.guesses)
        } else {
            GameOutcome::loss()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_count_the_attempts() {
        let record = GameRecord::new(
            "PLANE",
            vec!["SLATE".into(), "PLACE".into(), "PLANE".into()],
            true,
        );
        assert_eq!(record.guesses, 3);
        assert_eq!(record.outcome(), GameOutcome::win(3));

        let lost = GameRecord::new("CRANE", vec!["AUDIO".into(); 6], false);
        assert_eq!(lost.outcome(), GameOutcome::loss());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = GameRecord::new("PLANE", vec!["PLANE".into()], true);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["word"], "PLANE");
        assert_eq!(json["won"], true);
        assert_eq!(json["guesses"], 1);
        assert_eq!(json["attempts"][0], "PLANE");
        assert!(json["timestamp"].is_string());
    }
}
