//! Player statistics
//!
//! The update rule is a pure function from the previous record and a game
//! outcome to the next record. Persistence lives in [`crate::store`].

mod achievements;
mod history;
mod player;

pub use achievements::Achievement;
pub use history::GameRecord;
pub use player::{GameOutcome, MAX_GUESSES, PlayerStatistics, StatsError};
