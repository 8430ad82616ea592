//! Game sessions
//!
//! State machine for a single game: `InProgress` until a guess is all
//! correct (`Won`) or the sixth guess misses (`Lost`).

pub mod hard_mode;
mod session;

pub use hard_mode::HardModeViolation;
pub use session::{Game, GameError, GameState, Turn};
