//! One game from first guess to win or loss

use super::hard_mode::{self, HardModeViolation};
use crate::core::{Evaluation, KeyboardState, Word, WordError};
use crate::stats::{GameOutcome, GameRecord, MAX_GUESSES};
use crate::wordlists::WordSource;
use std::fmt;

/// Lifecycle of a game; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Why a guess was rejected; a rejected guess never advances the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidWord(WordError),
    NotInWordList(Word),
    HardMode(HardModeViolation),
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::NotInWordList(word) => write!(f, "{word} is not in the word list"),
            Self::HardMode(violation) => write!(f, "{violation}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<HardModeViolation> for GameError {
    fn from(v: HardModeViolation) -> Self {
        Self::HardMode(v)
    }
}

/// Game session state
///
/// Owned by the caller (TUI, line mode, tests). Each accepted guess is run
/// through [`Evaluation::calculate`] and folded into the keyboard.
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    hard_mode: bool,
    turns: Vec<Turn>,
    keyboard: KeyboardState,
    state: GameState,
}

impl Game {
    #[must_use]
    pub fn new(target: Word, hard_mode: bool) -> Self {
        log::debug!("new game (hard mode: {hard_mode})");
        Self {
            target,
            hard_mode,
            turns: Vec::with_capacity(MAX_GUESSES),
            keyboard: KeyboardState::new(),
            state: GameState::InProgress,
        }
    }

    /// Start a game on the source's current target
    #[must_use]
    pub fn from_source<S: WordSource + ?Sized>(words: &S, hard_mode: bool) -> Self {
        Self::new(words.current_target().clone(), hard_mode)
    }

    /// Submit a guess
    ///
    /// # Errors
    /// - `InvalidWord` if `guess` is not five letters
    /// - `GameOver` if the game already ended
    /// - `NotInWordList` if `words` does not accept the guess
    /// - `HardMode` if hard mode is on and an earlier hint is ignored
    ///
    /// # Examples
    /// ```
    /// use wordle_mates::core::Word;
    /// use wordle_mates::game::{Game, GameState};
    /// use wordle_mates::wordlists::{Dictionary, TargetSelection};
    /// use wordle_mates::wordlists::loader::words_from_slice;
    ///
    /// let target = Word::new("plane").unwrap();
    /// let words = Dictionary::new(
    ///     words_from_slice(&["plane", "slate"]),
    ///     Vec::new(),
    ///     TargetSelection::Fixed(target.clone()),
    /// )
    /// .unwrap();
    ///
    /// let mut game = Game::new(target, false);
    /// game.submit("slate", &words).unwrap();
    /// game.submit("plane", &words).unwrap();
    /// assert_eq!(game.state(), GameState::Won);
    /// ```
    pub fn submit<S: WordSource + ?Sized>(
        &mut self,
        guess: &str,
        words: &S,
    ) -> Result<&Turn, GameError> {
        let guess = Word::new(guess.trim())?;

        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !words.is_valid_guess(&guess) {
            return Err(GameError::NotInWordList(guess));
        }
        if self.hard_mode {
            hard_mode::check(&guess, &self.turns)?;
        }

        let evaluation = Evaluation::calculate(&guess, &self.target);
        self.keyboard.record(&guess, &evaluation);

        self.state = if evaluation.is_solved() {
            GameState::Won
        } else if self.turns.len() + 1 >= MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        log::debug!(
            "guess {} of {MAX_GUESSES}: {guess} -> {evaluation} ({:?})",
            self.turns.len() + 1,
            self.state
        );

        self.turns.push(Turn { guess, evaluation });
        Ok(&self.turns[self.turns.len() - 1])
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.turns.len()
    }

    /// Outcome to feed the statistics once the game has ended
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            GameState::InProgress => None,
            GameState::Won => Some(GameOutcome::win(self.turns.len() as u8)),
            GameState::Lost => Some(GameOutcome::loss()),
        }
    }

    /// History entry for a finished game; `None` while in progress
    #[must_use]
    pub fn record(&self) -> Option<GameRecord> {
        self.is_over().then(|| {
            let attempts = self
                .turns
                .iter()
                .map(|turn| turn.guess.text().to_string())
                .collect();
            GameRecord::new(self.target.text(), attempts, self.state == GameState::Won)
        })
    }
}
