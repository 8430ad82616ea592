//! Target selection and guess validation

use crate::core::Word;
use chrono::{NaiveDate, Utc};
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of the hidden word and the accepted-guess set
pub trait WordSource {
    /// Target for the current game
    fn current_target(&self) -> &Word;

    /// Whether `word` is in the accepted-guess set
    fn is_valid_guess(&self, word: &Word) -> bool;
}

/// How the target is picked for each new game
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSelection {
    /// Uniformly random answer every game
    #[default]
    Random,
    /// Same answer for everyone on a given (UTC) day
    Daily,
    /// Always this word
    #[serde(skip)]
    Fixed(Word),
}

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    EmptyAnswerList,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnswerList => write!(f, "Answer list contains no valid words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// First day of the daily rotation
const DAILY_EPOCH: Option<NaiveDate> = NaiveDate::from_ymd_opt(2021, 6, 19);

/// Answer list, accepted guesses and the current target
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
    selection: TargetSelection,
    target: Word,
}

impl Dictionary {
    /// Build a dictionary and pick the first target
    ///
    /// Answers are always accepted as guesses, as is a fixed target.
    ///
    /// # Errors
    /// Returns `DictionaryError::EmptyAnswerList` when `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
        selection: TargetSelection,
    ) -> Result<Self, DictionaryError> {
        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(answers.iter().cloned());
        if let TargetSelection::Fixed(word) = &selection {
            allowed.insert(word.clone());
        }

        let target = pick_target(&answers, &selection)?;
        log::debug!(
            "dictionary ready: {} answers, {} accepted guesses",
            answers.len(),
            allowed.len()
        );

        Ok(Self {
            answers,
            allowed,
            selection,
            target,
        })
    }

    /// Pick the target for a new game
    ///
    /// # Errors
    /// Never fails for a dictionary built by [`Dictionary::new`]; the answer
    /// list cannot become empty afterwards.
    pub fn next_target(&mut self) -> Result<&Word, DictionaryError> {
        self.target = pick_target(&self.answers, &self.selection)?;
        Ok(&self.target)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    #[must_use]
    pub const fn selection(&self) -> &TargetSelection {
        &self.selection
    }
}

impl WordSource for Dictionary {
    fn current_target(&self) -> &Word {
        &self.target
    }

    fn is_valid_guess(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }
}

fn pick_target(answers: &[Word], selection: &TargetSelection) -> Result<Word, DictionaryError> {
    if let TargetSelection::Fixed(word) = selection {
        return Ok(word.clone());
    }
    if answers.is_empty() {
        return Err(DictionaryError::EmptyAnswerList);
    }

    let index = match selection {
        TargetSelection::Daily => daily_index(Utc::now().date_naive(), answers.len()),
        _ => rand::rng().random_range(0..answers.len()),
    };
    Ok(answers[index].clone())
}

/// Index of the answer for `date`, cycling through the list one per day
#[must_use]
pub fn daily_index(date: NaiveDate, answer_count: usize) -> usize {
    let epoch = DAILY_EPOCH.unwrap_or_default();
    let days = (date - epoch).num_days();
    days.rem_euclid(answer_count.max(1) as i64) as usize
}
