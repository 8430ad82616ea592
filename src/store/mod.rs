//! Profile stores
//!
//! A [`ProfileStore`] persists one [`PlayerStatistics`] record per user,
//! plus an append-only list of [`GameRecord`]s.
//! The backend is picked from configuration by [`open_store`]; callers only
//! ever see the trait.

mod file;
mod memory;
mod remote;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

use crate::stats::{GameRecord, PlayerStatistics};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Longest accepted user identifier
const MAX_USER_ID_LEN: usize = 64;

/// Identifier a profile is keyed by
///
/// Restricted to ASCII letters, digits, `-` and `_` so it is safe as a file
/// name and a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// # Errors
    /// Returns `StoreError::InvalidUser` for empty, over-long or
    /// non `[A-Za-z0-9_-]` identifiers.
    pub fn new(id: impl Into<String>) -> Result<Self, StoreError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id.len() <= MAX_USER_ID_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(id))
        } else {
            Err(StoreError::InvalidUser(id))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistence failure
#[derive(Debug)]
pub enum StoreError {
    InvalidUser(String),
    Io(io::Error),
    Serialization(serde_json::Error),
    Remote(reqwest::Error),
    /// No location could be determined for the backend
    Unavailable(String),
    /// Another thread panicked while holding the store lock
    Poisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUser(id) => write!(f, "Invalid user id '{id}'"),
            Self::Io(e) => write!(f, "Profile storage I/O error: {e}"),
            Self::Serialization(e) => write!(f, "Malformed profile data: {e}"),
            Self::Remote(e) => write!(f, "Profile service request failed: {e}"),
            Self::Unavailable(reason) => write!(f, "Profile storage unavailable: {reason}"),
            Self::Poisoned => write!(f, "Profile store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<tempfile::PersistError> for StoreError {
    fn from(e: tempfile::PersistError) -> Self {
        Self::Io(e.error)
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        Self::Remote(e)
    }
}

/// Per-user statistics persistence
///
/// `save` must replace the whole record in one step so concurrent writers
/// never interleave partial updates.
pub trait ProfileStore: Send + Sync {
    /// Short backend name for logs
    fn backend(&self) -> &'static str;

    /// Stored statistics, or `None` if the user has no profile yet
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn fetch(&self, user: &UserId) -> Result<Option<PlayerStatistics>, StoreError>;

    /// Replace the user's statistics
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn save(&self, user: &UserId, stats: &PlayerStatistics) -> Result<(), StoreError>;

    /// Add one finished game to the user's history
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn append_game(&self, user: &UserId, game: &GameRecord) -> Result<(), StoreError>;

    /// The user's finished games, oldest first
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn games(&self, user: &UserId) -> Result<Vec<GameRecord>, StoreError>;

    /// Stored statistics, or the all-zero default
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn load(&self, user: &UserId) -> Result<PlayerStatistics, StoreError> {
        Ok(self.fetch(user)?.unwrap_or_default())
    }

    /// Overwrite the user's statistics with defaults and return them
    ///
    /// The game history is kept.
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn reset(&self, user: &UserId) -> Result<PlayerStatistics, StoreError> {
        let stats = PlayerStatistics::default();
        self.save(user, &stats)?;
        Ok(stats)
    }
}

/// Which backend to use, as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Lost when the process exits
    Memory,
    /// One JSON file per user; `dir` defaults to the platform data directory
    File {
        #[serde(default)]
        dir: Option<PathBuf>,
    },
    /// Hosted document service
    Remote {
        url: String,
        #[serde(default)]
        token: Option<String>,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::File { dir: None }
    }
}

const fn default_timeout_secs() -> u64 {
    10
}

/// Default directory for the file backend
#[must_use]
pub fn default_profile_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordle_mates").join("profiles"))
}

/// Open the configured backend
///
/// # Errors
/// Returns `StoreError` if the backend cannot be set up (no data directory
/// for the file store, HTTP client construction failure).
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn ProfileStore>, StoreError> {
    let store: Box<dyn ProfileStore> = match config {
        StoreConfig::Memory => Box::new(MemoryStore::new()),
        StoreConfig::File { dir } => {
            let dir = dir
                .clone()
                .or_else(default_profile_dir)
                .ok_or_else(|| StoreError::Unavailable("no data directory".to_string()))?;
            Box::new(FileStore::new(dir))
        }
        StoreConfig::Remote {
            url,
            token,
            timeout_secs,
        } => Box::new(RemoteStore::new(
            url.clone(),
            token.clone(),
            Duration::from_secs(*timeout_secs),
        )?),
    };
    log::info!("using {} profile store", store.backend());
    Ok(store)
}
