//! Local JSON files, one per user

use super::{ProfileStore, StoreError, UserId};
use crate::stats::{GameRecord, PlayerStatistics};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores each profile at `{dir}/{user}.json` and its game history, one JSON
/// record per line, at `{dir}/{user}.games.jsonl`
///
/// Every save writes a uniquely named temp file in `dir` and renames it over
/// the target, so readers see either the old or the new record and
/// concurrent savers never share a temp file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn profile_path(&self, user: &UserId) -> PathBuf {
        self.dir.join(format!("{user}.json"))
    }

    #[must_use]
    pub fn history_path(&self, user: &UserId) -> PathBuf {
        self.dir.join(format!("{user}.games.jsonl"))
    }
}

impl ProfileStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    fn fetch(&self, user: &UserId) -> Result<Option<PlayerStatistics>, StoreError> {
        let path = self.profile_path(user);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no profile at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, user: &UserId, stats: &PlayerStatistics) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.profile_path(user);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, stats)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)?;

        log::debug!("saved profile to {}", path.display());
        Ok(())
    }

    fn append_game(&self, user: &UserId, game: &GameRecord) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.history_path(user);
        let mut line = serde_json::to_vec(game)?;
        line.push(b'\n');

        // One write per record so concurrent appenders never split a line
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(&line)?;

        log::debug!("appended game to {}", path.display());
        Ok(())
    }

    fn games(&self, user: &UserId) -> Result<Vec<GameRecord>, StoreError> {
        let path = self.history_path(user);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(StoreError::from))
            .collect()
    }
}
