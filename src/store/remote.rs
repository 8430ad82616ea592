//! Hosted profile service over HTTP
//!
//! Profiles live at `{base}/users/{id}/stats`: `GET` returns the JSON record
//! (404 when the user has none) and `PUT` replaces it. Finished games are
//! `POST`ed one at a time to `{base}/users/{id}/games`, and `GET` on the same
//! URL lists them oldest first.

use super::{ProfileStore, StoreError, UserId};
use crate::stats::{GameRecord, PlayerStatistics};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;

const USER_AGENT: &str = concat!("wordle_mates/", env!("CARGO_PKG_VERSION"));

pub struct RemoteStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteStore {
    /// # Errors
    /// Returns `StoreError::Remote` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    #[must_use]
    pub fn stats_url(&self, user: &UserId) -> String {
        self.user_url(user, "stats")
    }

    #[must_use]
    pub fn games_url(&self, user: &UserId) -> String {
        self.user_url(user, "games")
    }

    fn user_url(&self, user: &UserId, resource: &str) -> String {
        format!(
            "{}/users/{}/{}",
            self.base_url.trim_end_matches('/'),
            user,
            resource
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl ProfileStore for RemoteStore {
    fn backend(&self) -> &'static str {
        "remote"
    }

    fn fetch(&self, user: &UserId) -> Result<Option<PlayerStatistics>, StoreError> {
        let url = self.stats_url(user);
        let response = self.authorize(self.client.get(&url)).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            log::debug!("no remote profile for {user}");
            return Ok(None);
        }

        let stats = response.error_for_status()?.json()?;
        Ok(Some(stats))
    }

    fn save(&self, user: &UserId, stats: &PlayerStatistics) -> Result<(), StoreError> {
        let url = self.stats_url(user);
        self.authorize(self.client.put(&url))
            .json(stats)
            .send()?
            .error_for_status()?;

        log::debug!("saved remote profile for {user}");
        Ok(())
    }

    fn append_game(&self, user: &UserId, game: &GameRecord) -> Result<(), StoreError> {
        let url = self.games_url(user);
        self.authorize(self.client.post(&url))
            .json(game)
            .send()?
            .error_for_status()?;

        log::debug!("posted game for {user}");
        Ok(())
    }

    fn games(&self, user: &UserId) -> Result<Vec<GameRecord>, StoreError> {
        let url = self.games_url(user);
        let response = self.authorize(self.client.get(&url)).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        Ok(response.error_for_status()?.json()?)
    }
}
