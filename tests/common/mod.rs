//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_tvmaze;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use tvmaze_browser::catalog::{CatalogError, CatalogProvider, Episode, Season, Show};
use tvmaze_browser::ui::shows::ShowsEnvironment;

// -- Fixtures -----------------------------------------------------------------

pub fn show(id: u64, name: &str) -> Show {
    Show {
        id,
        name: name.to_string(),
    }
}

pub fn episode(id: u64, season: u32, number: u32, name: &str) -> Episode {
    Episode {
        id,
        url: format!("https://www.tvmaze.com/episodes/{}", id),
        name: name.to_string(),
        season,
        number,
        airdate: "2008-01-20".to_string(),
        runtime: Some(47),
        image: None,
        summary: Some("<p>Summary</p>".to_string()),
    }
}

pub fn season(id: u32, episodes: Vec<Episode>) -> Season {
    Season { id, episodes }
}

// -- Scripted provider --------------------------------------------------------

type Scripted<T> = Result<T, u16>;

/// In-memory catalog that answers from a script and records every call.
///
/// Calls are recorded when the provider is actually polled, so a search
/// cancelled during its debounce never shows up in `search_calls`.
/// Unscripted queries answer with an empty list.
#[derive(Default)]
pub struct ScriptedProvider {
    searches: Mutex<HashMap<String, Scripted<Vec<Show>>>>,
    seasons: Mutex<HashMap<u64, Scripted<Vec<Season>>>>,
    search_calls: Mutex<Vec<String>>,
    season_calls: Mutex<Vec<u64>>,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, query: &str, shows: Vec<Show>) -> Self {
        self.searches.lock().insert(query.to_string(), Ok(shows));
        self
    }

    pub fn with_search_failure(self, query: &str, status: u16) -> Self {
        self.searches.lock().insert(query.to_string(), Err(status));
        self
    }

    pub fn with_seasons(self, show_id: u64, seasons: Vec<Season>) -> Self {
        self.seasons.lock().insert(show_id, Ok(seasons));
        self
    }

    pub fn with_seasons_failure(self, show_id: u64, status: u16) -> Self {
        self.seasons.lock().insert(show_id, Err(status));
        self
    }

    /// Make every call take `delay` after it has been recorded.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().clone()
    }

    pub fn season_calls(&self) -> Vec<u64> {
        self.season_calls.lock().clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn failure(url: String, status: u16) -> CatalogError {
    CatalogError::Status { url, status }
}

#[async_trait]
impl CatalogProvider for ScriptedProvider {
    async fn search(&self, query: &str) -> Result<Vec<Show>, CatalogError> {
        self.search_calls.lock().push(query.to_string());
        self.pause().await;
        let scripted = self.searches.lock().get(query).cloned();
        match scripted {
            Some(Ok(shows)) => Ok(shows),
            Some(Err(status)) => Err(failure(format!("/search/shows?q={}", query), status)),
            None => Ok(Vec::new()),
        }
    }

    async fn seasons(&self, show_id: u64) -> Result<Vec<Season>, CatalogError> {
        self.season_calls.lock().push(show_id);
        self.pause().await;
        let scripted = self.seasons.lock().get(&show_id).cloned();
        match scripted {
            Some(Ok(seasons)) => Ok(seasons),
            Some(Err(status)) => Err(failure(format!("/shows/{}/episodes", show_id), status)),
            None => Ok(Vec::new()),
        }
    }
}

/// Search environment over `provider` with the given debounce window.
pub fn shows_env(provider: Arc<ScriptedProvider>, debounce: Duration) -> ShowsEnvironment {
    ShowsEnvironment::new(provider, debounce)
}

// -- Config helpers -----------------------------------------------------------

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
