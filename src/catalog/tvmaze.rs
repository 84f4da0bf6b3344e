use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::CatalogConfig;

use super::{CatalogError, CatalogProvider, Episode, Season, Show, ShowResult};

/// Catalog provider backed by the TVMaze REST API.
pub struct TvMazeClient {
    client: Client,
    base_url: String,
}

impl TvMazeClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| CatalogError::Decode { url, source })
    }
}

/// Group a show's episode list into seasons.
///
/// Seasons come out ascending by number; episodes keep the order the API
/// listed them in, which is broadcast order.
fn group_into_seasons(episodes: Vec<Episode>) -> Vec<Season> {
    let mut by_season: BTreeMap<u32, Vec<Episode>> = BTreeMap::new();
    for episode in episodes {
        by_season.entry(episode.season).or_default().push(episode);
    }
    by_season
        .into_iter()
        .map(|(id, episodes)| Season { id, episodes })
        .collect()
}

#[async_trait]
impl CatalogProvider for TvMazeClient {
    async fn search(&self, query: &str) -> Result<Vec<Show>, CatalogError> {
        let url = format!("{}/search/shows", self.base_url);
        tracing::debug!(url = %url, query = %query, "Searching shows");

        let results: Vec<ShowResult> = self.get_json(url, &[("q", query)]).await?;

        tracing::debug!(query = %query, count = results.len(), "Show search completed");
        Ok(results.into_iter().map(|result| result.show).collect())
    }

    async fn seasons(&self, show_id: u64) -> Result<Vec<Season>, CatalogError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);
        tracing::debug!(url = %url, show_id, "Fetching episodes");

        let episodes: Vec<Episode> = self.get_json(url, &[]).await?;
        let seasons = group_into_seasons(episodes);

        tracing::debug!(show_id, seasons = seasons.len(), "Episode listing completed");
        Ok(seasons)
    }
}
