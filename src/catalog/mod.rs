//! Remote TV catalog access.
//!
//! The browser only needs two operations from a catalog: a free-text show
//! search and the season/episode listing of one show. [`CatalogProvider`]
//! is the seam the state machines depend on; [`TvMazeClient`] is the HTTP
//! implementation.

mod models;
mod tvmaze;

pub use models::{Episode, EpisodeImage, Season, Show, ShowResult};
pub use tvmaze::TvMazeClient;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog returned HTTP {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A source of shows and their seasons.
///
/// Each call yields exactly one result or one failure. Dropping the returned
/// future cancels the call with no further effect.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Shows matching `query`, in the provider's relevance order.
    async fn search(&self, query: &str) -> Result<Vec<Show>, CatalogError>;

    /// Seasons of the show with `show_id`, ascending by season number.
    async fn seasons(&self, show_id: u64) -> Result<Vec<Season>, CatalogError>;
}
