//! Catalog records as served by the TVMaze API.
//!
//! Unknown JSON fields are ignored, so these types only carry what the
//! browser uses.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One entry of a `/search/shows` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowResult {
    pub score: f64,
    pub show: Show,
}

/// A searchable show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
}

/// The episodes of one season of a show, in broadcast order.
///
/// Seasons are identified by their number: two seasons with the same id
/// compare equal regardless of their episodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: u32,
    pub episodes: Vec<Episode>,
}

impl PartialEq for Season {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Season {}

impl Hash for Season {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A single episode. Identity is the TVMaze episode id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub url: String,
    pub name: String,
    pub season: u32,
    pub number: u32,
    /// Broadcast date as `YYYY-MM-DD`; empty when unknown.
    #[serde(default)]
    pub airdate: String,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub image: Option<EpisodeImage>,
    /// HTML summary.
    #[serde(default)]
    pub summary: Option<String>,
}

impl PartialEq for Episode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Episode {}

impl Hash for Episode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Artwork URLs for an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeImage {
    pub medium: String,
    pub original: String,
}
