//! State machines behind the browser's screens.
//!
//! `shows` (search) embeds `seasons` (browse session of the selected show),
//! which embeds `episode` (detail sheet). `app` is the root the store runs.

pub mod app;
pub mod episode;
pub mod mvi;
pub mod seasons;
pub mod shows;
