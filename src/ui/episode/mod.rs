//! Episode detail sheet.
//!
//! Purely local: no network, a single dismiss transition.

mod intent;
mod reducer;
mod state;

pub use intent::EpisodeIntent;
pub use reducer::{EpisodeEnvironment, EpisodeReducer};
pub use state::EpisodeState;
