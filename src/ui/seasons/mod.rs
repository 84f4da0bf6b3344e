//! Season/episode browsing for the selected show.
//!
//! # Architecture
//!
//! - `state.rs` - Browse session state and its projection onto the detail sheet
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions and the season fetch effect

mod intent;
mod reducer;
mod state;

pub use intent::SeasonsIntent;
pub use reducer::{SeasonsEnvironment, SeasonsReducer};
pub use state::{EpisodeLens, SeasonsState};
