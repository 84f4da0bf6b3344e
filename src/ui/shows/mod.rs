//! Show search.
//!
//! Owns the query, the result list and the selected show, and embeds the
//! browse session of that show.
//!
//! # Architecture
//!
//! - `state.rs` - Search state and its projection onto the browse session
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions and the debounced search effect

mod intent;
mod reducer;
mod state;

pub use intent::ShowsIntent;
pub use reducer::{ShowsEnvironment, ShowsReducer};
pub use state::{SeasonsLens, ShowsState};
