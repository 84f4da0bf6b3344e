//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing a query, picking a show or an episode)
/// - System events (catalog responses delivered by effects)
/// - Child-machine intents wrapped by their parent
///
/// Intents are processed by reducers to produce new states. `Debug` is
/// required so the store can trace every transition it runs.
pub trait Intent: Debug + Send + 'static {}
