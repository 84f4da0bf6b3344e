//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It never
/// performs I/O itself: work that has to leave the transition (network
/// fetches, delayed follow-ups, cancellations) is described by the returned
/// [`Effect`] and carried out by the [`Store`](super::Store).
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Dependencies the effects need (catalog provider, debounce window).
    type Environment: Send + Sync + 'static;

    /// Process an intent and return the new state plus the effect to run.
    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        env: &Self::Environment,
    ) -> (Self::State, Effect<Self::Intent>);
}
