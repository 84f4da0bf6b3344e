//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the pieces for unidirectional data flow with
//! asynchronous side effects.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect)
//!    ↑                     │       │
//!    │                     ↓       ↓
//!    │                   View    Store runs effect
//!    └─────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function `(State, Intent, &Env) -> (State, Effect)`
//! - **Effect**: Description of follow-up work (async task, cancellation)
//! - **Lens**: Projection of a parent state onto a child machine's state
//! - **Store**: Serial executor owning the state and running effects

mod cancel;
mod effect;
mod intent;
mod lens;
mod reducer;
mod state;
mod store;

pub use cancel::{CancelId, CancelRegistry};
pub use effect::{Effect, Task};
pub use intent::Intent;
pub use lens::{pullback, Lens};
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, StoreHandle};
