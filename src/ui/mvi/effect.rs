//! Side effects returned by reducers.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use super::cancel::CancelId;

/// Work a reducer asks the store to perform after a transition.
pub enum Effect<I> {
    /// Nothing to do.
    None,
    /// Feed another intent back in, within the same transition step.
    Send(I),
    /// Run a future off the store and deliver its intent back to it.
    Task(Task<I>),
    /// Abort whatever is running under the given id.
    Cancel(CancelId),
    /// Run several effects, in order.
    Batch(Vec<Effect<I>>),
}

/// An asynchronous unit of work producing exactly one intent.
pub struct Task<I> {
    future: BoxFuture<'static, I>,
    cancel_id: Option<CancelId>,
    debounce: Option<Duration>,
}

impl<I> Task<I> {
    /// Identity the task is registered under, if it can be cancelled.
    pub fn cancel_id(&self) -> Option<CancelId> {
        self.cancel_id
    }

    /// Delay applied before the future is first polled.
    pub fn debounce(&self) -> Option<Duration> {
        self.debounce
    }

    pub fn into_parts(self) -> (BoxFuture<'static, I>, Option<CancelId>, Option<Duration>) {
        (self.future, self.cancel_id, self.debounce)
    }
}

impl<I: Send + 'static> Effect<I> {
    pub fn none() -> Self {
        Effect::None
    }

    pub fn send(intent: I) -> Self {
        Effect::Send(intent)
    }

    /// Wrap a future. It stays lazy until the store polls it, so nothing
    /// inside it runs if the task is cancelled while still pending.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = I> + Send + 'static,
    {
        Effect::Task(Task {
            future: future.boxed(),
            cancel_id: None,
            debounce: None,
        })
    }

    pub fn cancel(id: CancelId) -> Self {
        Effect::Cancel(id)
    }

    pub fn batch(effects: impl IntoIterator<Item = Effect<I>>) -> Self {
        Effect::Batch(effects.into_iter().collect())
    }

    /// Register every task in this effect under `id`.
    ///
    /// Starting a task under an id that is already running supersedes the
    /// previous task.
    pub fn cancellable(self, id: CancelId) -> Self {
        match self {
            Effect::Task(mut task) => {
                task.cancel_id = Some(id);
                Effect::Task(task)
            }
            Effect::Batch(effects) => {
                Effect::Batch(effects.into_iter().map(|e| e.cancellable(id)).collect())
            }
            other => other,
        }
    }

    /// Delay every task in this effect by `delay`, registered under `id`.
    ///
    /// A newer task under the same id cancels the pending one, so only the
    /// last task issued within the window ever runs.
    pub fn debounce(self, id: CancelId, delay: Duration) -> Self {
        match self.cancellable(id) {
            Effect::Task(mut task) => {
                task.debounce = Some(delay);
                Effect::Task(task)
            }
            Effect::Batch(effects) => Effect::Batch(
                effects
                    .into_iter()
                    .map(|e| e.debounce(id, delay))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Re-tag the intents this effect produces, e.g. to wrap a child
    /// machine's intents into its parent's intent type.
    pub fn map<J, F>(self, f: F) -> Effect<J>
    where
        J: Send + 'static,
        F: Fn(I) -> J + Send + Sync + 'static,
    {
        self.map_shared(Arc::new(f))
    }

    fn map_shared<J>(self, f: Arc<dyn Fn(I) -> J + Send + Sync>) -> Effect<J>
    where
        J: Send + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Send(intent) => Effect::Send(f(intent)),
            Effect::Cancel(id) => Effect::Cancel(id),
            Effect::Task(task) => Effect::Task(Task {
                future: task.future.map(move |intent| f(intent)).boxed(),
                cancel_id: task.cancel_id,
                debounce: task.debounce,
            }),
            Effect::Batch(effects) => Effect::Batch(
                effects
                    .into_iter()
                    .map(|e| e.map_shared(Arc::clone(&f)))
                    .collect(),
            ),
        }
    }
}

impl<I> Effect<I> {
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Flatten nested batches into the order the store would run them.
    pub fn into_steps(self) -> Vec<Effect<I>> {
        match self {
            Effect::None => Vec::new(),
            Effect::Batch(effects) => effects.into_iter().flat_map(Effect::into_steps).collect(),
            other => vec![other],
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Effect<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => f.write_str("None"),
            Effect::Send(intent) => f.debug_tuple("Send").field(intent).finish(),
            Effect::Task(task) => f
                .debug_struct("Task")
                .field("cancel_id", &task.cancel_id)
                .field("debounce", &task.debounce)
                .finish_non_exhaustive(),
            Effect::Cancel(id) => f.debug_tuple("Cancel").field(id).finish(),
            Effect::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
        }
    }
}
