//! Cancellation identities and the registry of in-flight tasks.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::AbortHandle;

/// Identity of a class of cancellable operation.
///
/// At most one task runs per id: starting a new one supersedes the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelId {
    /// Debounced catalog search for the current query.
    Search,
    /// Season/episode fetch for the selected show.
    LoadSeasons,
}

struct Running {
    generation: u64,
    handle: Option<AbortHandle>,
}

#[derive(Default)]
struct RegistryInner {
    next_generation: u64,
    running: HashMap<CancelId, Running>,
}

/// Maps each [`CancelId`] to the abort handle of the task running under it.
///
/// Every registration gets a fresh generation number. A task's result is
/// only accepted if its generation is still the current one for its id, so
/// results from superseded or cancelled tasks are never delivered even when
/// they already sit in the store's queue.
#[derive(Clone, Default)]
pub struct CancelRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl CancelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `id` for a new task, aborting the one it supersedes.
    pub fn begin(&self, id: CancelId) -> u64 {
        let mut inner = self.inner.lock();
        if let Some(previous) = inner.running.remove(&id) {
            tracing::debug!(?id, generation = previous.generation, "Superseding in-flight task");
            if let Some(handle) = previous.handle {
                handle.abort();
            }
        }
        inner.next_generation += 1;
        let generation = inner.next_generation;
        inner.running.insert(
            id,
            Running {
                generation,
                handle: None,
            },
        );
        generation
    }

    /// Attach the spawned task's abort handle to a reservation.
    ///
    /// If the reservation was cancelled in the meantime the task is aborted
    /// right away.
    pub fn attach(&self, id: CancelId, generation: u64, handle: AbortHandle) {
        let mut inner = self.inner.lock();
        match inner.running.get_mut(&id) {
            Some(running) if running.generation == generation => running.handle = Some(handle),
            _ => handle.abort(),
        }
    }

    /// Cancel whatever runs under `id`. Returns whether anything was running.
    pub fn cancel(&self, id: CancelId) -> bool {
        let removed = self.inner.lock().running.remove(&id);
        match removed {
            Some(running) => {
                if let Some(handle) = running.handle {
                    handle.abort();
                }
                tracing::debug!(?id, generation = running.generation, "Cancelled in-flight task");
                true
            }
            None => {
                tracing::trace!(?id, "Cancel requested with nothing in flight");
                false
            }
        }
    }

    /// Mark a task as delivered. Returns `false` if the task was superseded
    /// or cancelled, in which case its result must be dropped.
    pub fn complete(&self, id: CancelId, generation: u64) -> bool {
        let mut inner = self.inner.lock();
        let current = inner
            .running
            .get(&id)
            .is_some_and(|running| running.generation == generation);
        if current {
            inner.running.remove(&id);
        }
        current
    }

    pub fn is_in_flight(&self, id: CancelId) -> bool {
        self.inner.lock().running.contains_key(&id)
    }

    pub fn cancel_all(&self) {
        let drained: Vec<(CancelId, Running)> = self.inner.lock().running.drain().collect();
        for (id, running) in drained {
            if let Some(handle) = running.handle {
                handle.abort();
            }
            tracing::debug!(?id, "Cancelled in-flight task on shutdown");
        }
    }
}
