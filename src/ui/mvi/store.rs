//! Serial executor for a reducer and its effects.

use std::collections::VecDeque;
use std::marker::PhantomData;

use tokio::sync::{mpsc, watch};

use crate::shutdown::ShutdownHandle;

use super::cancel::{CancelId, CancelRegistry};
use super::effect::{Effect, Task};
use super::reducer::Reducer;

/// An intent waiting in the store's queue.
///
/// Intents produced by cancellable tasks carry the registration they came
/// from so stale results can be dropped on delivery.
struct Envelope<I> {
    intent: I,
    origin: Option<(CancelId, u64)>,
}

/// Owns a machine's state and runs every transition on one logical sequence.
///
/// Transitions are applied strictly in the order intents reach the queue.
/// Asynchronous effects run as tokio tasks and post their intent back onto
/// the queue, so state is never touched from more than one place at a time.
pub struct Store<R: Reducer> {
    state: R::State,
    env: R::Environment,
    tx: mpsc::UnboundedSender<Envelope<R::Intent>>,
    rx: mpsc::UnboundedReceiver<Envelope<R::Intent>>,
    published: watch::Sender<R::State>,
    cancellations: CancelRegistry,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State, env: R::Environment) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (published, _) = watch::channel(state.clone());
        Self {
            state,
            env,
            tx,
            rx,
            published,
            cancellations: CancelRegistry::new(),
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Watch the settled state after every transition step.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.published.subscribe()
    }

    pub fn handle(&self) -> StoreHandle<R::Intent> {
        StoreHandle {
            tx: self.tx.clone(),
            cancellations: self.cancellations.clone(),
        }
    }

    pub fn is_in_flight(&self, id: CancelId) -> bool {
        self.cancellations.is_in_flight(id)
    }

    /// Apply `intent` now, together with every synchronous follow-up it
    /// emits, then publish the resulting state once.
    ///
    /// Must be called from within a tokio runtime: task effects are spawned.
    pub fn send(&mut self, intent: R::Intent) {
        let mut pending = VecDeque::from([intent]);
        while let Some(intent) = pending.pop_front() {
            tracing::trace!(?intent, "Applying intent");
            let state = std::mem::take(&mut self.state);
            let (state, effect) = R::reduce(state, intent, &self.env);
            self.state = state;
            self.execute(effect, &mut pending);
        }
        self.published.send_replace(self.state.clone());
    }

    /// Wait for the next queued intent (from a task or a handle) and apply it.
    pub async fn process_next(&mut self) {
        // The store keeps its own sender, so the queue never closes.
        if let Some(envelope) = self.rx.recv().await {
            self.deliver(envelope);
        }
    }

    /// Apply the next queued intent if one is ready. Returns whether one was.
    pub fn try_process_next(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(envelope) => {
                self.deliver(envelope);
                true
            }
            Err(_) => false,
        }
    }

    /// Process intents until `shutdown` fires, then cancel everything still
    /// in flight and return the final state.
    pub async fn run(mut self, shutdown: ShutdownHandle) -> R::State {
        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                Some(envelope) = self.rx.recv() => self.deliver(envelope),
            }
        }
        tracing::info!("Store stopped");
        self.cancellations.cancel_all();
        std::mem::take(&mut self.state)
    }

    fn deliver(&mut self, envelope: Envelope<R::Intent>) {
        if let Some((id, generation)) = envelope.origin {
            if !self.cancellations.complete(id, generation) {
                tracing::debug!(?id, generation, "Dropping result of cancelled task");
                return;
            }
        }
        self.send(envelope.intent);
    }

    fn execute(&mut self, effect: Effect<R::Intent>, pending: &mut VecDeque<R::Intent>) {
        match effect {
            Effect::None => {}
            Effect::Send(intent) => pending.push_back(intent),
            Effect::Cancel(id) => {
                self.cancellations.cancel(id);
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    self.execute(effect, pending);
                }
            }
            Effect::Task(task) => self.spawn(task),
        }
    }

    fn spawn(&mut self, task: Task<R::Intent>) {
        let (future, cancel_id, debounce) = task.into_parts();
        let origin = cancel_id.map(|id| (id, self.cancellations.begin(id)));
        let tx = self.tx.clone();

        let join = tokio::spawn(async move {
            if let Some(delay) = debounce {
                tokio::time::sleep(delay).await;
            }
            let intent = future.await;
            // The store may be gone by now; nothing left to deliver to.
            let _ = tx.send(Envelope { intent, origin });
        });

        if let Some((id, generation)) = origin {
            self.cancellations.attach(id, generation, join.abort_handle());
        }
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        self.cancellations.cancel_all();
    }
}

/// Cloneable submitter for a running [`Store`].
pub struct StoreHandle<I> {
    tx: mpsc::UnboundedSender<Envelope<I>>,
    cancellations: CancelRegistry,
}

impl<I> Clone for StoreHandle<I> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            cancellations: self.cancellations.clone(),
        }
    }
}

impl<I> StoreHandle<I> {
    /// Queue an intent. Returns `false` if the store has been dropped.
    pub fn send(&self, intent: I) -> bool {
        self.tx
            .send(Envelope {
                intent,
                origin: None,
            })
            .is_ok()
    }

    pub fn is_in_flight(&self, id: CancelId) -> bool {
        self.cancellations.is_in_flight(id)
    }
}
