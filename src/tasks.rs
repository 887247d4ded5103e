//! Keyed async task manager
//!
//! Tasks with the same key are mutually exclusive: scheduling under a key
//! that is already occupied aborts the previous task first. The debounced
//! variant sleeps before running, so re-scheduling within the delay resets
//! the timer. This is the single-slot debounce: at most one pending lookup
//! per key, cancel-then-schedule on every trigger. An aborted task sends
//! nothing back.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::store::Action;

/// Identifies a task slot for cancellation and replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

/// Owns the async side of the dispatch loop.
///
/// Each completed task sends its resulting action back over the channel
/// given at construction; the main loop feeds it into the reducer.
pub struct TaskManager<A> {
    slots: HashMap<TaskKey, tokio::task::JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            slots: HashMap::new(),
            action_tx,
        }
    }

    /// Run the future now, replacing whatever occupies the key.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F)
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.schedule(key.into(), None, future);
    }

    /// Run the future after `delay`, replacing whatever occupies the key.
    ///
    /// Calling again with the same key before the delay expires restarts
    /// the timer.
    pub fn debounce<F>(&mut self, key: impl Into<TaskKey>, delay: Duration, future: F)
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.schedule(key.into(), Some(delay), future);
    }

    fn schedule<F>(&mut self, key: TaskKey, delay: Option<Duration>, future: F)
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.cancel(&key);
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let _ = tx.send(future.await);
        });
        self.slots.insert(key, handle);
    }

    /// Abort the task under the key. No-op if the slot is empty.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.slots.remove(key) {
            handle.abort();
        }
    }

    /// Abort everything, e.g. on shutdown.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.slots.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.slots.contains_key(key)
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.slots.drain() {
            handle.abort();
        }
    }
}
