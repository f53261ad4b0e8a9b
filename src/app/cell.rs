//! Observable state container with stale-update detection.
//!
//! [`StateCell`] is the single source of truth for one UI concern. It wraps a
//! `tokio::sync::watch` channel, so readers get immutable snapshots and
//! subscribers get change notification, and it carries a generation counter so
//! that a superseded asynchronous operation's late result is detected and
//! discarded instead of clobbering newer state.
//!
//! # Single-writer discipline
//!
//! Each concern's state is written only by that concern's own trigger
//! operations, and every write goes through one of the entry points here:
//! [`begin`](StateCell::begin) + [`publish`](StateCell::publish) for
//! generation-guarded operations, [`set`](StateCell::set) for unconditional
//! writes that also supersede anything in flight, and
//! [`modify`](StateCell::modify) for edits that must not supersede a pending
//! operation (e.g. input-field typing during a scheduled reset).

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

/// Observable single-writer state container for one concern.
pub struct StateCell<T> {
    tx: watch::Sender<T>,
    generation: AtomicU64,
}

impl<T: Clone> StateCell<T> {
    /// Creates a cell holding the given initial state at generation zero.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Returns an immutable snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver observes every published value; consumers render the
    /// snapshot behind it with exhaustive matching.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Opens a new generation, superseding any operation still in flight.
    ///
    /// A trigger operation calls this once up front and tags all of its
    /// writes with the returned token.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publishes a value if the given generation is still current.
    ///
    /// Returns `false` (and leaves the state untouched) when a newer
    /// generation has been opened since — the caller's operation was
    /// superseded and its result is discarded.
    pub fn publish(&self, generation: u64, value: T) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "discarding superseded state update");
            return false;
        }
        self.tx.send_replace(value);
        true
    }

    /// Publishes a value unconditionally, superseding any pending operation.
    pub fn set(&self, value: T) {
        let generation = self.begin();
        self.publish(generation, value);
    }

    /// Edits the current state in place without touching the generation.
    ///
    /// Use for writes that should coexist with a pending generation-guarded
    /// operation rather than cancel it.
    pub fn modify(&self, edit: impl FnOnce(&mut T)) {
        self.tx.send_modify(edit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_with_current_generation_updates_state() {
        let cell = StateCell::new(0);
        let generation = cell.begin();

        assert!(cell.publish(generation, 7));
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn superseded_generation_is_discarded() {
        let cell = StateCell::new(0);

        let stale = cell.begin();
        let fresh = cell.begin();
        assert!(cell.publish(fresh, 2));

        // The slower operation finishes afterwards; its result must not win.
        assert!(!cell.publish(stale, 1));
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn set_supersedes_pending_operation() {
        let cell = StateCell::new(0);

        let pending = cell.begin();
        cell.set(5);

        assert!(!cell.publish(pending, 1));
        assert_eq!(cell.get(), 5);
    }

    #[test]
    fn modify_leaves_pending_generation_valid() {
        let cell = StateCell::new(0);

        let pending = cell.begin();
        cell.modify(|v| *v = 3);

        assert_eq!(cell.get(), 3);
        assert!(cell.publish(pending, 9));
        assert_eq!(cell.get(), 9);
    }

    #[tokio::test]
    async fn subscribers_observe_published_values() {
        let cell = StateCell::new(0);
        let mut rx = cell.subscribe();

        cell.set(4);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 4);
    }
}
