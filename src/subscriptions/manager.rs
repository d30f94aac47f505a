//! Ordered subscriber registry and notification fan-out.

use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::warn;

use crate::types::Keyed;

use super::types::{Callback, SubscriptionId};

/// One registered observer: callback plus its key filter.
struct Subscriber<T: Keyed> {
    id: SubscriptionId,
    keys: Arc<[T::Key]>,
    callback: Callback<T>,
}

/// Insertion-ordered set of live subscribers for one store.
///
/// The store is the sole owner of the entries; `Subscription` handles reach
/// back in through a `Weak` to remove themselves, so the collection itself
/// is never exposed.
pub(crate) struct SubscriberSet<T: Keyed> {
    /// Owning store's name, for log context.
    store: String,
    entries: RwLock<Vec<Subscriber<T>>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
}

impl<T: Keyed> SubscriberSet<T> {
    pub(crate) fn new(store: impl Into<String>) -> Self {
        Self {
            store: store.into(),
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a subscriber, appending it in insertion order.
    pub(crate) fn insert(&self, callback: Callback<T>, keys: Arc<[T::Key]>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.entries.write().push(Subscriber { id, keys, callback });
        id
    }

    /// Remove a subscriber by id. Removing an absent id is a no-op.
    pub(crate) fn remove(&self, id: SubscriptionId) {
        self.entries.write().retain(|s| s.id != id);
    }

    /// Number of live subscribers.
    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Notify subscribers of a state change.
    ///
    /// `Some(key)` selects subscribers whose key set is empty or contains
    /// `key`; `None` (wholesale replacement) selects everyone. Selected
    /// callbacks run synchronously in insertion order against the
    /// post-mutation state.
    ///
    /// The selection is snapshotted before any callback runs: the set
    /// notified is exactly the set registered at the moment of the mutation,
    /// and callbacks may subscribe or unsubscribe reentrantly without
    /// deadlocking on the registry lock.
    pub(crate) fn dispatch(&self, state: &T, key: Option<T::Key>) {
        let selected: Vec<(SubscriptionId, Callback<T>)> = {
            let entries = self.entries.read();
            entries
                .iter()
                .filter(|s| match key {
                    Some(key) => s.keys.is_empty() || s.keys.contains(&key),
                    None => true,
                })
                .map(|s| (s.id, Arc::clone(&s.callback)))
                .collect()
        };

        for (id, callback) in selected {
            // A panicking observer must not rob the rest of their notification.
            if catch_unwind(AssertUnwindSafe(|| callback(state))).is_err() {
                warn!(
                    store = %self.store,
                    subscription = id.0,
                    "subscriber callback panicked during notification"
                );
            }
        }
    }
}
