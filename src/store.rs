//! The observable store: one typed value plus its subscribers.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::subscriptions::{SubscriberSet, Subscription};
use crate::types::{Field, Keyed};

/// A named, observable container for a single value of shape `T`.
///
/// The store holds the current state, the immutable default captured at
/// construction, and the live set of subscriptions. Mutations replace the
/// state with a fresh value (never edit it in place) and then notify
/// matching subscribers synchronously, in subscription order, before the
/// mutating call returns.
///
/// Stores are independent: any number may coexist, each with its own name,
/// state, and subscribers. `Store<T>` is `Send + Sync` when `T` is, so it
/// can be shared across threads behind an `Arc`; notification still runs
/// in-line on whichever thread performs the mutation.
pub struct Store<T: Keyed> {
    /// Identifying name, non-empty.
    name: String,

    /// Baseline value, fixed at construction.
    default_value: T,

    /// Current value, replaced wholesale on every write.
    state: RwLock<T>,

    /// Live subscriptions, insertion ordered.
    subscribers: Arc<SubscriberSet<T>>,
}

impl<T: Keyed + Clone> Store<T> {
    /// Create a store named `name` holding `default_value`.
    ///
    /// Fails with [`StoreError::InvalidName`] when `name` is empty.
    pub fn new(name: impl Into<String>, default_value: T) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let state = RwLock::new(default_value.clone());
        let subscribers = Arc::new(SubscriberSet::new(name.clone()));

        Ok(Self {
            name,
            default_value,
            state,
            subscribers,
        })
    }

    /// The store's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The baseline value captured at construction.
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> T {
        self.state.read().clone()
    }

    /// Replace one field with `value`, leaving every other field as-is,
    /// then notify subscribers scoped to that field.
    ///
    /// The replacement is a single assignment under the write lock; readers
    /// never observe a partially-updated value. Cannot fail: the
    /// [`Field`] descriptor ties `value`'s type to the field at compile
    /// time.
    pub fn set_value<V>(&self, field: &Field<T, V>, value: V) {
        let key = field.key();
        let snapshot = {
            let mut state = self.state.write();
            let mut next = state.clone();
            field.apply(&mut next, value);
            *state = next;
            state.clone()
        };

        debug!(store = %self.name, key = ?key, "field updated");
        self.subscribers.dispatch(&snapshot, Some(key));
    }

    /// Replace the whole state with `state`, then notify every subscriber
    /// regardless of its key filter. A wholesale replacement means
    /// everything may have changed.
    pub fn set_state(&self, state: T) {
        let snapshot = {
            let mut current = self.state.write();
            *current = state;
            current.clone()
        };

        debug!(store = %self.name, "state replaced");
        self.subscribers.dispatch(&snapshot, None);
    }

    /// Restore the construction-time default value, then notify every
    /// subscriber, as with [`set_state`](Store::set_state).
    pub fn reset(&self) {
        let snapshot = {
            let mut current = self.state.write();
            *current = self.default_value.clone();
            current.clone()
        };

        debug!(store = %self.name, "state reset to default");
        self.subscribers.dispatch(&snapshot, None);
    }

    /// Register an observer and return its [`Subscription`] handle.
    ///
    /// `keys` scopes the subscription to specific fields; an empty slice
    /// observes every change. The key set is fixed for the subscription's
    /// lifetime. Callbacks run synchronously inside the mutating call with
    /// the post-mutation state; a callback that panics is isolated and
    /// never suppresses notification of the others.
    pub fn subscribe(
        &self,
        callback: impl Fn(&T) + Send + Sync + 'static,
        keys: &[T::Key],
    ) -> Subscription<T> {
        let keys: Arc<[T::Key]> = keys.into();
        let id = self.subscribers.insert(Arc::new(callback), Arc::clone(&keys));

        debug!(store = %self.name, subscription = id.0, keys = ?&*keys, "subscriber registered");
        Subscription::new(id, keys, Arc::downgrade(&self.subscribers))
    }

    /// Number of currently live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Cursor {
        row: u32,
        col: u32,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum CursorKey {
        Row,
        Col,
    }

    impl Keyed for Cursor {
        type Key = CursorKey;
    }

    const ROW: Field<Cursor, u32> = Field::new(CursorKey::Row, |c, v| c.row = v);

    #[test]
    fn test_empty_name_rejected() {
        let result = Store::new("", Cursor { row: 0, col: 0 });
        assert!(matches!(result, Err(StoreError::InvalidName)));
    }

    #[test]
    fn test_initial_state_is_default() {
        let store = Store::new("cursor", Cursor { row: 3, col: 7 }).unwrap();
        assert_eq!(store.state(), Cursor { row: 3, col: 7 });
        assert_eq!(store.name(), "cursor");
        assert_eq!(store.subscription_count(), 0);
    }

    #[test]
    fn test_set_value_is_shallow_merge() {
        let store = Store::new("cursor", Cursor { row: 3, col: 7 }).unwrap();
        store.set_value(&ROW, 9);
        assert_eq!(store.state(), Cursor { row: 9, col: 7 });
    }

    #[test]
    fn test_stores_are_independent() {
        let a = Store::new("a", Cursor { row: 0, col: 0 }).unwrap();
        let b = Store::new("b", Cursor { row: 5, col: 5 }).unwrap();

        a.set_value(&ROW, 1);
        assert_eq!(a.state().row, 1);
        assert_eq!(b.state().row, 5);
    }
}
