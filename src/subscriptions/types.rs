//! Subscription types for store observers.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::types::Keyed;

use super::manager::SubscriberSet;

/// Unique identifier for a subscription.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

/// Observer callback, invoked with the post-mutation state during fan-out.
pub(crate) type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle to a registered observer.
///
/// Returned by [`Store::subscribe`](crate::Store::subscribe). Carries the
/// watched key set and a removal capability back into the owning store's
/// registry; it holds neither the state nor a strong reference to the store,
/// so an outstanding handle never keeps a dropped store alive.
pub struct Subscription<T: Keyed> {
    id: SubscriptionId,
    keys: Arc<[T::Key]>,
    registry: Weak<SubscriberSet<T>>,
}

impl<T: Keyed> Subscription<T> {
    pub(crate) fn new(
        id: SubscriptionId,
        keys: Arc<[T::Key]>,
        registry: Weak<SubscriberSet<T>>,
    ) -> Self {
        Self { id, keys, registry }
    }

    /// This subscription's id.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The field keys this subscription watches, fixed at creation.
    /// Empty means every change.
    pub fn keys(&self) -> &[T::Key] {
        &self.keys
    }

    /// Remove this subscription from its store.
    ///
    /// Safe to call any number of times; only the first call has effect.
    /// A no-op once the store itself has been dropped.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}

impl<T: Keyed> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("keys", &&*self.keys)
            .finish()
    }
}
