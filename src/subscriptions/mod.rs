//! Key-scoped subscriptions to store changes.
//!
//! A [`Subscription`] represents one observer's registration: a callback, an
//! optional set of watched field keys, and the capability to remove itself
//! from the owning store. The store owns the live set of subscribers and
//! performs filtered, synchronous fan-out on every mutation; handles only
//! reach back in to unsubscribe.
//!
//! # Example
//!
//! ```ignore
//! let sub = store.subscribe(|state| println!("count is {}", state.count), &[Key::Count]);
//!
//! store.set_value(&COUNT, 20); // callback fires
//! store.set_value(&NAME, "x".into()); // callback does not fire
//!
//! sub.unsubscribe(); // idempotent, safe to repeat
//! ```

mod manager;
mod types;

pub(crate) use manager::SubscriberSet;
pub(crate) use types::Callback;
pub use types::{Subscription, SubscriptionId};
