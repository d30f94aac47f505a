//! # Fieldstore
//!
//! A typed, observable, in-memory state store: one value of a fixed shape
//! per [`Store`], controlled mutation, and field-scoped subscriptions that
//! fire synchronously when relevant fields change.
//!
//! ## Core Concepts
//!
//! - **Store**: the container holding one value plus its subscribers
//! - **Field**: a typed descriptor binding a key to one field of the shape
//! - **Scoped update**: [`Store::set_value`] replaces a single field and
//!   notifies only subscribers watching that field's key
//! - **Wholesale replacement**: [`Store::set_state`] and [`Store::reset`]
//!   notify every subscriber unconditionally
//!
//! ## Example
//!
//! ```
//! use fieldstore::{Field, Keyed, Store};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Settings {
//!     volume: u8,
//!     muted: bool,
//! }
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! enum SettingsKey {
//!     Volume,
//!     Muted,
//! }
//!
//! impl Keyed for Settings {
//!     type Key = SettingsKey;
//! }
//!
//! const VOLUME: Field<Settings, u8> = Field::new(SettingsKey::Volume, |s, v| s.volume = v);
//!
//! let store = Store::new("settings", Settings { volume: 5, muted: false })?;
//!
//! let sub = store.subscribe(
//!     |state: &Settings| println!("volume is now {}", state.volume),
//!     &[SettingsKey::Volume],
//! );
//!
//! store.set_value(&VOLUME, 7); // subscriber fires
//! assert_eq!(store.state(), Settings { volume: 7, muted: false });
//!
//! sub.unsubscribe();
//! # Ok::<(), fieldstore::StoreError>(())
//! ```

pub mod error;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use store::Store;
pub use subscriptions::{Subscription, SubscriptionId};
pub use types::{Field, Keyed};
