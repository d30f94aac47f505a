//! Key and field typing for observable state shapes.

use std::fmt;

/// Implemented by state types held in a [`Store`](crate::Store).
///
/// `Key` is the closed set of field names for the shape: a plain enum with
/// one variant per field. Scoped updates and subscription filters are
/// expressed in terms of `Key`, never strings, so a typo is a compile error
/// rather than a silently dead subscription.
pub trait Keyed {
    /// Field discriminant for this shape.
    type Key: Copy + Eq + fmt::Debug + Send + Sync + 'static;
}

/// Typed descriptor for one field of `T`: its key paired with the assignment
/// that writes a `V` into that field.
///
/// Binding the key and the value type together makes
/// [`set_value`](crate::Store::set_value) well-typed per field, so there is
/// no runtime key/value validation to fail. Construction is `const`, so
/// descriptors are typically module-level constants next to the shape:
///
/// ```
/// use fieldstore::{Field, Keyed};
///
/// #[derive(Clone)]
/// struct Settings {
///     volume: u8,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum SettingsKey {
///     Volume,
/// }
///
/// impl Keyed for Settings {
///     type Key = SettingsKey;
/// }
///
/// const VOLUME: Field<Settings, u8> = Field::new(SettingsKey::Volume, |s, v| s.volume = v);
/// ```
pub struct Field<T: Keyed, V> {
    key: T::Key,
    assign: fn(&mut T, V),
}

impl<T: Keyed, V> Field<T, V> {
    /// Create a field descriptor.
    pub const fn new(key: T::Key, assign: fn(&mut T, V)) -> Self {
        Self { key, assign }
    }

    /// The field's key.
    pub fn key(&self) -> T::Key {
        self.key
    }

    /// Write `value` into the field on `state`.
    pub(crate) fn apply(&self, state: &mut T, value: V) {
        (self.assign)(state, value)
    }
}

impl<T: Keyed, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Keyed, V> Copy for Field<T, V> {}

impl<T: Keyed, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({:?})", self.key)
    }
}
