use std::fmt::{self, Debug};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Scalar;

/// A scalar that may be absent: SQL `NULL`, JSON `null`, or an empty form field.
///
/// When `valid` is `false` the wrapper stands for null on every boundary and `value`
/// carries no meaning; callers must not read it. When `valid` is `true`, `value` holds
/// a meaningful scalar.
///
/// Unlike `Option<T>` under `serde`, a `Null<T>` always serializes *flattened*: the bare
/// scalar or `null`, never an object with separate value and validity fields.
///
/// ```
/// use nullables::{NullInt64, NullString};
///
/// let id = NullInt64::new(42);
/// assert_eq!(serde_json::to_string(&id).unwrap(), "42");
///
/// let name = NullString::null();
/// assert_eq!(serde_json::to_string(&name).unwrap(), "null");
/// ```
#[derive(Copy, Clone, Default)]
pub struct Null<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Null<T> {
    /// A valid wrapper holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    /// A null wrapper.
    #[inline]
    pub fn null() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Returns the value, or `None` when null.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }

    /// Marks the wrapper null, leaving `value` in place.
    #[inline]
    pub fn clear(&mut self) {
        self.valid = false;
    }

    /// Stores `value` and marks the wrapper valid.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }
}

impl<T: Default> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Null::default, Null::new)
    }
}

impl<T> From<Null<T>> for Option<T> {
    fn from(value: Null<T>) -> Self {
        value.into_option()
    }
}

// Two null wrappers are equal whatever `value` holds.
impl<T: PartialEq> PartialEq for Null<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (true, true) => self.value == other.value,
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Debug> Debug for Null<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            f.debug_tuple("Valid").field(&self.value).finish()
        } else {
            f.write_str("Null")
        }
    }
}

impl<T: Scalar> Serialize for Null<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            self.value.serialize_json(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Null<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize_json(deserializer).map(Null::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_ignores_value_of_null_wrappers_in_eq() {
        let a = Null { value: 1_i64, valid: false };
        let b = Null { value: 2_i64, valid: false };

        assert_eq!(a, b);
        assert_ne!(a, Null::new(1));
        assert_ne!(Null::new(1_i64), Null::new(2));
    }

    #[test]
    fn it_converts_to_and_from_option() {
        assert_eq!(Null::from(Some("x".to_owned())), Null::new("x".to_owned()));
        assert!(Null::<String>::from(None).is_null());

        let garbage = Null { value: 9_i64, valid: false };
        assert_eq!(garbage.get(), None);
        assert_eq!(Option::<i64>::from(garbage), None);
        assert_eq!(Null::new(9_i64).into_option(), Some(9));
    }

    #[test]
    fn it_keeps_value_when_cleared() {
        let mut n = Null::new(true);
        n.clear();

        assert!(n.is_null());
        assert!(n.value);

        n.set(false);
        assert_eq!(n.get(), Some(&false));
    }
}
