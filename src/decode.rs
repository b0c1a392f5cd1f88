//! Reading values from a backing store.

use crate::error::Result;
use crate::null::Null;
use crate::types::Scalar;
use crate::value::StoreValue;

/// A type that can be populated from a value returned by a store driver.
///
/// This is the "read a dynamically-typed value into me" half of the store adapter
/// contract. How a mismatched value is handled is a per-kind policy; see
/// [`types`][crate::types].
pub trait Decode {
    /// Reads `value` into `self`.
    ///
    /// [`StoreValue::Null`] always succeeds and marks `self` null. When an error is
    /// returned, `self` is unchanged.
    fn decode(&mut self, value: StoreValue) -> Result<()>;
}

impl<T: Scalar> Decode for Null<T> {
    #[inline]
    fn decode(&mut self, value: StoreValue) -> Result<()> {
        T::decode_store(self, value)
    }
}

impl<T: Scalar> Null<T> {
    /// Builds a wrapper from a store value, starting from null.
    pub fn from_store(value: StoreValue) -> Result<Self> {
        let mut this = Self::null();
        this.decode(value)?;
        Ok(this)
    }
}
