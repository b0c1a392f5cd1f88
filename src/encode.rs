//! Writing values to a backing store.

use crate::error::Result;
use crate::null::Null;
use crate::types::Scalar;
use crate::value::StoreValue;

/// A type that can produce a value for a store driver to bind.
///
/// This is the "give me a storable value" half of the store adapter contract.
pub trait Encode {
    /// Produces the bare scalar, or [`StoreValue::Null`] when there is no value.
    ///
    /// The wrappers in this crate never fail here; the `Result` lets other
    /// implementors report values a store cannot represent.
    fn encode(&self) -> Result<StoreValue>;
}

impl<T: Scalar> Encode for Null<T> {
    #[inline]
    fn encode(&self) -> Result<StoreValue> {
        Ok(self.clone().into())
    }
}

impl<T: Encode> Encode for &'_ T {
    #[inline]
    fn encode(&self) -> Result<StoreValue> {
        (**self).encode()
    }
}
