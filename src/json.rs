//! Byte-level JSON entry points.
//!
//! The wrappers implement `serde::Serialize` and `serde::Deserialize` directly, so they
//! work as fields of any `serde` type. These helpers are for when a single wrapper is
//! encoded or decoded on its own, as a JSON codec's per-field hook would.

use crate::error::Result;
use crate::null::Null;
use crate::types::Scalar;

impl<T: Scalar> Null<T> {
    /// Encodes the flattened JSON form: the bare scalar, or `null`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes the flattened JSON form.
    ///
    /// `null` yields a null wrapper. For `NullTime` an empty buffer does too.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        if T::EMPTY_JSON_IS_NULL && bytes.is_empty() {
            return Ok(Self::null());
        }

        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decodes the flattened JSON form into `self`.
    ///
    /// On error `self` is left unchanged.
    pub fn decode_json(&mut self, bytes: &[u8]) -> Result<()> {
        let decoded = Self::from_json(bytes)?;

        if decoded.valid {
            *self = decoded;
        } else {
            // `null` clears the flag only; whatever `value` held stays.
            self.clear();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{NullBool, NullInt64, NullString, NullTime};

    #[test]
    fn it_leaves_target_unchanged_on_error() {
        let mut n = NullInt64::new(3);

        assert!(n.decode_json(b"\"3\"").is_err());
        assert!(n.decode_json(b"3.5").is_err());
        assert_eq!(n, NullInt64::new(3));

        n.decode_json(b"null").unwrap();
        assert!(n.is_null());
        assert_eq!(n.value, 3);
    }

    #[test]
    fn it_treats_empty_input_as_null_for_time_only() {
        assert!(NullTime::from_json(b"").unwrap().is_null());

        assert!(NullString::from_json(b"").is_err());
        assert!(NullBool::from_json(b"").is_err());
    }
}
