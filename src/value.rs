//! The value exchanged with a backing store.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::null::Null;
use crate::types::Scalar;

/// A dynamically-typed value read from, or written to, a backing store.
///
/// This is the closed set of shapes a store driver hands to [`Decode`][crate::Decode]
/// and accepts from [`Encode`][crate::Encode]. A nullable wrapper converts into this
/// union too, so reading one wrapper from another goes through the same path.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    /// The store's "no value" marker (SQL `NULL`).
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Text(String),
    Bytes(Vec<u8>),
    Time(DateTime<Utc>),
}

impl StoreValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, StoreValue::Null)
    }

    /// The name of this value's runtime type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            StoreValue::Null => "NULL",
            StoreValue::Bool(_) => "BOOL",
            StoreValue::Int64(_) => "INT64",
            StoreValue::Float64(_) => "FLOAT64",
            StoreValue::Text(_) => "TEXT",
            StoreValue::Bytes(_) => "BYTES",
            StoreValue::Time(_) => "TIME",
        }
    }

    /// Renders any non-null value as text.
    ///
    /// Returns `None` for [`StoreValue::Null`].
    pub fn to_text(&self) -> Option<String> {
        Some(match self {
            StoreValue::Null => return None,
            StoreValue::Bool(v) => v.to_string(),
            StoreValue::Int64(v) => v.to_string(),
            StoreValue::Float64(v) => v.to_string(),
            StoreValue::Text(v) => v.clone(),
            StoreValue::Bytes(v) => String::from_utf8_lossy(v).into_owned(),
            StoreValue::Time(v) => v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        })
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for StoreValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    StoreValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i64 => Int64,
    f64 => Float64,
    String => Text,
    Vec<u8> => Bytes,
    DateTime<Utc> => Time,
}

impl From<&'_ str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::Text(value.to_owned())
    }
}

impl<T> From<Option<T>> for StoreValue
where
    T: Into<StoreValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(StoreValue::Null, Into::into)
    }
}

impl<T: Scalar> From<Null<T>> for StoreValue {
    fn from(value: Null<T>) -> Self {
        if value.valid {
            value.value.into_store()
        } else {
            StoreValue::Null
        }
    }
}
