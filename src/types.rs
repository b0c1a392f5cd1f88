//! The scalar kinds a [`Null`] wrapper can hold.
//!
//! Each kind lives in its own module and decides, once, how it behaves on every
//! boundary:
//!
//! | kind      | store-read mismatch    | JSON decode failure | form parse failure |
//! |-----------|------------------------|---------------------|--------------------|
//! | `Time`    | ignored, state kept    | error               | null               |
//! | `String`  | stringified            | error (bad JSON)    | n/a                |
//! | `Int64`   | error                  | error               | null               |
//! | `Float64` | error                  | error               | null               |
//! | `Bool`    | error                  | error               | null               |
//!
//! The set of kinds is closed; [`Scalar`] is sealed.

use std::fmt::{self, Debug, Display};

use serde::{Deserializer, Serializer};

use crate::config::FormConfig;
use crate::error::Result;
use crate::form::FormValue;
use crate::null::Null;
use crate::value::StoreValue;

mod boolean;
mod float;
mod int;
mod text;
mod time;

#[cfg(feature = "sqlx")]
#[cfg_attr(docsrs, doc(cfg(feature = "sqlx")))]
mod sqlx;

pub(crate) use self::boolean::parse_bool;

pub mod chrono {
    #[doc(no_inline)]
    pub use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
}

/// A nullable instant in time.
pub type NullTime = Null<::chrono::DateTime<::chrono::Utc>>;

/// A nullable string.
pub type NullString = Null<String>;

/// A nullable 64-bit signed integer.
pub type NullInt64 = Null<i64>;

/// A nullable 64-bit float.
pub type NullFloat64 = Null<f64>;

/// A nullable boolean.
pub type NullBool = Null<bool>;

/// Names one of the five scalar kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Time,
    String,
    Int64,
    Float64,
    Bool,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Time => "NullTime",
            Kind::String => "NullString",
            Kind::Int64 => "NullInt64",
            Kind::Float64 => "NullFloat64",
            Kind::Bool => "NullBool",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for chrono::DateTime<chrono::Utc> {}
    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// A scalar that can be wrapped in [`Null`].
///
/// Implemented for `DateTime<Utc>`, `String`, `i64`, `f64` and `bool` only.
pub trait Scalar: private::Sealed + Sized + Clone + Default + PartialEq + Debug {
    const KIND: Kind;

    /// An empty JSON buffer decodes as null instead of failing.
    const EMPTY_JSON_IS_NULL: bool = false;

    /// Converts the bare scalar into the value handed to a store driver.
    fn into_store(self) -> StoreValue;

    /// Reads a store value into `target` following this kind's mismatch policy.
    ///
    /// [`StoreValue::Null`] always clears `valid` and succeeds.
    fn decode_store(target: &mut Null<Self>, value: StoreValue) -> Result<()>;

    /// Parses a raw form field. Never fails; unparseable input yields a null wrapper.
    fn parse_form(text: &str, config: &FormConfig) -> Null<Self>;

    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;

    /// Deserializes the flattened JSON form; `null` yields `None`.
    fn deserialize_json<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error>;

    fn into_form_value(value: Null<Self>) -> FormValue;

    /// Extracts a wrapper of this kind, or hands the value back if the tag differs.
    fn take_form_value(value: FormValue) -> Result<Null<Self>, FormValue>;
}
