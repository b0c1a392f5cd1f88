//! Types for working with errors produced by the nullable wrappers.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;

use crate::types::Kind;

/// A specialized `Result` type for this crate.
pub type Result<T, E = Error> = StdResult<T, E>;

// Convenience type alias for usage within this crate.
pub(crate) type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Represents all the ways a conversion can fail.
///
/// Only the strict boundaries report errors: reading a mismatched store value into an
/// `Int64`, `Float64` or `Bool` wrapper, and decoding malformed JSON. Form decoding never
/// fails; it resolves to a null wrapper instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A store value of the wrong kind was read into a wrapper that does not coerce.
    #[error("mismatched types; cannot read a store value of type `{actual}` into `{expected}`")]
    MismatchedType {
        expected: Kind,
        actual: &'static str,
    },

    /// Malformed JSON, a well-formed JSON value of the wrong shape, or a value JSON
    /// cannot represent.
    #[error("error occurred while encoding or decoding JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A form converter produced a value the requested field type cannot hold.
    #[error("form value of type `{actual}` cannot be bound to `{expected}`")]
    UnexpectedFormValue {
        expected: &'static str,
        actual: &'static str,
    },

    /// The configuration could not be parsed.
    #[error("error occurred while parsing configuration: {0}")]
    Config(#[source] BoxDynError),

    /// The configuration file could not be read.
    #[error("error reading configuration file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,

        #[source]
        source: io::Error,
    },
}

impl Error {
    #[inline]
    pub(crate) fn mismatched_type(expected: Kind, actual: &'static str) -> Self {
        Error::MismatchedType { expected, actual }
    }

    /// Returns `true` if this error came from the JSON boundary.
    pub fn is_json(&self) -> bool {
        matches!(self, Error::Json(_))
    }
}
