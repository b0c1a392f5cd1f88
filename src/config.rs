//! Configuration for form decoding, optionally read from `nullables.toml`.
//!
//! Parsing requires the `nullables-toml` feature (enabled by default). Without it,
//! [`Config::default()`] is still available and can be adjusted in code.
//!
//! ```toml
//! [form]
//! # The target store accepts dates in year 0; keep bare times there.
//! shift-bare-time-year = false
//! ```

#[cfg(feature = "nullables-toml")]
use std::path::Path;

#[cfg(feature = "nullables-toml")]
use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "nullables-toml",
    derive(serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct Config {
    /// Options for decoding HTML form fields.
    pub form: FormConfig,
}

/// Options for decoding HTML form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "nullables-toml",
    derive(serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct FormConfig {
    /// Move a bare time-of-day (`HH:MM`) forward by
    /// [`BARE_TIME_YEAR_SHIFT`][crate::format::BARE_TIME_YEAR_SHIFT] years.
    ///
    /// A bare time parses onto January 1st of year 0, which some stores (Microsoft SQL
    /// Server among them) reject. Defaults to `true`; disable it for stores that accept
    /// year 0.
    pub shift_bare_time_year: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            shift_bare_time_year: true,
        }
    }
}

#[cfg(feature = "nullables-toml")]
impl Config {
    /// The file name [`Config::read_from`] is usually pointed at.
    pub const FILE_NAME: &'static str = "nullables.toml";

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Config(e.into()))
    }

    /// Reads and parses the TOML file at `path`.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let toml = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading configuration");

        Self::from_toml_str(&toml)
    }
}
