//! Decoding HTML form fields into nullable values.
//!
//! Every converter takes the raw text a browser submitted and returns a [`FormValue`],
//! a closed sum of everything a converter can produce. Converters never fail: text
//! that does not parse becomes a null wrapper (or `false`, for [`convert_bool`]).
//!
//! [`FormFields`] binds a whole `application/x-www-form-urlencoded` body:
//!
//! ```
//! use nullables::form::FormFields;
//! use nullables::{NullInt64, NullString, NullTime};
//!
//! let form = FormFields::parse(b"name=Kea&age=&subscribed=on&due=31-12-2024");
//!
//! let name: NullString = form.get("name")?;
//! let age: NullInt64 = form.get("age")?;
//! let subscribed: bool = form.get("subscribed")?;
//! let due: NullTime = form.get("due")?;
//!
//! assert_eq!(name.get().map(String::as_str), Some("Kea"));
//! assert!(age.is_null());
//! assert!(subscribed);
//! assert!(due.valid);
//! # Ok::<(), nullables::Error>(())
//! ```

use crate::config::FormConfig;
use crate::error::{Error, Result};
use crate::null::Null;
use crate::types::{parse_bool, NullBool, NullFloat64, NullInt64, NullString, NullTime, Scalar};

/// Everything a form converter can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    NullTime(NullTime),
    NullString(NullString),
    NullInt64(NullInt64),
    NullFloat64(NullFloat64),
    NullBool(NullBool),
}

impl FormValue {
    /// The name of the variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FormValue::Bool(_) => "bool",
            FormValue::Int64(_) => "i64",
            FormValue::Float64(_) => "f64",
            FormValue::String(_) => "String",
            FormValue::NullTime(_) => "NullTime",
            FormValue::NullString(_) => "NullString",
            FormValue::NullInt64(_) => "NullInt64",
            FormValue::NullFloat64(_) => "NullFloat64",
            FormValue::NullBool(_) => "NullBool",
        }
    }
}

impl<T: Scalar> From<Null<T>> for FormValue {
    fn from(value: Null<T>) -> Self {
        T::into_form_value(value)
    }
}

impl<T: Scalar> Null<T> {
    /// Parses a raw form field with the given configuration.
    pub fn parse_form(text: &str, config: &FormConfig) -> Self {
        T::parse_form(text, config)
    }

    /// Parses a raw form field with the default configuration.
    pub fn from_form(text: &str) -> Self {
        T::parse_form(text, &FormConfig::default())
    }
}

/// Parses a time form field, trying each of
/// [`FORM_TIME_PATTERNS`][crate::format::FORM_TIME_PATTERNS] in order.
pub fn parse_time(text: &str, config: &FormConfig) -> NullTime {
    NullTime::parse_form(text, config)
}

pub fn null_time_converter(text: &str) -> FormValue {
    NullTime::from_form(text).into()
}

pub fn null_string_converter(text: &str) -> FormValue {
    NullString::from_form(text).into()
}

pub fn null_int64_converter(text: &str) -> FormValue {
    NullInt64::from_form(text).into()
}

pub fn null_float64_converter(text: &str) -> FormValue {
    NullFloat64::from_form(text).into()
}

pub fn null_bool_converter(text: &str) -> FormValue {
    NullBool::from_form(text).into()
}

/// Converts a checkbox field: `on` is `true`, as is any of the usual true spellings.
/// Anything else, including an empty or unparseable value, is `false`.
pub fn convert_bool(text: &str) -> FormValue {
    FormValue::Bool(text == "on" || parse_bool(text).unwrap_or(false))
}

/// A type a form field can be bound to.
pub trait FormField: Sized {
    /// Runs this type's converter on the raw field text.
    fn convert(text: &str, config: &FormConfig) -> FormValue;

    /// Takes the value back out of the converter's result.
    fn from_form_value(value: FormValue) -> Result<Self>;
}

impl<T: Scalar> FormField for Null<T> {
    fn convert(text: &str, config: &FormConfig) -> FormValue {
        T::parse_form(text, config).into()
    }

    fn from_form_value(value: FormValue) -> Result<Self> {
        <T as Scalar>::take_form_value(value).map_err(|other| Error::UnexpectedFormValue {
            expected: T::KIND.name(),
            actual: other.type_name(),
        })
    }
}

impl FormField for bool {
    fn convert(text: &str, _config: &FormConfig) -> FormValue {
        convert_bool(text)
    }

    fn from_form_value(value: FormValue) -> Result<Self> {
        match value {
            FormValue::Bool(v) => Ok(v),

            other => Err(Error::UnexpectedFormValue {
                expected: "bool",
                actual: other.type_name(),
            }),
        }
    }
}

/// The fields of a submitted form.
///
/// When a key repeats, the first value wins. A field that is absent binds as if it
/// were submitted empty, so an unchecked checkbox reads as `false` and an absent
/// nullable field reads as null.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    fields: Vec<(String, String)>,
    config: FormConfig,
}

impl FormFields {
    /// Parses an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &[u8]) -> Self {
        url::form_urlencoded::parse(body)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// The raw text of the first field named `name`.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Converts the field named `name` to `T`.
    pub fn get<T: FormField>(&self, name: &str) -> Result<T> {
        let text = self.raw(name).unwrap_or_default();

        T::from_form_value(T::convert(text, &self.config))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
            config: FormConfig::default(),
        }
    }
}
