#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod form;
pub mod format;
pub mod types;
pub mod value;

mod json;
mod null;

#[doc(inline)]
pub use self::{
    config::{Config, FormConfig},
    decode::Decode,
    encode::Encode,
    error::{Error, Result},
    form::{FormField, FormFields, FormValue},
    null::Null,
    types::{Kind, NullBool, NullFloat64, NullInt64, NullString, NullTime, Scalar},
    value::StoreValue,
};
