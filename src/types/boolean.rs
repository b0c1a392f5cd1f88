use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value as JsonValue;

use crate::config::FormConfig;
use crate::error::{Error, Result};
use crate::form::FormValue;
use crate::null::Null;
use crate::types::{Kind, Scalar};
use crate::value::StoreValue;

/// Parses the boolean spellings HTML forms and query strings use.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn into_store(self) -> StoreValue {
        StoreValue::Bool(self)
    }

    fn decode_store(target: &mut Null<Self>, value: StoreValue) -> Result<()> {
        match value {
            StoreValue::Null => target.clear(),
            StoreValue::Bool(v) => target.set(v),

            other => return Err(Error::mismatched_type(Self::KIND, other.type_name())),
        }

        Ok(())
    }

    fn parse_form(text: &str, _config: &FormConfig) -> Null<Self> {
        if text.is_empty() {
            return Null::null();
        }

        match parse_bool(text) {
            Some(v) => Null::new(v),

            None => {
                tracing::trace!(text, "discarding unparseable boolean form value");
                Null::null()
            }
        }
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*self)
    }

    fn deserialize_json<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        // Through `Option` so that a missing struct field reads as null, as for the other
        // kinds.
        match Option::<JsonValue>::deserialize(deserializer)? {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::Bool(v)) => Ok(Some(v)),

            Some(other) => Err(D::Error::custom(format_args!(
                "{other} is not a valid JSON bool"
            ))),
        }
    }

    fn into_form_value(value: Null<Self>) -> FormValue {
        FormValue::NullBool(value)
    }

    fn take_form_value(value: FormValue) -> Result<Null<Self>, FormValue> {
        match value {
            FormValue::NullBool(v) => Ok(v),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;
    use crate::{Decode, Error, FormConfig, NullBool, StoreValue};

    #[test]
    fn it_parses_bool_spellings() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(text), Some(true), "{text}");
        }

        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(text), Some(false), "{text}");
        }

        for text in ["on", "yes", "tRUE", " true", "2"] {
            assert_eq!(parse_bool(text), None, "{text}");
        }
    }

    #[test]
    fn it_rejects_integers_from_the_store() {
        let mut n = NullBool::new(true);

        let err = n.decode(StoreValue::Int64(1)).unwrap_err();
        assert!(matches!(err, Error::MismatchedType { actual: "INT64", .. }));

        n.decode(StoreValue::Null).unwrap();
        assert!(n.is_null());
    }

    #[test]
    fn it_does_not_treat_on_as_a_nullable_bool() {
        // the checkbox convention belongs to `convert_bool` only
        assert!(NullBool::parse_form("on", &FormConfig::default()).is_null());
    }
}
