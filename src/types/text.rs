use serde::{Deserialize, Deserializer, Serializer};

use crate::config::FormConfig;
use crate::error::Result;
use crate::form::FormValue;
use crate::null::Null;
use crate::types::{Kind, Scalar};
use crate::value::StoreValue;

impl Scalar for String {
    const KIND: Kind = Kind::String;

    fn into_store(self) -> StoreValue {
        StoreValue::Text(self)
    }

    // Any scalar is accepted and rendered as text.
    fn decode_store(target: &mut Null<Self>, value: StoreValue) -> Result<()> {
        match value {
            StoreValue::Text(v) => target.set(v),

            other => match other.to_text() {
                Some(v) => target.set(v),
                None => target.clear(),
            },
        }

        Ok(())
    }

    fn parse_form(text: &str, _config: &FormConfig) -> Null<Self> {
        if text.is_empty() {
            Null::null()
        } else {
            Null::new(text.to_owned())
        }
    }

    // Escaped as a proper JSON string; quotes, backslashes and control characters
    // survive a round-trip.
    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }

    fn deserialize_json<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<String>::deserialize(deserializer)
    }

    fn into_form_value(value: Null<Self>) -> FormValue {
        FormValue::NullString(value)
    }

    fn take_form_value(value: FormValue) -> Result<Null<Self>, FormValue> {
        match value {
            FormValue::NullString(v) => Ok(v),
            other => Err(other),
        }
    }
}
