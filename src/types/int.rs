use serde::{Deserialize, Deserializer, Serializer};

use crate::config::FormConfig;
use crate::error::{Error, Result};
use crate::form::FormValue;
use crate::null::Null;
use crate::types::{Kind, Scalar};
use crate::value::StoreValue;

impl Scalar for i64 {
    const KIND: Kind = Kind::Int64;

    fn into_store(self) -> StoreValue {
        StoreValue::Int64(self)
    }

    fn decode_store(target: &mut Null<Self>, value: StoreValue) -> Result<()> {
        match value {
            StoreValue::Null => target.clear(),
            StoreValue::Int64(v) => target.set(v),

            other => return Err(Error::mismatched_type(Self::KIND, other.type_name())),
        }

        Ok(())
    }

    fn parse_form(text: &str, _config: &FormConfig) -> Null<Self> {
        if text.is_empty() {
            return Null::null();
        }

        match text.parse() {
            Ok(v) => Null::new(v),

            Err(error) => {
                tracing::trace!(text, %error, "discarding unparseable integer form value");
                Null::null()
            }
        }
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*self)
    }

    fn deserialize_json<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<i64>::deserialize(deserializer)
    }

    fn into_form_value(value: Null<Self>) -> FormValue {
        FormValue::NullInt64(value)
    }

    fn take_form_value(value: FormValue) -> Result<Null<Self>, FormValue> {
        match value {
            FormValue::NullInt64(v) => Ok(v),
            other => Err(other),
        }
    }
}
