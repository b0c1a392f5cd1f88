use serde::{Deserialize, Deserializer, Serializer};

use crate::config::FormConfig;
use crate::error::{Error, Result};
use crate::form::FormValue;
use crate::null::Null;
use crate::types::{Kind, Scalar};
use crate::value::StoreValue;

impl Scalar for f64 {
    const KIND: Kind = Kind::Float64;

    fn into_store(self) -> StoreValue {
        StoreValue::Float64(self)
    }

    fn decode_store(target: &mut Null<Self>, value: StoreValue) -> Result<()> {
        match value {
            StoreValue::Null => target.clear(),
            StoreValue::Float64(v) => target.set(v),

            // An INT64 is not widened; integer columns belong in `NullInt64`.
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
                tracing::trace!(text, %error, "discarding unparseable float form value");
                Null::null()
            }
        }
    }

    // `serde_json` writes non-finite floats as `null`.
    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*self)
    }

    fn deserialize_json<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<f64>::deserialize(deserializer)
    }

    fn into_form_value(value: Null<Self>) -> FormValue {
        FormValue::NullFloat64(value)
    }

    fn take_form_value(value: FormValue) -> Result<Null<Self>, FormValue> {
        match value {
            FormValue::NullFloat64(v) => Ok(v),
            other => Err(other),
        }
    }
}
