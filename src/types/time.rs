use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::config::FormConfig;
use crate::error::Result;
use crate::form::FormValue;
use crate::format::{
    PatternShape, BARE_TIME_YEAR_SHIFT, FORM_TIME_PATTERNS, HTML_FORM_DATE_TIME,
    STORE_DATE_TIME_PATTERNS,
};
use crate::null::Null;
use crate::types::{Kind, NullTime, Scalar};
use crate::value::StoreValue;

const MAX_JSON_YEAR: i32 = 9999;

impl Scalar for DateTime<Utc> {
    const KIND: Kind = Kind::Time;

    const EMPTY_JSON_IS_NULL: bool = true;

    fn into_store(self) -> StoreValue {
        StoreValue::Time(self)
    }

    // Mismatched values are ignored and the previous state is kept.
    fn decode_store(target: &mut Null<Self>, value: StoreValue) -> Result<()> {
        match value {
            StoreValue::Null => target.clear(),
            StoreValue::Time(v) => target.set(v),

            StoreValue::Text(text) => match parse_store_text(&text) {
                Some(v) => target.set(v),
                None => tracing::debug!(text, "ignoring unparseable timestamp from store"),
            },

            other => tracing::debug!(
                actual = other.type_name(),
                "ignoring store value of mismatched type for NullTime"
            ),
        }

        Ok(())
    }

    fn parse_form(text: &str, config: &FormConfig) -> Null<Self> {
        match parse_form_text(text, config) {
            Some(v) => Null::new(v),

            None => {
                tracing::trace!(text, "no time pattern matched form value");
                Null::null()
            }
        }
    }

    // RFC 3339 has four year digits; anything outside 0..=9999 would not read back.
    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !(0..=MAX_JSON_YEAR).contains(&self.year()) {
            return Err(S::Error::custom(format_args!(
                "year {} outside of range [0,{MAX_JSON_YEAR}]",
                self.year()
            )));
        }

        serializer.serialize_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn deserialize_json<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        DateTime::parse_from_rfc3339(&text)
            .map(|v| Some(v.with_timezone(&Utc)))
            .map_err(|e| D::Error::custom(format_args!("invalid timestamp {text:?}: {e}")))
    }

    fn into_form_value(value: Null<Self>) -> FormValue {
        FormValue::NullTime(value)
    }

    fn take_form_value(value: FormValue) -> Result<Null<Self>, FormValue> {
        match value {
            FormValue::NullTime(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl NullTime {
    /// Renders the timestamp as `YYYY-MM-DD h:MM AM/PM`, or `N/A` when null.
    pub fn html_date_time(&self) -> String {
        match self.get() {
            Some(v) => v.format(HTML_FORM_DATE_TIME).to_string(),
            None => String::from("N/A"),
        }
    }
}

fn parse_store_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(v) = DateTime::parse_from_rfc3339(text) {
        return Some(v.with_timezone(&Utc));
    }

    STORE_DATE_TIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_form_text(text: &str, config: &FormConfig) -> Option<DateTime<Utc>> {
    FORM_TIME_PATTERNS
        .iter()
        .find_map(|&(pattern, shape)| match shape {
            PatternShape::Time => {
                let time = NaiveTime::parse_from_str(text, pattern).ok()?;

                // A bare time has no date; it sits on January 1st of year 0.
                let year = if config.shift_bare_time_year {
                    BARE_TIME_YEAR_SHIFT
                } else {
                    0
                };

                NaiveDate::from_ymd_opt(year, 1, 1).map(|date| date.and_time(time))
            }

            _ if !has_fixed_width_date(text, pattern) => None,

            PatternShape::Date => NaiveDate::parse_from_str(text, pattern)
                .ok()?
                .and_hms_opt(0, 0, 0),

            PatternShape::DateTime => NaiveDateTime::parse_from_str(text, pattern).ok(),
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Checks the date part of `text` against the date part of `pattern`: four digits for
/// `%Y`, two for `%m` and `%d`.
///
/// chrono accepts any number of digits for these fields, which would read `31-12-24` as
/// the year 24.
fn has_fixed_width_date(text: &str, pattern: &str) -> bool {
    let date = text.split_once(' ').map_or(text, |(date, _)| date);
    let layout = pattern.split_once(' ').map_or(pattern, |(layout, _)| layout);

    let mut fields = date.split('-');

    let widths_match = layout.split('-').all(|spec| {
        let width = if spec == "%Y" { 4 } else { 2 };

        fields
            .next()
            .is_some_and(|field| field.len() == width && field.bytes().all(|b| b.is_ascii_digit()))
    });

    widths_match && fields.next().is_none()
}
