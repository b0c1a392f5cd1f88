use chrono::{Datelike, TimeZone, Timelike, Utc};
use nullables::form::{
    convert_bool, null_bool_converter, null_float64_converter, null_int64_converter,
    null_string_converter, null_time_converter, parse_time, FormFields, FormValue,
};
use nullables::{FormConfig, NullBool, NullFloat64, NullInt64, NullString, NullTime};

mod common;

#[test]
fn it_nulls_empty_fields() {
    common::setup_if_needed();

    assert_eq!(null_string_converter(""), FormValue::NullString(NullString::null()));
    assert_eq!(null_int64_converter(""), FormValue::NullInt64(NullInt64::null()));
    assert_eq!(null_float64_converter(""), FormValue::NullFloat64(NullFloat64::null()));
    assert_eq!(null_bool_converter(""), FormValue::NullBool(NullBool::null()));
    assert_eq!(null_time_converter(""), FormValue::NullTime(NullTime::null()));
}

#[test]
fn it_nulls_unparseable_fields() {
    assert_eq!(null_int64_converter("12abc"), FormValue::NullInt64(NullInt64::null()));
    assert_eq!(null_float64_converter("pi"), FormValue::NullFloat64(NullFloat64::null()));
    assert_eq!(null_bool_converter("maybe"), FormValue::NullBool(NullBool::null()));
    assert_eq!(null_time_converter("not-a-date"), FormValue::NullTime(NullTime::null()));
}

#[test]
fn it_converts_valid_fields() {
    assert_eq!(
        null_string_converter("kia ora"),
        FormValue::NullString(NullString::new("kia ora".into()))
    );
    assert_eq!(null_int64_converter("42"), FormValue::NullInt64(NullInt64::new(42)));
    assert_eq!(
        null_float64_converter("-0.5"),
        FormValue::NullFloat64(NullFloat64::new(-0.5))
    );
    assert_eq!(null_bool_converter("T"), FormValue::NullBool(NullBool::new(true)));
    assert_eq!(null_bool_converter("0"), FormValue::NullBool(NullBool::new(false)));
}

#[test]
fn it_follows_the_checkbox_convention() {
    assert_eq!(convert_bool("on"), FormValue::Bool(true));
    assert_eq!(convert_bool("true"), FormValue::Bool(true));
    assert_eq!(convert_bool("1"), FormValue::Bool(true));
    assert_eq!(convert_bool("false"), FormValue::Bool(false));

    // never null
    assert_eq!(convert_bool(""), FormValue::Bool(false));
    assert_eq!(convert_bool("off"), FormValue::Bool(false));
    assert_eq!(convert_bool("ON"), FormValue::Bool(false));
}

#[test]
fn it_decodes_bare_times_into_year_one() {
    let FormValue::NullTime(t) = null_time_converter("14:30") else {
        panic!("expected a NullTime");
    };

    assert!(t.valid);
    assert_eq!(t.value.year(), 1);
    assert_eq!((t.value.hour(), t.value.minute()), (14, 30));
}

#[test]
fn it_decodes_dates_without_shifting() {
    let t = parse_time("31-12-2024", &FormConfig::default());

    assert!(t.valid);
    assert_eq!(
        (t.value.day(), t.value.month(), t.value.year()),
        (31, 12, 2024)
    );
}

#[test]
fn it_prefers_earlier_patterns() {
    // `DD-MM-YYYY` is tried before `YYYY-MM-DD`; the two never both match, but a
    // date-time must not be cut short by a date-only pattern.
    let t = parse_time("01-02-2024 9:00 PM", &FormConfig::default());

    assert_eq!(
        t,
        NullTime::new(Utc.with_ymd_and_hms(2024, 2, 1, 21, 0, 0).unwrap())
    );
}

#[test]
fn it_renders_human_readable_times() {
    assert_eq!(NullTime::null().html_date_time(), "N/A");
    assert_eq!(
        NullTime::from_form("2024-12-31 15:04").html_date_time(),
        "2024-12-31 3:04 PM"
    );
    assert_eq!(NullTime::from_form("09:05").html_date_time(), "0001-01-01 9:05 AM");
}

#[test]
fn it_binds_a_submitted_form() -> anyhow::Result<()> {
    let form = FormFields::parse(
        b"title=Weekly+sync&attendees=&budget=12.50&remote=on&starts=2024-07-01+10%3A30+AM",
    );

    assert_eq!(form.get::<NullString>("title")?, NullString::new("Weekly sync".into()));
    assert_eq!(form.get::<NullInt64>("attendees")?, NullInt64::null());
    assert_eq!(form.get::<NullFloat64>("budget")?, NullFloat64::new(12.5));
    assert!(form.get::<bool>("remote")?);
    assert_eq!(
        form.get::<NullTime>("starts")?,
        NullTime::new(Utc.with_ymd_and_hms(2024, 7, 1, 10, 30, 0).unwrap())
    );

    // absent fields
    assert!(!form.get::<bool>("recurring")?);
    assert!(form.get::<NullBool>("confirmed")?.is_null());

    Ok(())
}
