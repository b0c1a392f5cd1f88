//! Timestamp patterns, in `chrono` strftime syntax.
//!
//! The `HTML_*` patterns are what browsers and the application's own templates
//! submit; the `DB_*` patterns are what the backing store may return as text.
//!
//! When a form field is parsed, dates must be fixed width: four digits for the year,
//! two for the month and day. `AM`/`PM` match in any case.

/// `HH:MM`, 24-hour.
pub const HTML_FORM_TIME: &str = "%H:%M";

/// `YYYY-MM-DD`.
pub const HTML_FORM_DATE: &str = "%Y-%m-%d";

/// `YYYY-MM-DD h:MM AM/PM`.
pub const HTML_FORM_DATE_TIME: &str = "%Y-%m-%d %-I:%M %p";

/// `DD-MM-YYYY`.
pub const NZ_HTML_FORM_DATE: &str = "%d-%m-%Y";

/// `DD-MM-YYYY h:MM AM/PM`.
pub const NZ_HTML_FORM_DATE_TIME: &str = "%d-%m-%Y %-I:%M %p";

/// `YYYY-MM-DD HH:MM`, 24-hour.
pub const HTML_FORM_DATE_TIME_24HR: &str = "%Y-%m-%d %H:%M";

/// `HH:MM:SS:mmm`.
///
/// Provided for callers formatting store values; no parser in this crate uses it.
pub const DB_TIME: &str = "%H:%M:%S:%3f";

/// `YYYY-MM-DD HH:MM:SS:mmm`.
pub const DB_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S:%3f";

/// `HH:MM:SS`.
///
/// Provided for callers; no parser in this crate uses it.
pub const TIME_WITH_SECONDS: &str = "%H:%M:%S";

/// `YYYY-MM-DD HH:MM:SS[.fff]`, as SQLite's date functions produce.
pub const SQL_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S%.f";

/// The text patterns accepted when the store returns a timestamp as text, tried after
/// RFC 3339.
pub const STORE_DATE_TIME_PATTERNS: &[&str] = &[DB_DATE_TIME, SQL_DATE_TIME];

/// Years added to a bare time-of-day, which otherwise lands in year 0.
///
/// Applied only while [`FormConfig::shift_bare_time_year`][crate::FormConfig] is set.
pub const BARE_TIME_YEAR_SHIFT: i32 = 1;

/// What a form pattern yields when it matches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PatternShape {
    /// A time of day with no date.
    Time,
    /// A calendar date at midnight.
    Date,
    DateTime,
}

/// The patterns tried, in order, when decoding a time form field. First match wins.
pub const FORM_TIME_PATTERNS: &[(&str, PatternShape)] = &[
    (HTML_FORM_TIME, PatternShape::Time),
    (NZ_HTML_FORM_DATE, PatternShape::Date),
    (HTML_FORM_DATE, PatternShape::Date),
    (HTML_FORM_DATE_TIME, PatternShape::DateTime),
    (NZ_HTML_FORM_DATE_TIME, PatternShape::DateTime),
    (HTML_FORM_DATE_TIME_24HR, PatternShape::DateTime),
];
