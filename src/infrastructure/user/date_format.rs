//! Date formatting for user records
//!
//! The legacy layout is `{year}-{month0}-{weekday0}`: the month is zero-based
//! (0-11) and the last component is the day of the week with Sunday = 0,
//! not the day of the month. Consumers parse this layout bit-exactly, so it
//! stays the default; `Iso` is the corrected layout.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::DateText;

/// Layout version used when rendering dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateFormatVersion {
    /// `YYYY-M-D` with zero-based month and day-of-week index
    #[default]
    Legacy,
    /// `YYYY-MM-DD`
    Iso,
}

/// A date-like value accepted by the formatter
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    DateTime(DateTime<Utc>),
    /// Milliseconds since the Unix epoch
    Millis(i64),
    Text(String),
}

impl DateInput {
    /// Resolve to a UTC instant, `None` when the value is not a date
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            Self::Text(text) => parse_text(text.trim()),
        }
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Renders date-like values as [`DateText`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatter {
    version: DateFormatVersion,
}

impl DateFormatter {
    pub fn new(version: DateFormatVersion) -> Self {
        Self { version }
    }

    /// Format a date-like value
    ///
    /// Values that do not resolve to a date produce the `Invalid Date`
    /// sentinel instead of failing.
    pub fn format(&self, value: impl Into<DateInput>) -> DateText {
        let input: DateInput = value.into();
        let Some(dt) = input.resolve() else {
            return DateText::invalid();
        };

        match self.version {
            DateFormatVersion::Legacy => DateText::new(format!(
                "{}-{}-{}",
                dt.year(),
                dt.month0(),
                dt.weekday().num_days_from_sunday()
            )),
            DateFormatVersion::Iso => DateText::new(dt.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Format a date-like value with the legacy layout
pub fn format_date(value: impl Into<DateInput>) -> DateText {
    DateFormatter::default().format(value)
}

/// The same instant with the year incremented
///
/// February 29 rolls over to March 1 when the next year has no leap day.
/// Returns `None` past the representable range.
pub fn one_year_after(dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let year = dt.year().checked_add(1)?;

    dt.with_year(year).or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).map(|date| date.and_time(dt.time()).and_utc())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_legacy_monday_in_january() {
        // 2024-01-15 is a Monday
        assert_eq!(format_date(utc(2024, 1, 15)).as_str(), "2024-0-1");
    }

    #[test]
    fn test_legacy_sunday_in_december() {
        // 2023-12-31 is a Sunday
        assert_eq!(format_date(utc(2023, 12, 31)).as_str(), "2023-11-0");
    }

    #[test]
    fn test_legacy_saturday() {
        // 2024-06-01 is a Saturday
        assert_eq!(format_date(utc(2024, 6, 1)).as_str(), "2024-5-6");
    }

    #[test]
    fn test_iso_format() {
        let formatter = DateFormatter::new(DateFormatVersion::Iso);
        assert_eq!(formatter.format(utc(2024, 1, 15)).as_str(), "2024-01-15");
    }

    #[test]
    fn test_millis_input() {
        // 2024-01-15T00:00:00Z
        assert_eq!(format_date(1_705_276_800_000_i64).as_str(), "2024-0-1");
    }

    #[test]
    fn test_text_inputs() {
        assert_eq!(format_date("2024-01-15").as_str(), "2024-0-1");
        assert_eq!(format_date("2024-01-15T08:30:00Z").as_str(), "2024-0-1");
        assert_eq!(format_date("2024-01-15T08:30:00").as_str(), "2024-0-1");
        assert_eq!(format_date("2024-01-15T23:30:00-05:00").as_str(), "2024-0-2");
    }

    #[test]
    fn test_invalid_inputs_yield_sentinel() {
        assert!(format_date("not a date").is_invalid());
        assert!(format_date("2024-13-40").is_invalid());
        assert!(format_date(i64::MAX).is_invalid());
        assert!(DateFormatter::new(DateFormatVersion::Iso)
            .format("")
            .is_invalid());
    }

    #[test]
    fn test_one_year_after() {
        let next = one_year_after(utc(2024, 1, 15)).unwrap();
        assert_eq!(next, utc(2025, 1, 15));
        assert_eq!(format_date(next).as_str(), "2025-0-3");
    }

    #[test]
    fn test_one_year_after_leap_day_rolls_to_march() {
        let next = one_year_after(utc(2024, 2, 29)).unwrap();
        assert_eq!(next, utc(2025, 3, 1));
        assert_eq!(format_date(next).as_str(), "2025-2-6");
    }

    #[test]
    fn test_version_deserializes_lowercase() {
        let version: DateFormatVersion = serde_json::from_str("\"iso\"").unwrap();
        assert_eq!(version, DateFormatVersion::Iso);
        assert_eq!(DateFormatVersion::default(), DateFormatVersion::Legacy);
    }
}
