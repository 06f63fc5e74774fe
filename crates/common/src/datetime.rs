//! Date comparison and formatting at a chosen precision.
//!
//! All helpers work on `chrono::DateTime<Tz>` and read calendar components
//! in the date's own time zone, so `Local` dates compare on the user's wall
//! clock while `Utc` dates compare in UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Granularity at which two instants are compared, truncated or formatted.
///
/// Variants are ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DatePrecision {
    pub const ALL: [DatePrecision; 6] = [
        DatePrecision::Year,
        DatePrecision::Month,
        DatePrecision::Day,
        DatePrecision::Hour,
        DatePrecision::Minute,
        DatePrecision::Second,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DatePrecision::Year => "year",
            DatePrecision::Month => "month",
            DatePrecision::Day => "day",
            DatePrecision::Hour => "hour",
            DatePrecision::Minute => "minute",
            DatePrecision::Second => "second",
        }
    }

    /// Fields reset by [`normalize`] at this precision, coarse to fine.
    ///
    /// ```
    /// use parakeet_common::{DateField, DatePrecision};
    ///
    /// assert_eq!(DatePrecision::Second.cleared_fields(), &[DateField::Millisecond]);
    /// assert_eq!(DatePrecision::Year.cleared_fields().len(), 6);
    /// ```
    pub fn cleared_fields(self) -> &'static [DateField] {
        let first = match self {
            DatePrecision::Year => 0,
            DatePrecision::Month => 1,
            DatePrecision::Day => 2,
            DatePrecision::Hour => 3,
            DatePrecision::Minute => 4,
            DatePrecision::Second => 5,
        };
        &FIELD_ORDER[first..]
    }
}

impl fmt::Display for DatePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePrecision {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(DatePrecision::Year),
            "month" => Ok(DatePrecision::Month),
            "day" => Ok(DatePrecision::Day),
            "hour" => Ok(DatePrecision::Hour),
            "minute" => Ok(DatePrecision::Minute),
            "second" => Ok(DatePrecision::Second),
            other => Err(DateError::InvalidPrecision(other.to_string())),
        }
    }
}

/// A calendar component below the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Coarse to fine. [`DatePrecision::cleared_fields`] slices a suffix of this.
static FIELD_ORDER: [DateField; 6] = [
    DateField::Month,
    DateField::Day,
    DateField::Hour,
    DateField::Minute,
    DateField::Second,
    DateField::Millisecond,
];

/// Wall-clock components of an instant, editable field by field.
#[derive(Debug, Clone, Copy)]
struct WallClock {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
}

impl WallClock {
    fn of(naive: &NaiveDateTime) -> Self {
        Self {
            year: naive.year(),
            month: naive.month(),
            day: naive.day(),
            hour: naive.hour(),
            minute: naive.minute(),
            second: naive.second(),
            nanosecond: naive.nanosecond(),
        }
    }

    fn clear(&mut self, field: DateField) {
        match field {
            DateField::Month => self.month = 1,
            DateField::Day => self.day = 1,
            DateField::Hour => self.hour = 0,
            DateField::Minute => self.minute = 0,
            DateField::Second => self.second = 0,
            // Sub-millisecond digits go too; instants carry millisecond resolution.
            DateField::Millisecond => self.nanosecond = 0,
        }
    }

    fn to_naive(self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_nano_opt(
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
        )
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    // Output of `format(DatePrecision::Second, ..)`
    "%Y-%m-%d %H:%M %S",
    "%Y-%m-%d %H:%M",
];

/// Parses user or wire input into a wall-clock date-time.
///
/// Accepts RFC 3339 (the offset is dropped, local components are kept),
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM SS`, `YYYY-MM-DD HH:MM` and `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use parakeet_common::datetime::parse_datetime;
/// use chrono::{Datelike, Timelike};
///
/// let dt = parse_datetime("2024-03-05 08:09").unwrap();
/// assert_eq!((dt.month(), dt.day(), dt.minute()), (3, 5, 9));
/// ```
///
/// # Errors
///
/// Returns `DateError::InvalidDate` when no format matches.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, DateError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| DateError::InvalidDate(input.to_string()))
}

/// Whether `input` describes a valid calendar instant.
///
/// Typed `DateTime` values are valid by construction; this is the check for
/// raw input coming from text fields and attributes.
pub fn is_valid(input: &str) -> bool {
    parse_datetime(input).is_ok()
}

/// Returns `date` with every field finer than `precision` reset.
///
/// Month resets to January, day to the 1st, and the time fields to zero.
///
/// # Errors
///
/// Returns `DateError::NonexistentLocalTime` when the truncated wall-clock
/// time falls into a gap of the date's time zone. For an ambiguous
/// wall-clock time the earlier instant is returned.
pub fn normalize<Tz: TimeZone>(
    precision: DatePrecision,
    date: &DateTime<Tz>,
) -> Result<DateTime<Tz>, DateError> {
    let mut clock = WallClock::of(&date.naive_local());
    for field in precision.cleared_fields() {
        clock.clear(*field);
    }

    let local = clock
        .to_naive()
        .ok_or_else(|| DateError::InvalidDate(format!("{:?}", clock)))?;

    date.timezone()
        .from_local_datetime(&local)
        .earliest()
        .ok_or(DateError::NonexistentLocalTime(local))
}

/// Milliseconds from `date1` to `date2` after normalizing both.
pub fn diff<Tz: TimeZone>(
    precision: DatePrecision,
    date1: &DateTime<Tz>,
    date2: &DateTime<Tz>,
) -> Result<i64, DateError> {
    let a = normalize(precision, date1)?;
    let b = normalize(precision, date2)?;
    Ok(b.timestamp_millis() - a.timestamp_millis())
}

/// Whether both dates fall into the same `precision` bucket.
pub fn is_same<Tz: TimeZone>(
    precision: DatePrecision,
    date1: &DateTime<Tz>,
    date2: &DateTime<Tz>,
) -> Result<bool, DateError> {
    Ok(diff(precision, date1, date2)? == 0)
}

/// Change detection for a bound date value.
///
/// Two absent values are unchanged; a value appearing or disappearing is a
/// change; two present values change when their instants differ at
/// millisecond resolution.
pub fn has_changed<Tz: TimeZone>(
    current: Option<&DateTime<Tz>>,
    new_value: Option<&DateTime<Tz>>,
) -> bool {
    match (current, new_value) {
        (None, None) => false,
        (Some(current), Some(new_value)) => {
            current.timestamp_millis() != new_value.timestamp_millis()
        }
        _ => true,
    }
}

/// Formats `date` down to `precision`: `YYYY-MM-DD HH:MM SS`.
///
/// # Examples
///
/// ```
/// use parakeet_common::datetime::format;
/// use parakeet_common::DatePrecision;
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2024, 3, 5, 8, 9, 59).unwrap();
/// assert_eq!(format(DatePrecision::Month, &date), "2024-03");
/// assert_eq!(format(DatePrecision::Minute, &date), "2024-03-05 08:09");
/// assert_eq!(format(DatePrecision::Second, &date), "2024-03-05 08:09 59");
/// ```
pub fn format<Tz: TimeZone>(precision: DatePrecision, date: &DateTime<Tz>) -> String {
    let local = date.naive_local();
    let parts = [
        (DatePrecision::Month, "-", local.month()),
        (DatePrecision::Day, "-", local.day()),
        (DatePrecision::Hour, " ", local.hour()),
        (DatePrecision::Minute, ":", local.minute()),
        (DatePrecision::Second, " ", local.second()),
    ];

    let mut out = local.year().to_string();
    for (level, separator, value) in parts {
        if level > precision {
            break;
        }
        out.push_str(separator);
        out.push_str(&format!("{:02}", value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn samples() -> Vec<DateTime<Utc>> {
        vec![
            utc(2024, 1, 1, 0, 0, 0),
            utc(2024, 2, 29, 23, 59, 59) + chrono::Duration::milliseconds(999),
            utc(2023, 12, 31, 12, 30, 15) + chrono::Duration::milliseconds(250),
            utc(1999, 7, 4, 6, 5, 4),
        ]
    }

    #[test]
    fn test_precision_parses_lowercase_names() {
        for precision in DatePrecision::ALL {
            assert_eq!(precision.as_str().parse::<DatePrecision>(), Ok(precision));
        }
    }

    #[test]
    fn test_precision_rejects_unknown_name() {
        assert_eq!(
            "week".parse::<DatePrecision>(),
            Err(DateError::InvalidPrecision("week".to_string()))
        );
        assert!("Year".parse::<DatePrecision>().is_err());
    }

    #[test]
    fn test_precision_serde_uses_lowercase() {
        let json = serde_json::to_string(&DatePrecision::Minute).unwrap();
        assert_eq!(json, "\"minute\"");
        let back: DatePrecision = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(back, DatePrecision::Day);
    }

    #[test]
    fn test_cleared_fields_are_suffixes_of_one_order() {
        let year = DatePrecision::Year.cleared_fields();
        assert_eq!(
            year,
            &[
                DateField::Month,
                DateField::Day,
                DateField::Hour,
                DateField::Minute,
                DateField::Second,
                DateField::Millisecond,
            ]
        );
        for (skip, precision) in DatePrecision::ALL.iter().enumerate() {
            assert_eq!(precision.cleared_fields(), &year[skip..], "{}", precision);
        }
    }

    #[test]
    fn test_normalize_year_resets_everything_below() {
        let date = utc(2024, 3, 31, 8, 9, 10) + chrono::Duration::milliseconds(11);
        assert_eq!(
            normalize(DatePrecision::Year, &date).unwrap(),
            utc(2024, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_normalize_each_precision() {
        let date = utc(2024, 3, 31, 8, 9, 10) + chrono::Duration::milliseconds(11);
        let expected = [
            (DatePrecision::Month, utc(2024, 3, 1, 0, 0, 0)),
            (DatePrecision::Day, utc(2024, 3, 31, 0, 0, 0)),
            (DatePrecision::Hour, utc(2024, 3, 31, 8, 0, 0)),
            (DatePrecision::Minute, utc(2024, 3, 31, 8, 9, 0)),
            (DatePrecision::Second, utc(2024, 3, 31, 8, 9, 10)),
        ];
        for (precision, want) in expected {
            assert_eq!(normalize(precision, &date).unwrap(), want, "{}", precision);
        }
    }

    #[test]
    fn test_normalize_uses_the_dates_own_time_zone() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        // 2024-03-05 01:30 at +08:00 is still 2024-03-04 in UTC
        let date = tz.with_ymd_and_hms(2024, 3, 5, 1, 30, 0).unwrap();
        let day = normalize(DatePrecision::Day, &date).unwrap();
        assert_eq!(day, tz.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
        assert_eq!(day.offset(), &tz);
    }

    #[test]
    fn test_normalize_second_is_idempotent() {
        for date in samples() {
            let once = normalize(DatePrecision::Second, &date).unwrap();
            let twice = normalize(DatePrecision::Second, &once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_diff_is_antisymmetric() {
        let dates = samples();
        for precision in DatePrecision::ALL {
            for a in &dates {
                for b in &dates {
                    assert_eq!(
                        diff(precision, a, b).unwrap(),
                        -diff(precision, b, a).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn test_diff_returns_milliseconds() {
        let a = utc(2024, 1, 1, 10, 0, 0);
        let b = utc(2024, 1, 1, 12, 30, 0);
        assert_eq!(diff(DatePrecision::Hour, &a, &b).unwrap(), 2 * 3_600_000);
        assert_eq!(diff(DatePrecision::Minute, &a, &b).unwrap(), 150 * 60_000);
        assert_eq!(diff(DatePrecision::Day, &a, &b).unwrap(), 0);
    }

    #[test]
    fn test_is_same_day_but_not_hour() {
        let morning = utc(2024, 1, 1, 10, 0, 0);
        let night = utc(2024, 1, 1, 23, 59, 0);
        assert!(is_same(DatePrecision::Day, &morning, &night).unwrap());
        assert!(!is_same(DatePrecision::Hour, &morning, &night).unwrap());
    }

    #[test]
    fn test_has_changed() {
        let date = utc(2024, 1, 1, 10, 0, 0);
        let same_instant = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 11, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let later = utc(2024, 1, 1, 10, 0, 1);

        assert!(!has_changed::<Utc>(None, None));
        assert!(has_changed(None, Some(&date)));
        assert!(has_changed(Some(&date), None));
        assert!(!has_changed(Some(&date), Some(&same_instant)));
        assert!(has_changed(Some(&date), Some(&later)));
    }

    #[test]
    fn test_format_stops_at_precision() {
        let date = utc(2024, 3, 5, 8, 9, 59);
        assert_eq!(format(DatePrecision::Year, &date), "2024");
        assert_eq!(format(DatePrecision::Month, &date), "2024-03");
        assert_eq!(format(DatePrecision::Day, &date), "2024-03-05");
        assert_eq!(format(DatePrecision::Hour, &date), "2024-03-05 08");
        assert_eq!(format(DatePrecision::Minute, &date), "2024-03-05 08:09");
        assert_eq!(format(DatePrecision::Second, &date), "2024-03-05 08:09 59");
    }

    #[test]
    fn test_format_does_not_pad_year() {
        let date = utc(987, 1, 2, 3, 4, 5);
        assert_eq!(format(DatePrecision::Day, &date), "987-01-02");
    }

    #[test]
    fn test_parse_datetime_accepts_supported_formats() {
        let expected = utc(2024, 3, 5, 8, 9, 0).naive_utc();
        assert_eq!(parse_datetime("2024-03-05T08:09:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-05T08:09:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-05 08:09:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-05 08:09").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-05 08:09 00").unwrap(), expected);
        assert_eq!(
            parse_datetime(" 2024-03-05 ").unwrap(),
            utc(2024, 3, 5, 0, 0, 0).naive_utc()
        );
    }

    #[test]
    fn test_parse_datetime_round_trips_second_format() {
        let date = utc(2024, 3, 5, 8, 9, 59);
        let text = format(DatePrecision::Second, &date);
        assert_eq!(parse_datetime(&text).unwrap(), date.naive_utc());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("2024-01-15T10:30:00+05:00"));
        assert!(is_valid("2024-02-29"));
        assert!(!is_valid("2023-02-29"));
        assert!(!is_valid("not-a-date"));
        assert!(!is_valid(""));
    }
}
