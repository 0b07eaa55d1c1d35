//! Canonical text forms for operand values: timestamps, dates, decimals, and
//! server-relative offsets.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};

use crate::Error;

const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layouts accepted by [`parse_timestamp`], tried in order.
const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Formats an instant as `yyyy-MM-dd HH:mm:ss.fff` in UTC.
///
/// Sub-millisecond precision is rounded half-up on the fourth fractional
/// digit; a rounded value of `.1000` carries into the next second (and
/// minute, hour, ...). Leap-second instants keep their `:60` seconds field.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    // chrono stores a leap second as nanos >= 1_000_000_000 on second 59.
    let fraction = instant.nanosecond() % 1_000_000_000;
    let mut millis = fraction / 1_000_000;
    if (fraction / 100_000) % 10 >= 5 {
        millis += 1;
    }
    if millis < 1000 {
        return format!("{}.{:03}", instant.format(SECONDS_FORMAT), millis);
    }

    let whole = instant.with_nanosecond(0).unwrap_or(*instant);
    let carried = whole
        .checked_add_signed(TimeDelta::seconds(1))
        .unwrap_or(whole);
    format!("{}.000", carried.format(SECONDS_FORMAT))
}

/// Formats a calendar date as `yyyy-MM-dd`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses the timestamp layouts the service emits: space- or `T`-separated,
/// with zero to nine fractional digits, or a bare `yyyy-MM-dd` (midnight UTC).
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, Error> {
    let text = text.trim();
    for layout in PARSE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::invalid(format!("unrecognised timestamp '{}'", text)))
}

/// Canonical decimal text: integral values keep a single fractional digit
/// (`1.0`, `-3.0`), everything else uses the shortest round-trip form.
pub(crate) fn decimal_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// "Now plus or minus N days", evaluated by the server when the query runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelativeTimeOffset {
    days: f64,
}

impl RelativeTimeOffset {
    /// Offset of `days` from the server's current time. Negative values point
    /// into the past.
    pub fn days(days: f64) -> Result<Self, Error> {
        if !days.is_finite() {
            return Err(Error::invalid(format!(
                "relative offset must be finite, got {}",
                days
            )));
        }
        // Collapse -0.0 so it renders as now+0.0.
        let days = if days == 0.0 { 0.0 } else { days };
        Ok(Self { days })
    }

    /// The server's current time.
    pub fn now() -> Self {
        Self { days: 0.0 }
    }

    pub fn as_days(&self) -> f64 {
        self.days
    }
}

impl fmt::Display for RelativeTimeOffset {
    /// `now+D` for non-negative offsets, `now-D` for negative ones. The sign
    /// is attached to `now`; the number never carries its own sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days < 0.0 {
            write!(f, "now-{}", decimal_text(-self.days))
        } else {
            write!(f, "now+{}", decimal_text(self.days))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn at(nanos: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_nano_opt(14, 5, 7, nanos)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn pads_to_three_fractional_digits() {
        assert_eq!(format_timestamp(&at(0)), "2024-03-09 14:05:07.000");
        assert_eq!(format_timestamp(&at(100_000_000)), "2024-03-09 14:05:07.100");
        assert_eq!(format_timestamp(&at(120_000_000)), "2024-03-09 14:05:07.120");
        assert_eq!(format_timestamp(&at(123_000_000)), "2024-03-09 14:05:07.123");
    }

    #[test]
    fn rounds_half_up_on_fourth_digit() {
        assert_eq!(format_timestamp(&at(123_500_000)), "2024-03-09 14:05:07.124");
        assert_eq!(format_timestamp(&at(123_499_999)), "2024-03-09 14:05:07.123");
        assert_eq!(format_timestamp(&at(123_456_789)), "2024-03-09 14:05:07.123");
    }

    #[test]
    fn rounding_carries_into_next_second_and_minute() {
        assert_eq!(format_timestamp(&at(999_500_000)), "2024-03-09 14:05:08.000");

        let end_of_year = Utc
            .with_ymd_and_hms(2023, 12, 31, 23, 59, 59)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap();
        assert_eq!(format_timestamp(&end_of_year), "2024-01-01 00:00:00.000");
    }

    #[test]
    fn leap_second_renders_as_sixty() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_000)
            .unwrap()
            .and_utc();
        assert_eq!(format_timestamp(&leap), "2016-12-31 23:59:60.000");

        let leap_fraction = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_250_000_000)
            .unwrap()
            .and_utc();
        assert_eq!(format_timestamp(&leap_fraction), "2016-12-31 23:59:60.250");
    }

    #[test]
    fn leap_second_rounding_carries_to_next_minute() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_999_600_000)
            .unwrap()
            .and_utc();
        assert_eq!(format_timestamp(&leap), "2017-01-01 00:00:00.000");
    }

    #[test]
    fn parses_service_layouts() {
        let expected = at(123_000_000);
        assert_eq!(parse_timestamp("2024-03-09 14:05:07.123").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-09T14:05:07.123000").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2024-03-09 14:05:07").unwrap(),
            at(0)
        );
        assert_eq!(
            parse_timestamp("2024-03-09").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap()
        );
        assert!(matches!(
            parse_timestamp("09/03/2024"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn relative_offset_sign_is_attached_to_now() {
        assert_eq!(RelativeTimeOffset::days(1.0).unwrap().to_string(), "now+1.0");
        assert_eq!(RelativeTimeOffset::days(-1.0).unwrap().to_string(), "now-1.0");
        assert_eq!(RelativeTimeOffset::days(-0.5).unwrap().to_string(), "now-0.5");
        assert_eq!(RelativeTimeOffset::days(-0.0).unwrap().to_string(), "now+0.0");
        assert_eq!(RelativeTimeOffset::now().to_string(), "now+0.0");
    }

    #[test]
    fn relative_offset_rejects_non_finite() {
        assert!(RelativeTimeOffset::days(f64::NAN).is_err());
        assert!(RelativeTimeOffset::days(f64::INFINITY).is_err());
    }

    #[test]
    fn decimal_text_keeps_one_fraction_digit_for_integers() {
        assert_eq!(decimal_text(25544.0), "25544.0");
        assert_eq!(decimal_text(0.25), "0.25");
        assert_eq!(decimal_text(-7.0), "-7.0");
    }
}
