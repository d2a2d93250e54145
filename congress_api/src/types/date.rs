//! Best-effort date parsing for date-valued path arguments.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::Error;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a date string. ISO `YYYY-MM-DD` is tried first; RFC 3339 timestamps,
/// US-style `MM/DD/YYYY` and spelled-out month names are also accepted.
pub fn parse_date(input: &str) -> Result<NaiveDate, Error> {
    let s = input.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(Error::InvalidDate(input.to_string()))
}

/// Renders a date the way every endpoint expects it: zero-padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Values accepted wherever an endpoint takes a date.
pub trait IntoDate {
    fn into_date(self) -> Result<NaiveDate, Error>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<NaiveDate, Error> {
        Ok(self)
    }
}

impl IntoDate for NaiveDateTime {
    fn into_date(self) -> Result<NaiveDate, Error> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> IntoDate for DateTime<Tz> {
    fn into_date(self) -> Result<NaiveDate, Error> {
        Ok(self.date_naive())
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<NaiveDate, Error> {
        parse_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<NaiveDate, Error> {
        parse_date(&self)
    }
}

impl IntoDate for &String {
    fn into_date(self) -> Result<NaiveDate, Error> {
        parse_date(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_date("2010-01-05").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date(" 2009-12-31 ").unwrap(), ymd(2009, 12, 31));
    }

    #[test]
    fn other_formats() {
        assert_eq!(parse_date("01/05/2010").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date("2010/01/05").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date("January 5, 2010").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date("Jan 5, 2010").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date("5 January 2010").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date("2010-01-05T14:30:00").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date("2010-01-05 14:30:00").unwrap(), ymd(2010, 1, 5));
        assert_eq!(parse_date("2010-01-05T14:30:00Z").unwrap(), ymd(2010, 1, 5));
        assert_eq!(
            parse_date("2010-01-05T23:30:00-05:00").unwrap(),
            ymd(2010, 1, 5)
        );
    }

    #[test]
    fn rejects_garbage() {
        for input in ["", "yesterday", "2010-13-01", "2010-02-30", "05-01"] {
            assert!(
                matches!(parse_date(input), Err(Error::InvalidDate(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_date(ymd(2010, 1, 5)), "2010-01-05");
        assert_eq!(format_date(ymd(987, 3, 9)), "0987-03-09");
    }

    #[test]
    fn native_values_pass_through() {
        let date = ymd(2011, 7, 4);
        assert_eq!(date.into_date().unwrap(), date);
        let dt = date.and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(dt.into_date().unwrap(), date);
        let utc = Utc.from_utc_datetime(&dt);
        assert_eq!(utc.into_date().unwrap(), date);
        assert_eq!("2011-07-04".to_string().into_date().unwrap(), date);
    }
}
