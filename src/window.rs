//! Publish-date window resolution for the relationship queries.
//!
//! Turns the optional `fromDate`/`toDate` query values into a bounded
//! epoch window. Steps run in a fixed order: parse (with defaults), then
//! ordering correction, then the one-year clamp.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::AppError;

/// Date format accepted for `fromDate` and `toDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the default window, and of the window rebuilt after an
/// inverted range.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// A resolved publish-date range in Unix seconds.
///
/// Always satisfies `from_epoch <= to_epoch` and spans at most one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub from_epoch: i64,
    pub to_epoch: i64,
}

/// Resolves a window relative to the current time.
pub fn resolve_window(from_date: &str, to_date: &str) -> Result<QueryWindow, AppError> {
    resolve_window_at(from_date, to_date, Utc::now())
}

/// Resolves a window relative to `now`.
///
/// An empty `from_date` defaults to a week before `now`; an empty `to_date`
/// defaults to `now`. A supplied value that fails to parse is an error.
pub fn resolve_window_at(
    from_date: &str,
    to_date: &str,
    now: DateTime<Utc>,
) -> Result<QueryWindow, AppError> {
    let mut from = parse_or_default("fromDate", from_date, || {
        now - Duration::days(DEFAULT_WINDOW_DAYS)
    })?;
    let mut to = parse_or_default("toDate", to_date, || now)?;

    // toDate wins when the range is inverted
    if to < from {
        from = to
            .checked_sub_signed(Duration::days(DEFAULT_WINDOW_DAYS))
            .ok_or_else(|| AppError::InvalidDate {
                param: "toDate",
                value: to_date.to_string(),
            })?;
    }

    if let Some(limit) = add_one_year(from) {
        if limit < to {
            to = limit;
        }
    }

    tracing::debug!(from = %from, to = %to, "resolved query window");

    Ok(QueryWindow {
        from_epoch: from.timestamp(),
        to_epoch: to.timestamp(),
    })
}

fn parse_or_default(
    param: &'static str,
    value: &str,
    default: impl FnOnce() -> DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    if value.is_empty() {
        return Ok(default());
    }
    parse_date(value).ok_or_else(|| AppError::InvalidDate {
        param,
        value: value.to_string(),
    })
}

/// Parses a `YYYY-MM-DD` date as midnight UTC.
///
/// Exactly four year digits and two digits each for month and day; no sign.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Same month and day one year later. A Feb 29 start rolls over to Mar 1.
fn add_one_year(from: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let year = from.year().checked_add(1)?;
    from.with_year(year).or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1)
            .map(|date| date.and_time(from.time()).and_utc())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const DAY: i64 = 86_400;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 12, 14, 15, 30, 0).unwrap()
    }

    fn epoch(date: &str) -> i64 {
        parse_date(date).unwrap().timestamp()
    }

    #[test]
    fn test_defaults_to_last_week() {
        let window = resolve_window_at("", "", now()).unwrap();
        assert_eq!(window.to_epoch, now().timestamp());
        assert_eq!(window.from_epoch, now().timestamp() - 7 * DAY);
    }

    #[test]
    fn test_valid_range_is_unchanged() {
        let window = resolve_window_at("2016-07-15", "2017-01-15", now()).unwrap();
        assert_eq!(window.from_epoch, epoch("2016-07-15"));
        assert_eq!(window.to_epoch, epoch("2017-01-15"));
    }

    #[test]
    fn test_same_day_range_is_unchanged() {
        let window = resolve_window_at("2016-12-12", "2016-12-12", now()).unwrap();
        assert_eq!(window.from_epoch, window.to_epoch);
    }

    #[test]
    fn test_exactly_one_year_is_not_clamped() {
        let window = resolve_window_at("2015-12-12", "2016-12-12", now()).unwrap();
        assert_eq!(window.to_epoch, epoch("2016-12-12"));
    }

    #[test]
    fn test_inverted_range_rebuilds_from_date() {
        let window = resolve_window_at("2016-12-15", "2016-12-13", now()).unwrap();
        assert_eq!(window.to_epoch, epoch("2016-12-13"));
        assert_eq!(window.from_epoch, epoch("2016-12-13") - 7 * DAY);
    }

    #[test]
    fn test_inverted_range_against_default_to_date() {
        // fromDate in the future, toDate defaults to now
        let window = resolve_window_at("2017-03-01", "", now()).unwrap();
        assert_eq!(window.to_epoch, now().timestamp());
        assert_eq!(window.from_epoch, now().timestamp() - 7 * DAY);
    }

    #[test]
    fn test_range_longer_than_a_year_is_clamped() {
        let window = resolve_window_at("2014-12-15", "2017-01-15", now()).unwrap();
        assert_eq!(window.from_epoch, epoch("2014-12-15"));
        assert_eq!(window.to_epoch, epoch("2015-12-15"));
    }

    #[test]
    fn test_default_to_date_is_clamped_against_old_from_date() {
        let window = resolve_window_at("2010-01-01", "", now()).unwrap();
        assert_eq!(window.from_epoch, epoch("2010-01-01"));
        assert_eq!(window.to_epoch, epoch("2011-01-01"));
    }

    #[test]
    fn test_invalid_from_date() {
        let err = resolve_window_at("FAIL", "", now()).unwrap_err();
        match err {
            AppError::InvalidDate { param, value } => {
                assert_eq!(param, "fromDate");
                assert_eq!(value, "FAIL");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_to_date() {
        let err = resolve_window_at("2016-12-12", "2016-13-45", now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { param: "toDate", .. }));
    }

    #[test]
    fn test_time_of_day_is_rejected() {
        assert!(resolve_window_at("2016-12-12T10:00:00", "", now()).is_err());
    }

    #[test]
    fn test_leap_day_start_clamps_to_march_first() {
        let window = resolve_window_at("2016-02-29", "2018-01-01", now()).unwrap();
        assert_eq!(window.from_epoch, epoch("2016-02-29"));
        assert_eq!(window.to_epoch, epoch("2017-03-01"));
    }

    #[test]
    fn test_malformed_dates_are_rejected() {
        for value in [
            "2016-1-5",
            "2016-01-5",
            "+2016-01-05",
            "-2016-01-05",
            "16-01-05",
            "20160105",
            "2016/01/05",
            " 2016-01-05",
            "-262143-01-03",
            "+262142-12-31",
        ] {
            assert!(parse_date(value).is_none(), "{}", value);
            let err = resolve_window_at("", value, now()).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidDate { param: "toDate", .. }),
                "{}",
                value
            );
            let err = resolve_window_at(value, "", now()).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidDate { param: "fromDate", .. }),
                "{}",
                value
            );
        }
    }

    #[test]
    fn test_extreme_four_digit_years_resolve() {
        let window = resolve_window_at("9999-12-31", "0000-01-01", now()).unwrap();
        assert_eq!(window.to_epoch, epoch("0000-01-01"));
        assert_eq!(window.from_epoch, epoch("0000-01-01") - 7 * DAY);

        let window = resolve_window_at("9999-06-01", "", now()).unwrap();
        assert!(window.from_epoch <= window.to_epoch);
    }

    #[test]
    fn test_window_invariants_hold() {
        let cases = [
            ("", ""),
            ("2016-12-12", ""),
            ("", "2016-01-01"),
            ("2001-01-01", "2020-01-01"),
            ("2020-01-01", "2001-01-01"),
            ("2016-02-29", "2018-01-01"),
        ];
        for (from, to) in cases {
            let window = resolve_window_at(from, to, now()).unwrap();
            assert!(window.from_epoch <= window.to_epoch, "{} .. {}", from, to);
            assert!(window.to_epoch - window.from_epoch <= 366 * DAY, "{} .. {}", from, to);
        }
    }
}
