//! Week-key derivation.
//!
//! Entries are bucketed into Monday-first ISO weeks for the weekly volume
//! bonus. A week is identified by the date of its Monday, rendered as
//! `YYYY-MM-DD` wherever it is serialized.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const ENTRY_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Returns the Monday that starts the ISO week containing `date`.
///
/// Sunday belongs to the week that began six days earlier; any other day
/// belongs to the week that began `weekday - 1` days earlier.
///
/// Within the first week of chrono's representable range the Monday does not
/// exist; such dates map to `NaiveDate::MIN`, which is not a Monday. Entry
/// dates accepted by [`parse_entry_date`] never get near that bound.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::week_key_of;
/// use chrono::NaiveDate;
///
/// // Sunday 31 December 2023 belongs to the week of Monday 25 December.
/// let sunday = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(week_key_of(sunday).to_string(), "2023-12-25");
///
/// // Monday 1 January 2024 starts its own week.
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(week_key_of(monday), monday);
/// ```
pub fn week_key_of(date: NaiveDate) -> NaiveDate {
    let days_from_sunday = date.weekday().num_days_from_sunday();
    let offset = if days_from_sunday == 0 {
        6
    } else {
        days_from_sunday - 1
    };

    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Parses the date of a daily entry.
///
/// Accepted forms:
/// - a plain calendar date, `2024-01-07`
/// - an RFC 3339 timestamp, `2024-01-07T23:30:00+07:00`
/// - a naive timestamp, `2024-01-07T23:30:00`
///
/// The calendar day is always the one written in the input. A timestamp's
/// offset is never applied, so a late-evening entry stays on its own day
/// whatever zone the caller runs in.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEntry`] when the text matches none of the
/// accepted forms, names a day that does not exist, or falls outside the
/// years 1 to 9999.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::parse_entry_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(parse_entry_date("2024-01-07").unwrap(), expected);
/// assert_eq!(parse_entry_date("2024-01-07T23:30:00+07:00").unwrap(), expected);
/// assert!(parse_entry_date("Invalid Date").is_err());
/// ```
pub fn parse_entry_date(raw: &str) -> EngineResult<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(EngineError::InvalidEntry {
            date: raw.to_string(),
            message: "date is empty".to_string(),
        });
    }

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|timestamp| timestamp.date())
        })
        .ok_or_else(|| EngineError::InvalidEntry {
            date: raw.to_string(),
            message: "expected YYYY-MM-DD or an ISO 8601 timestamp".to_string(),
        })?;

    if !ENTRY_YEARS.contains(&date.year()) {
        return Err(EngineError::InvalidEntry {
            date: raw.to_string(),
            message: format!(
                "year {} is outside {} to {}",
                date.year(),
                ENTRY_YEARS.start(),
                ENTRY_YEARS.end()
            ),
        });
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_whole_week_maps_to_its_monday() {
        let monday = make_date("2024-01-01");
        for day in 1..=7 {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            assert_eq!(week_key_of(date), monday, "2024-01-{:02}", day);
        }
    }

    #[test]
    fn test_next_monday_starts_new_week() {
        assert_eq!(week_key_of(make_date("2024-01-08")), make_date("2024-01-08"));
    }

    #[test]
    fn test_sunday_new_years_eve_belongs_to_previous_monday() {
        assert_eq!(week_key_of(make_date("2023-12-31")), make_date("2023-12-25"));
    }

    #[test]
    fn test_sunday_january_first_crosses_year_boundary() {
        // 2023-01-01 is a Sunday
        assert_eq!(week_key_of(make_date("2023-01-01")), make_date("2022-12-26"));
    }

    #[test]
    fn test_week_crossing_month_boundary() {
        // Thursday 1 February 2024 is in the week of Monday 29 January
        assert_eq!(week_key_of(make_date("2024-02-01")), make_date("2024-01-29"));
    }

    #[test]
    fn test_leap_day() {
        // Thursday 29 February 2024
        assert_eq!(week_key_of(make_date("2024-02-29")), make_date("2024-02-26"));
    }

    #[test]
    fn test_week_key_renders_as_iso_date() {
        assert_eq!(week_key_of(make_date("2024-03-10")).to_string(), "2024-03-04");
    }

    #[test]
    fn test_week_key_at_calendar_lower_bound_does_not_panic() {
        let key = week_key_of(NaiveDate::MIN);
        assert!(key <= NaiveDate::MIN + Days::new(6));
    }

    #[test]
    fn test_parse_rejects_years_outside_range() {
        for raw in ["0000-06-01", "+10000-01-01", "-0001-01-01"] {
            match parse_entry_date(raw) {
                Err(EngineError::InvalidEntry { date, .. }) => assert_eq!(date, raw),
                other => panic!("Expected InvalidEntry for {}, got {:?}", raw, other),
            }
        }
        assert!(parse_entry_date("0001-01-01").is_ok());
        assert!(parse_entry_date("9999-12-31").is_ok());
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_entry_date("2024-01-07").unwrap(), make_date("2024-01-07"));
        assert_eq!(parse_entry_date("  2024-01-07 ").unwrap(), make_date("2024-01-07"));
    }

    #[test]
    fn test_parse_timestamp_keeps_written_day() {
        // 00:30 at +07:00 is still the previous day in UTC
        assert_eq!(
            parse_entry_date("2024-01-07T00:30:00+07:00").unwrap(),
            make_date("2024-01-07")
        );
        assert_eq!(
            parse_entry_date("2024-01-07T23:59:59-05:00").unwrap(),
            make_date("2024-01-07")
        );
        assert_eq!(
            parse_entry_date("2024-01-07T10:00:00Z").unwrap(),
            make_date("2024-01-07")
        );
    }

    #[test]
    fn test_parse_naive_timestamp() {
        assert_eq!(
            parse_entry_date("2024-01-07T23:30:00").unwrap(),
            make_date("2024-01-07")
        );
        assert_eq!(
            parse_entry_date("2024-01-07 08:15:00").unwrap(),
            make_date("2024-01-07")
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        match parse_entry_date("Invalid Date") {
            Err(EngineError::InvalidEntry { date, .. }) => assert_eq!(date, "Invalid Date"),
            _ => panic!("Expected InvalidEntry error"),
        }
    }

    #[test]
    fn test_parse_rejects_impossible_day() {
        assert!(parse_entry_date("2023-02-29").is_err());
        assert!(parse_entry_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        match parse_entry_date("   ") {
            Err(EngineError::InvalidEntry { message, .. }) => assert_eq!(message, "date is empty"),
            _ => panic!("Expected InvalidEntry error"),
        }
    }
}
