use crate::chart::ChartError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Format of every date exchanged with the backend and shown on the x axis.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default form range: `today` back to the same calendar day three years
/// earlier.
///
/// A Feb 29 `today` has no counterpart three years back and rolls over to
/// Mar 1, the same way `Date.setFullYear` does.
pub fn default_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = today.year() - 3;
    let start = today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(today);
    (start, today)
}

/// Parses a backend date label.
///
/// Plain dates are the norm; full timestamps are accepted and truncated to
/// their calendar day.
pub(crate) fn parse_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    NaiveDate::parse_from_str(label, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(label, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(label, "%Y-%m-%d %H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(label)
                .ok()
                .map(|dt| dt.naive_utc().date())
        })
}

/// Label of the synthetic prediction point: the day after `last`.
pub fn next_day_label(last: &str) -> Result<String, ChartError> {
    let date = parse_label(last).ok_or_else(|| ChartError::InvalidDate(last.to_string()))?;
    let next = date
        .checked_add_signed(Duration::days(1))
        .ok_or_else(|| ChartError::InvalidDate(last.to_string()))?;
    Ok(next.format(DATE_FORMAT).to_string())
}
