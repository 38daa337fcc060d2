//! Calendar-day helpers for filter defaults, axis labels, and export names.

use chrono::{Days, NaiveDate};

use crate::PullsarError;
use pullsar_types::DATE_FORMAT;

/// The day `n` days before `today`, clamped to the earliest representable date.
#[must_use]
pub fn days_ago(today: NaiveDate, n: u64) -> NaiveDate {
    today
        .checked_sub_days(Days::new(n))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `InvalidArg` when `s` is not a calendar day in that format.
pub fn parse_date(s: &str) -> Result<NaiveDate, PullsarError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| PullsarError::InvalidArg(format!("Date must be in YYYY-MM-DD format: {s}")))
}

/// Axis label such as `"Jan 5"`.
#[must_use]
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Axis label for a wire date; unparsable input is returned unchanged.
#[must_use]
pub fn format_short_str(date: &str) -> String {
    parse_date(date).map_or_else(|_| date.to_string(), format_short)
}

/// File name offered for a CSV export made on `today`.
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("pullsar_export_{}.csv", today.format(DATE_FORMAT))
}
