use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use pullsar_core::{ChartDataPoint, DATE_FORMAT, DateWindow};

use super::catalogs::{HISTORY_DAYS, OCP_VERSIONS};

pub fn db_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn db_end_date() -> NaiveDate {
    db_start_date()
        .checked_add_days(Days::new(HISTORY_DAYS - 1))
        .unwrap_or(NaiveDate::MAX)
}

// FNV-1a; stable across runs and platforms.
fn seed(parts: &[&str]) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for part in parts {
        for b in part.bytes().chain(std::iter::once(0)) {
            h ^= u64::from(b);
            h = h.wrapping_mul(0x0100_0000_01b3);
        }
    }
    h
}

/// Pulls recorded for `bundle` on `day`, or `None` outside the fixture history.
pub fn daily_pulls(bundle: &str, ocp_version: &str, day: NaiveDate) -> Option<u64> {
    if !OCP_VERSIONS.contains(&ocp_version) || day < db_start_date() || day > db_end_date() {
        return None;
    }
    let s = seed(&[bundle, ocp_version]);
    let base = s % 400 + 5;
    let day_num = u64::try_from(day.num_days_from_ce()).unwrap_or(0);
    let wobble = (s.rotate_left(17) ^ day_num.wrapping_mul(2_654_435_761)) % 60;
    Some(base + wobble)
}

/// Daily chart of the summed pulls of `bundles` across `window`.
pub fn summed_chart<S: AsRef<str>>(
    bundles: &[S],
    ocp_version: &str,
    window: &DateWindow,
) -> Vec<ChartDataPoint> {
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for day in window.start().iter_days().take_while(|d| *d <= window.end()) {
        for bundle in bundles {
            if let Some(pulls) = daily_pulls(bundle.as_ref(), ocp_version, day) {
                *by_day.entry(day).or_default() += pulls;
            }
        }
    }
    by_day
        .into_iter()
        .map(|(day, pulls)| ChartDataPoint::new(day.format(DATE_FORMAT).to_string(), pulls))
        .collect()
}

/// Every day of the fixture history as a window.
pub fn full_history() -> Option<DateWindow> {
    DateWindow::new(db_start_date(), db_end_date()).ok()
}
