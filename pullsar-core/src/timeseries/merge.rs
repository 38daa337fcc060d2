use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::PullsarError;
use pullsar_types::{ChartDataPoint, DATE_FORMAT};

/// A `(date, value)` pair of one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar day identifier, expected as `YYYY-MM-DD`.
    pub date: String,
    /// Non-negative count for that day.
    pub value: u64,
}

impl SeriesPoint {
    /// Convenience constructor.
    pub fn new(date: impl Into<String>, value: u64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// A named series as fetched for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSeries {
    /// Column name the series' values are stored under.
    pub name: String,
    /// Points in any order; dates are unique within one series.
    pub points: Vec<SeriesPoint>,
}

impl NamedSeries {
    /// Build a series from explicit points.
    pub fn new(name: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Build a series from an API chart payload.
    pub fn from_chart(name: impl Into<String>, chart: &[ChartDataPoint]) -> Self {
        Self {
            name: name.into(),
            points: chart
                .iter()
                .map(|p| SeriesPoint::new(p.date.clone(), p.pulls))
                .collect(),
        }
    }
}

/// One row of a merged chart table.
///
/// A series with no point on `date` has no entry in `values`; it is not zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    /// Date identifier shared by every value in the row.
    pub date: String,
    /// Series name to value.
    pub values: BTreeMap<String, u64>,
}

impl MergedRow {
    fn empty(date: String) -> Self {
        Self {
            date,
            values: BTreeMap::new(),
        }
    }

    /// Value of series `name` on this row's date, if that series has one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        self.values.get(name).copied()
    }
}

/// Merge named series into one date-sorted table.
///
/// - Every date appearing in any series yields exactly one row.
/// - Series are applied in input order; when two series share a name, the later
///   one overwrites the earlier one's values on overlapping dates.
/// - Series without points contribute nothing.
/// - Rows are sorted by calendar date. Dates that do not parse as `YYYY-MM-DD`
///   sort after all parsable dates, in lexicographic order among themselves.
#[must_use]
pub fn merge_series<I>(series: I) -> Vec<MergedRow>
where
    I: IntoIterator<Item = NamedSeries>,
{
    let mut rows: HashMap<String, MergedRow> = HashMap::new();

    for s in series {
        for p in s.points {
            rows.entry(p.date.clone())
                .or_insert_with(|| MergedRow::empty(p.date))
                .values
                .insert(s.name.clone(), p.value);
        }
    }

    let mut keyed: Vec<(Option<NaiveDate>, MergedRow)> = rows
        .into_values()
        .map(|row| (NaiveDate::parse_from_str(&row.date, DATE_FORMAT).ok(), row))
        .collect();

    #[cfg(feature = "tracing")]
    {
        let unparsable = keyed.iter().filter(|(d, _)| d.is_none()).count();
        if unparsable > 0 {
            tracing::debug!(unparsable, "merging series with non-ISO dates");
        }
    }

    keyed.sort_by(|(da, ra), (db, rb)| compare_keys(*da, &ra.date, *db, &rb.date));
    keyed.into_iter().map(|(_, row)| row).collect()
}

fn compare_keys(da: Option<NaiveDate>, ra: &str, db: Option<NaiveDate>, rb: &str) -> Ordering {
    match (da, db) {
        (Some(a), Some(b)) => a.cmp(&b).then_with(|| ra.cmp(rb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => ra.cmp(rb),
    }
}

/// Column names present in `rows`, in order of first appearance.
///
/// Within a row, names appear in lexicographic order.
#[must_use]
pub fn series_names(rows: &[MergedRow]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for row in rows {
        for name in row.values.keys() {
            if seen.insert(name.as_str()) {
                out.push(name.clone());
            }
        }
    }
    out
}

/// Check that every point's date is a `YYYY-MM-DD` calendar day.
///
/// Intended for callers that want to reject input before merging.
///
/// # Errors
/// Returns `InvalidArg` naming the first series and date that does not parse.
pub fn validate_dates(series: &[NamedSeries]) -> Result<(), PullsarError> {
    for s in series {
        if let Some(bad) = s
            .points
            .iter()
            .find(|p| NaiveDate::parse_from_str(&p.date, DATE_FORMAT).is_err())
        {
            return Err(PullsarError::InvalidArg(format!(
                "series {:?} has unparsable date {:?}",
                s.name, bad.date
            )));
        }
    }
    Ok(())
}

// Property tests live in `pullsar-core/tests/merge_props.rs`.
