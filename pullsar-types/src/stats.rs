//! Statistics payloads returned by the Pullsar API.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single point on a per-entity pull-count chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Calendar day identifier as sent by the API.
    pub date: String,
    /// Pull count recorded for that day.
    pub pulls: u64,
}

impl ChartDataPoint {
    /// Convenience constructor.
    pub fn new(date: impl Into<String>, pulls: u64) -> Self {
        Self {
            date: date.into(),
            pulls,
        }
    }
}

/// Aggregated pull statistics for one catalog, package, or bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPulls {
    /// Sum of pulls across the selected date window.
    pub total_pulls: u64,
    /// Percentage change between the first and last day of the window.
    ///
    /// The server reports `+inf` when the window starts at zero and ends positive;
    /// JSON cannot carry that, so `null` and the strings `"Infinity"`/`"inf"` are
    /// accepted as well. A missing trend reads as `0.0`.
    #[serde(default, deserialize_with = "lenient_trend")]
    pub trend: f64,
    /// Daily points, in the order the server produced them.
    pub chart_data: Vec<ChartDataPoint>,
}

impl AggregatedPulls {
    /// Totals and trend derived from daily points, the way the server computes them.
    #[must_use]
    pub fn from_chart(chart_data: Vec<ChartDataPoint>) -> Self {
        let total_pulls = chart_data.iter().map(|p| p.pulls).sum();
        let trend = match (chart_data.first(), chart_data.last()) {
            (Some(first), Some(last)) => trend_between(first.pulls, last.pulls),
            _ => 0.0,
        };
        Self {
            total_pulls,
            trend,
            chart_data,
        }
    }
}

/// Percentage change from `start` to `end`.
///
/// Growth from zero is reported as positive infinity; zero to zero is `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn trend_between(start: u64, end: u64) -> f64 {
    if start > 0 {
        (end as f64 - start as f64) / start as f64 * 100.0
    } else if end > 0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Overall pull statistics across every catalog for one OCP version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallPulls {
    /// Sum of pulls across the selected date window.
    pub total_pulls: u64,
    /// Percentage change, when the server computed one.
    #[serde(default, deserialize_with = "lenient_optional_trend")]
    pub trend: Option<f64>,
    /// Daily points across the window.
    pub chart_data: Vec<ChartDataPoint>,
}

/// A single row of a catalog, package, or bundle listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Full entity name (catalogs carry their registry path).
    pub name: String,
    /// Statistics for the selected window.
    pub stats: AggregatedPulls,
}

/// Paginated envelope wrapping listing responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaginatedResponse {
    /// Number of items matching the filters across all pages.
    pub total_count: u64,
    /// Number of items per page used by the server.
    pub page_size: u64,
    /// Items on the requested page.
    pub items: Vec<ListItem>,
}

/// High-level counters shown on the homepage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SummaryStats {
    /// Distinct catalogs recorded.
    pub total_catalogs: u64,
    /// Distinct packages recorded.
    pub total_packages: u64,
    /// Bundles recorded.
    pub total_bundles: u64,
    /// Pulls recorded across all time.
    pub total_pulls: u64,
}

/// Server-side settings the dashboard needs before enabling filters and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// First day for which pull data exists.
    pub db_start_date: NaiveDate,
    /// Longest date window (inclusive days) accepted by the CSV export.
    pub export_max_days: u32,
    /// Name of the catalog that aggregates every operator.
    pub all_operators_catalog: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTrend {
    Number(f64),
    Text(String),
}

fn parse_trend(raw: Option<RawTrend>) -> Result<f64, String> {
    match raw {
        None => Ok(0.0),
        Some(RawTrend::Number(v)) => Ok(v),
        Some(RawTrend::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "infinity" | "inf" | "+inf" => Ok(f64::INFINITY),
            "-infinity" | "-inf" => Ok(f64::NEG_INFINITY),
            "nan" => Ok(0.0),
            other => other
                .parse::<f64>()
                .map_err(|_| format!("invalid trend value: {s}")),
        },
    }
}

fn lenient_trend<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTrend>::deserialize(deserializer)?;
    parse_trend(raw).map_err(serde::de::Error::custom)
}

fn lenient_optional_trend<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTrend>::deserialize(deserializer)? {
        None => Ok(None),
        raw => parse_trend(raw).map(Some).map_err(serde::de::Error::custom),
    }
}
