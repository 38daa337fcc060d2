//! pullsar-core
//!
//! Core types, traits, and display logic shared across the Pullsar crates.
//!
//! - `types`: re-exported payloads, query state, and configuration.
//! - `connector`: the `StatsConnector` trait every data source implements.
//! - `pagination`: page-window computation for pager controls.
//! - `timeseries`: merging independently fetched series into chart rows.
//! - `comparison`: the comparison tray's selection, colors, and visibility.
//! - `labels` / `dates`: display helpers for names, trends, and calendar days.
//!
//! Everything outside `connector` and `middleware` is synchronous and pure:
//! hosts re-run these functions whenever their inputs change.
#![warn(missing_docs)]

/// The `StatsConnector` interface implemented by data sources.
pub mod connector;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;

pub mod comparison;
pub mod dates;
pub mod labels;
pub mod pagination;
/// Time-series utilities for merging chart data.
pub mod timeseries;
pub mod types;

pub use comparison::{ChartSeries, ComparisonChart, ComparisonEntry, ComparisonSet, LINE_COLORS};
pub use connector::StatsConnector;
pub use labels::{Breadcrumb, Trend, breadcrumbs, format_trend, label_for};
pub use middleware::Middleware;
pub use pagination::{PageEntry, PageSet, Pager, compute_window, total_pages};
pub use timeseries::merge::{MergedRow, NamedSeries, SeriesPoint, merge_series, series_names};
pub use types::*;
