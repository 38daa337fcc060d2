//! Pullsar turns operator pull statistics into dashboard-ready models.
//!
//! Overview
//! - Fetches listings, overall statistics, and exports through any
//!   `StatsConnector` (the HTTP API in production, fixtures in tests).
//! - Bounds every connector call by a provider timeout, and fan-out
//!   operations by an optional request deadline.
//! - Derives pager windows from listing envelopes and merges daily series
//!   into chart rows keyed by date.
//! - Optionally wraps the connector in a per-capability response cache.
//!
//! Examples
//! Building an orchestrator over the HTTP API with caching:
//! ```rust,ignore
//! use std::sync::Arc;
//! use pullsar::{CacheConfig, Pullsar};
//!
//! let pullsar = Pullsar::builder()
//!     .with_connector(Arc::new(pullsar_http::HttpConnector::from_env()?))
//!     .with_cache(CacheConfig::default())
//!     .build()?;
//! ```
//!
//! Loading a page of packages and the matching export:
//! ```rust,ignore
//! use pullsar::{ListQuery, Scope};
//!
//! let today = chrono::Local::now().date_naive();
//! let q = ListQuery::defaults(today).with_scope(Scope::Packages {
//!     catalog: "registry.redhat.io/redhat/community-operator-index".into(),
//! });
//! let page = pullsar.list_page(&q).await?;
//! for entry in page.pager.entries() {
//!     print!("{entry} ");
//! }
//! let file = pullsar.export_csv(&q.to_export(), today).await?;
//! std::fs::write(&file.file_name, &file.bytes)?;
//! ```
//!
//! See `pullsar/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Pullsar, PullsarBuilder};
pub use router::export::{ExportFile, check_export_window};
pub use router::filters::FilterOptions;
pub use router::listing::ItemPage;
pub use router::overview::{OVERALL_SERIES, Overview};

pub use pullsar_middleware::CacheMiddleware;

// Re-export core types for convenience
pub use pullsar_core::{
    AggregatedPulls, ApiConfig, Breadcrumb, CacheConfig, Capability, ChartDataPoint, ChartSeries,
    ComparisonChart, ComparisonEntry, ComparisonSet, DateWindow, ExportQuery, Level, ListItem,
    ListQuery, MergedRow, OverallPulls, OverallQuery, PageEntry, Pager, PaginatedResponse,
    PullsarConfig, PullsarError, Scope, StatsConnector, SummaryStats, Trend, breadcrumbs,
    format_trend, label_for,
};
