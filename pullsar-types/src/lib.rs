//! Pullsar-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod query;
mod stats;

pub use capability::Capability;
pub use config::{CacheConfig, HttpConfig, PullsarConfig};
pub use error::PullsarError;
pub use query::{
    DATE_FORMAT, DEFAULT_OCP_VERSION, DEFAULT_SORT_TYPE, DateWindow, ExportQuery, Level,
    ListQuery, OverallQuery, Scope,
};
pub use stats::{
    AggregatedPulls, ApiConfig, ChartDataPoint, ListItem, OverallPulls, PaginatedResponse,
    SummaryStats, trend_between,
};
