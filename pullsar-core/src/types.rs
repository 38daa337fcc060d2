//! Re-export of foundational types from `pullsar-types`.
// Consolidated re-exports so downstream crates can depend on `pullsar-core` only

pub use pullsar_types::{Capability, PullsarError};

pub use pullsar_types::{CacheConfig, HttpConfig, PullsarConfig};

pub use pullsar_types::{
    AggregatedPulls, ApiConfig, ChartDataPoint, ListItem, OverallPulls, PaginatedResponse,
    SummaryStats, trend_between,
};

pub use pullsar_types::{
    DATE_FORMAT, DEFAULT_OCP_VERSION, DEFAULT_SORT_TYPE, DateWindow, ExportQuery, Level,
    ListQuery, OverallQuery, Scope,
};
