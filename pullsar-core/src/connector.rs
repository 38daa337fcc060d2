use async_trait::async_trait;

use crate::PullsarError;
use pullsar_types::{
    ApiConfig, Capability, ExportQuery, ListQuery, OverallPulls, OverallQuery, PaginatedResponse,
    SummaryStats,
};

/// A source of Pullsar statistics.
///
/// Implementations translate typed queries into whatever transport they use
/// (HTTP, fixtures, another cache) and normalize failures into `PullsarError`.
/// The listing, overall, and summary endpoints are required; the auxiliary
/// endpoints default to `Unsupported` so minimal sources stay small.
#[async_trait]
pub trait StatsConnector: Send + Sync {
    /// Stable connector name used in error tags and logs.
    fn name(&self) -> &'static str;

    /// Fetch one page of catalogs, packages, or bundles, depending on `query.scope`.
    async fn list_items(&self, query: &ListQuery) -> Result<PaginatedResponse, PullsarError>;

    /// Fetch overall totals and chart data across every catalog.
    async fn overall(&self, query: &OverallQuery) -> Result<OverallPulls, PullsarError>;

    /// Fetch the homepage summary counters.
    async fn summary(&self) -> Result<SummaryStats, PullsarError>;

    /// Export the filtered listing as CSV bytes.
    async fn export_csv(&self, _query: &ExportQuery) -> Result<Vec<u8>, PullsarError> {
        Err(PullsarError::unsupported(Capability::ExportCsv.as_str()))
    }

    /// OCP versions available for filtering.
    async fn ocp_versions(&self) -> Result<Vec<String>, PullsarError> {
        Err(PullsarError::unsupported(Capability::OcpVersions.as_str()))
    }

    /// Sort types accepted by `ListQuery::sort_type`.
    async fn sort_types(&self) -> Result<Vec<String>, PullsarError> {
        Err(PullsarError::unsupported(Capability::SortTypes.as_str()))
    }

    /// Server-side configuration.
    async fn api_config(&self) -> Result<ApiConfig, PullsarError> {
        Err(PullsarError::unsupported(Capability::Config.as_str()))
    }
}

/// Capability label for a listing query, derived from its scope.
#[must_use]
pub const fn listing_capability(query: &ListQuery) -> Capability {
    match query.scope.level() {
        pullsar_types::Level::Catalog => Capability::Catalogs,
        pullsar_types::Level::Package => Capability::Packages,
        pullsar_types::Level::Bundle => Capability::Bundles,
    }
}
