use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use pullsar_core::labels::short_catalog_name;
use pullsar_core::{
    AggregatedPulls, ApiConfig, Capability, ExportQuery, ListItem, ListQuery, OverallPulls,
    OverallQuery, PaginatedResponse, PullsarError, Scope, StatsConnector, SummaryStats,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Items per listing page, matching the API.
pub const PAGE_SIZE: u64 = 10;

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Two catalog names are reserved: `FAIL` makes any call scoped to it fail with a
/// connector error, and `TIMEOUT` delays the call long enough to trip short
/// provider timeouts.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used in error tags.
    pub const NAME: &'static str = "pullsar-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(scope: &Scope, capability: Capability) -> Result<(), PullsarError> {
        match scope.catalog() {
            Some("FAIL") => Err(PullsarError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            Some("TIMEOUT") => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Entities listed by `scope`, each with the bundles its pulls are summed from.
    fn entities(scope: &Scope) -> Result<Vec<(String, Vec<String>)>, PullsarError> {
        match scope {
            Scope::Catalogs => Ok(fixtures::CATALOGS
                .iter()
                .map(|c| {
                    let bundles = c.packages.iter().flat_map(|p| fixtures::bundles_of(p));
                    (c.name.to_string(), bundles.collect())
                })
                .collect()),
            Scope::Packages { catalog } => {
                let c = fixtures::find_catalog(catalog)
                    .ok_or_else(|| PullsarError::not_found(format!("catalog {catalog}")))?;
                Ok(c.packages
                    .iter()
                    .map(|p| ((*p).to_string(), fixtures::bundles_of(p)))
                    .collect())
            }
            Scope::Bundles { catalog, package } => {
                let c = fixtures::find_catalog(catalog)
                    .ok_or_else(|| PullsarError::not_found(format!("catalog {catalog}")))?;
                if !c.packages.contains(&package.as_str()) {
                    return Err(PullsarError::not_found(format!(
                        "package {package} in catalog {}",
                        short_catalog_name(catalog)
                    )));
                }
                Ok(fixtures::bundles_of(package)
                    .into_iter()
                    .map(|b| (b.clone(), vec![b]))
                    .collect())
            }
        }
    }

    /// Filtered and sorted items for a listing or export, before paging.
    fn items(
        scope: &Scope,
        ocp_version: &str,
        window: &pullsar_core::DateWindow,
        search_query: &str,
        sort_type: &str,
        is_desc: bool,
    ) -> Result<Vec<ListItem>, PullsarError> {
        let needle = search_query.trim().to_lowercase();
        let mut items: Vec<ListItem> = Self::entities(scope)?
            .into_iter()
            .filter(|(name, _)| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(|(name, bundles)| ListItem {
                stats: AggregatedPulls::from_chart(fixtures::summed_chart(
                    &bundles,
                    ocp_version,
                    window,
                )),
                name,
            })
            .collect();

        let cmp: fn(&ListItem, &ListItem) -> Ordering = match sort_type {
            "pulls" => |a, b| a.stats.total_pulls.cmp(&b.stats.total_pulls),
            "name" => |a, b| a.name.cmp(&b.name),
            "trend" => |a, b| a.stats.trend.total_cmp(&b.stats.trend),
            other => {
                return Err(PullsarError::InvalidArg(format!(
                    "unknown sort type: {other}"
                )));
            }
        };
        // name breaks ties so pages are stable
        items.sort_by(|a, b| {
            let primary = if is_desc { cmp(b, a) } else { cmp(a, b) };
            primary.then_with(|| a.name.cmp(&b.name))
        });
        Ok(items)
    }

    fn csv_field(s: &str) -> String {
        if s.contains([',', '"', '\n']) {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[async_trait]
impl StatsConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn list_items(&self, query: &ListQuery) -> Result<PaginatedResponse, PullsarError> {
        let cap = pullsar_core::connector::listing_capability(query);
        Self::maybe_fail_or_timeout(&query.scope, cap).await?;
        if query.page == 0 {
            return Err(PullsarError::InvalidArg("page must be at least 1".into()));
        }
        let items = Self::items(
            &query.scope,
            &query.ocp_version,
            &query.window,
            &query.search_query,
            &query.sort_type,
            query.is_desc,
        )?;
        let total_count = items.len() as u64;
        let skip = usize::try_from(u64::from(query.page - 1) * PAGE_SIZE).unwrap_or(usize::MAX);
        let page_size = usize::try_from(PAGE_SIZE).unwrap_or(usize::MAX);
        Ok(PaginatedResponse {
            total_count,
            page_size: PAGE_SIZE,
            items: items.into_iter().skip(skip).take(page_size).collect(),
        })
    }

    async fn overall(&self, query: &OverallQuery) -> Result<OverallPulls, PullsarError> {
        let bundles: Vec<String> = Self::entities(&Scope::Catalogs)?
            .into_iter()
            .flat_map(|(_, b)| b)
            .collect();
        let agg = AggregatedPulls::from_chart(fixtures::summed_chart(
            &bundles,
            &query.ocp_version,
            &query.window,
        ));
        Ok(OverallPulls {
            total_pulls: agg.total_pulls,
            trend: Some(agg.trend),
            chart_data: agg.chart_data,
        })
    }

    async fn summary(&self) -> Result<SummaryStats, PullsarError> {
        let catalogs = fixtures::CATALOGS;
        let packages: Vec<&str> = catalogs.iter().flat_map(|c| c.packages.iter().copied()).collect();
        let bundles: Vec<String> = packages.iter().flat_map(|p| fixtures::bundles_of(p)).collect();
        let total_pulls = fixtures::full_history()
            .map(|w| {
                fixtures::summed_chart(&bundles, pullsar_core::DEFAULT_OCP_VERSION, &w)
                    .iter()
                    .map(|p| p.pulls)
                    .sum()
            })
            .unwrap_or(0);
        Ok(SummaryStats {
            total_catalogs: catalogs.len() as u64,
            total_packages: packages.len() as u64,
            total_bundles: bundles.len() as u64,
            total_pulls,
        })
    }

    async fn export_csv(&self, query: &ExportQuery) -> Result<Vec<u8>, PullsarError> {
        Self::maybe_fail_or_timeout(&query.scope, Capability::ExportCsv).await?;
        let items = Self::items(
            &query.scope,
            &query.ocp_version,
            &query.window,
            &query.search_query,
            &query.sort_type,
            query.is_desc,
        )?;
        let mut out = String::from("name,total_pulls,trend\n");
        for item in &items {
            out.push_str(&format!(
                "{},{},{}\n",
                Self::csv_field(&item.name),
                item.stats.total_pulls,
                pullsar_core::format_trend(item.stats.trend)
            ));
        }
        Ok(out.into_bytes())
    }

    async fn ocp_versions(&self) -> Result<Vec<String>, PullsarError> {
        Ok(fixtures::OCP_VERSIONS
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    async fn sort_types(&self) -> Result<Vec<String>, PullsarError> {
        Ok(fixtures::SORT_TYPES.iter().map(ToString::to_string).collect())
    }

    async fn api_config(&self) -> Result<ApiConfig, PullsarError> {
        Ok(ApiConfig {
            db_start_date: fixtures::db_start_date(),
            export_max_days: fixtures::EXPORT_MAX_DAYS,
            all_operators_catalog: fixtures::ALL_OPERATORS_CATALOG.to_string(),
        })
    }
}
