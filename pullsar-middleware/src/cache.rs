use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use pullsar_core::connector::listing_capability;
use pullsar_core::{
    ApiConfig, CacheConfig, Capability, ExportQuery, ListQuery, Middleware, OverallPulls,
    OverallQuery, PaginatedResponse, PullsarError, StatsConnector, SummaryStats,
};

type Store<K, V> = Cache<K, Arc<V>>;

fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Store<K, V>>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    let ttl = cfg.ttl_for(cap)?;
    Some(
        Cache::builder()
            .max_capacity(cfg.capacity_for(cap))
            .time_to_live(ttl)
            .build(),
    )
}

/// Serve `key` from `store`, or fetch and remember it. Errors are never stored.
async fn cached<K, V, F, Fut>(
    store: Option<&Store<K, V>>,
    cap: Capability,
    key: K,
    fetch: F,
) -> Result<V, PullsarError>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<V, PullsarError>> + Send,
{
    let Some(store) = store else {
        return fetch().await;
    };
    if let Some(hit) = store.get(&key).await {
        #[cfg(feature = "tracing")]
        tracing::debug!(capability = cap.as_str(), "cache hit");
        return Ok((*hit).clone());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(capability = cap.as_str(), "cache miss");
    #[cfg(not(feature = "tracing"))]
    let _ = cap;

    let value = fetch().await?;
    store.insert(key, Arc::new(value.clone())).await;
    Ok(value)
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Wrap connectors with caches sized and timed by `cfg`.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn StatsConnector>) -> Arc<dyn StatsConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "default_ttl_ms": self.cfg.default_ttl_ms,
            "default_max_entries": self.cfg.default_max_entries,
            "per_capability_ttl_ms": self.cfg.per_capability_ttl_ms,
            "per_capability_max_entries": self.cfg.per_capability_max_entries,
        })
    }
}

// Per-capability typed stores; `None` means disabled (TTL=0).
struct Stores {
    catalogs: Option<Store<ListQuery, PaginatedResponse>>,
    packages: Option<Store<ListQuery, PaginatedResponse>>,
    bundles: Option<Store<ListQuery, PaginatedResponse>>,
    overall: Option<Store<OverallQuery, OverallPulls>>,
    summary: Option<Store<(), SummaryStats>>,
    export_csv: Option<Store<ExportQuery, Vec<u8>>>,
    ocp_versions: Option<Store<(), Vec<String>>>,
    sort_types: Option<Store<(), Vec<String>>>,
    config: Option<Store<(), ApiConfig>>,
}

/// Connector that remembers successful responses of the connector it wraps.
///
/// Each capability has its own store, keyed by the full query that produced the
/// response, so changing any filter, the page, or the scope is a miss.
pub struct CachingConnector {
    inner: Arc<dyn StatsConnector>,
    stores: Stores,
}

impl CachingConnector {
    /// Wrap `inner` with caches configured by `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn StatsConnector>, cfg: &CacheConfig) -> Self {
        let stores = Stores {
            catalogs: maybe_store(cfg, Capability::Catalogs),
            packages: maybe_store(cfg, Capability::Packages),
            bundles: maybe_store(cfg, Capability::Bundles),
            overall: maybe_store(cfg, Capability::Overall),
            summary: maybe_store(cfg, Capability::Summary),
            export_csv: maybe_store(cfg, Capability::ExportCsv),
            ocp_versions: maybe_store(cfg, Capability::OcpVersions),
            sort_types: maybe_store(cfg, Capability::SortTypes),
            config: maybe_store(cfg, Capability::Config),
        };
        Self { inner, stores }
    }

    /// Drop every cached response.
    pub fn invalidate_all(&self) {
        let s = &self.stores;
        [&s.catalogs, &s.packages, &s.bundles]
            .into_iter()
            .flatten()
            .for_each(|c| c.invalidate_all());
        [&s.ocp_versions, &s.sort_types]
            .into_iter()
            .flatten()
            .for_each(|c| c.invalidate_all());
        s.overall.iter().for_each(|c| c.invalidate_all());
        s.summary.iter().for_each(|c| c.invalidate_all());
        s.export_csv.iter().for_each(|c| c.invalidate_all());
        s.config.iter().for_each(|c| c.invalidate_all());
    }

    fn listing_store(&self, cap: Capability) -> Option<&Store<ListQuery, PaginatedResponse>> {
        match cap {
            Capability::Packages => self.stores.packages.as_ref(),
            Capability::Bundles => self.stores.bundles.as_ref(),
            _ => self.stores.catalogs.as_ref(),
        }
    }
}

#[async_trait]
impl StatsConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn list_items(&self, query: &ListQuery) -> Result<PaginatedResponse, PullsarError> {
        let cap = listing_capability(query);
        cached(self.listing_store(cap), cap, query.clone(), || {
            self.inner.list_items(query)
        })
        .await
    }

    async fn overall(&self, query: &OverallQuery) -> Result<OverallPulls, PullsarError> {
        cached(
            self.stores.overall.as_ref(),
            Capability::Overall,
            query.clone(),
            || self.inner.overall(query),
        )
        .await
    }

    async fn summary(&self) -> Result<SummaryStats, PullsarError> {
        cached(self.stores.summary.as_ref(), Capability::Summary, (), || {
            self.inner.summary()
        })
        .await
    }

    async fn export_csv(&self, query: &ExportQuery) -> Result<Vec<u8>, PullsarError> {
        cached(
            self.stores.export_csv.as_ref(),
            Capability::ExportCsv,
            query.clone(),
            || self.inner.export_csv(query),
        )
        .await
    }

    async fn ocp_versions(&self) -> Result<Vec<String>, PullsarError> {
        cached(
            self.stores.ocp_versions.as_ref(),
            Capability::OcpVersions,
            (),
            || self.inner.ocp_versions(),
        )
        .await
    }

    async fn sort_types(&self) -> Result<Vec<String>, PullsarError> {
        cached(
            self.stores.sort_types.as_ref(),
            Capability::SortTypes,
            (),
            || self.inner.sort_types(),
        )
        .await
    }

    async fn api_config(&self) -> Result<ApiConfig, PullsarError> {
        cached(self.stores.config.as_ref(), Capability::Config, (), || {
            self.inner.api_config()
        })
        .await
    }
}
