use std::sync::Arc;
use std::time::Duration;

use pullsar_core::{CacheConfig, Capability, PullsarConfig, PullsarError, StatsConnector};
use pullsar_middleware::ConnectorBuilder;

/// Orchestrator that turns dashboard state into connector calls and chart models.
pub struct Pullsar {
    pub(crate) connector: Arc<dyn StatsConnector>,
    pub(crate) cfg: PullsarConfig,
}

/// Builder for constructing a `Pullsar` orchestrator with custom configuration.
pub struct PullsarBuilder {
    connector: Option<Arc<dyn StatsConnector>>,
    cache: Option<CacheConfig>,
    cfg: PullsarConfig,
}

impl Default for PullsarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PullsarBuilder {
    /// Create a new builder with default timeouts and no cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cache: None,
            cfg: PullsarConfig::default(),
        }
    }

    /// Set the data source. A second call replaces the first.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn StatsConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Wrap the connector in a response cache when building.
    #[must_use]
    pub fn with_cache(mut self, cfg: CacheConfig) -> Self {
        self.cache = Some(cfg);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PullsarConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Bound every single connector call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Bound operations that fan out to several connector calls.
    ///
    /// When exceeded, the operation fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Pullsar` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector has been set via [`with_connector`](Self::with_connector).
    pub fn build(self) -> Result<Pullsar, PullsarError> {
        let raw = self.connector.ok_or_else(|| {
            PullsarError::InvalidArg(
                "no connector registered; set one via with_connector(...)".to_string(),
            )
        })?;
        let connector = match &self.cache {
            Some(cache) => ConnectorBuilder::new(raw).with_cache(cache).build(),
            None => raw,
        };
        Ok(Pullsar {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Pullsar {
    /// Start building a new `Pullsar` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let pullsar = pullsar::Pullsar::builder()
    ///     .with_connector(Arc::new(pullsar_http::HttpConnector::from_env()?))
    ///     .with_cache(pullsar::CacheConfig::default())
    ///     .provider_timeout(std::time::Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> PullsarBuilder {
        PullsarBuilder::new()
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &PullsarConfig {
        &self.cfg
    }

    /// Name of the underlying connector.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    /// Wrap a connector future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pullsar::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, PullsarError>
    where
        Fut: Future<Output = Result<T, PullsarError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(PullsarError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Call the connector through `call`, bounded by the provider timeout.
    pub(crate) async fn call<'a, T, F, Fut>(
        &'a self,
        capability: Capability,
        call: F,
    ) -> Result<T, PullsarError>
    where
        F: FnOnce(&'a dyn StatsConnector) -> Fut,
        Fut: Future<Output = Result<T, PullsarError>>,
    {
        let conn = self.connector.as_ref();
        Self::provider_call_with_timeout(
            conn.name(),
            capability,
            self.cfg.provider_timeout,
            call(conn),
        )
        .await
    }

    /// Bound a fan-out operation by the request timeout, if one is configured.
    pub(crate) async fn with_request_timeout<T, Fut>(
        &self,
        capability: Capability,
        fut: Fut,
    ) -> Result<T, PullsarError>
    where
        Fut: Future<Output = Result<T, PullsarError>>,
    {
        match self.cfg.request_timeout {
            Some(limit) => (tokio::time::timeout(limit, fut).await)
                .unwrap_or_else(|_| Err(PullsarError::request_timeout(capability.as_str()))),
            None => fut.await,
        }
    }
}
