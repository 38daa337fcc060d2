//! Configuration types shared across the orchestrator, middleware, and connectors.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Capability;

/// Environment variable overriding the API base URL.
const API_BASE_ENV: &str = "PULLSAR_API_BASE";

/// Longest TTL handed to cache stores; larger values are clamped.
const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Global configuration for the `Pullsar` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullsarConfig {
    /// Timeout for individual connector calls.
    pub provider_timeout: Duration,
    /// Optional deadline for operations that fan out to several calls
    /// (e.g. overview, filter options).
    pub request_timeout: Option<Duration>,
}

impl Default for PullsarConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// Settings for the HTTP connector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL every endpoint path is appended to, e.g. `http://localhost:8000/api/v1`.
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("pullsar/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    /// Defaults, with `base_url` taken from `PULLSAR_API_BASE` when set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(base) = std::env::var(API_BASE_ENV)
            && !base.trim().is_empty()
        {
            cfg.base_url = base.trim().to_string();
        }
        cfg
    }
}

/// Configuration for the caching middleware.
///
/// A TTL of zero disables caching for that capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default time-to-live in milliseconds applied when no per-capability override exists.
    pub default_ttl_ms: u64,
    /// Default maximum entries per capability store.
    pub default_max_entries: u64,
    /// Per-capability TTL overrides in milliseconds.
    pub per_capability_ttl_ms: HashMap<Capability, u64>,
    /// Per-capability capacity overrides.
    pub per_capability_max_entries: HashMap<Capability, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        let mut per_capability_ttl_ms = HashMap::new();
        // server configuration does not change while the dashboard is open
        per_capability_ttl_ms.insert(Capability::Config, u64::MAX);
        per_capability_ttl_ms.insert(Capability::OcpVersions, 60 * 60 * 1000);
        per_capability_ttl_ms.insert(Capability::SortTypes, 60 * 60 * 1000);
        per_capability_ttl_ms.insert(Capability::Summary, 5 * 60 * 1000);
        per_capability_ttl_ms.insert(Capability::ExportCsv, 0);
        Self {
            default_ttl_ms: 60 * 1000,
            default_max_entries: 256,
            per_capability_ttl_ms,
            per_capability_max_entries: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Effective TTL for a capability, or `None` when caching is disabled for it.
    ///
    /// Values above one year are clamped to one year.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        let ms = self
            .per_capability_ttl_ms
            .get(&cap)
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms).min(MAX_TTL))
    }

    /// Effective capacity for a capability (at least one entry).
    #[must_use]
    pub fn capacity_for(&self, cap: Capability) -> u64 {
        self.per_capability_max_entries
            .get(&cap)
            .copied()
            .unwrap_or(self.default_max_entries)
            .max(1)
    }
}
