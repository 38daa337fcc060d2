//! Builder for composing connectors with middleware layers.
//!
//! Layers form an onion around the raw connector. `layers` is stored
//! outermost-first (the last layer added wraps everything added before it) and
//! applied in reverse during `build()`:
//!
//! ```text
//! builder.layer(a).layer(b)
//!
//! Storage: [b, a]
//! Applied: Raw -> a -> b
//! Result:  b(a(Raw))
//! ```

use std::sync::Arc;

use pullsar_core::{CacheConfig, Middleware, StatsConnector};
use serde_json::json;

use crate::cache::CacheMiddleware;

const CACHE_LAYER: &str = "CachingMiddleware";

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn StatsConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn StatsConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace response caching.
    ///
    /// The cache becomes the outermost layer so hits never reach inner layers.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self.layers
            .insert(0, Box::new(CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove caching if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Names of the configured layers, outermost first.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|m| m.name()).collect()
    }

    /// Snapshot of the stack for logging, outermost first, ending with the raw connector.
    #[must_use]
    pub fn describe(&self) -> serde_json::Value {
        let mut out: Vec<serde_json::Value> = self
            .layers
            .iter()
            .map(|m| json!({ "name": m.name(), "config": m.config_json() }))
            .collect();
        out.push(json!({ "name": "RawConnector", "config": { "name": self.raw.name() } }));
        serde_json::Value::Array(out)
    }

    /// Build the wrapped connector, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn StatsConnector> {
        let mut acc: Arc<dyn StatsConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
