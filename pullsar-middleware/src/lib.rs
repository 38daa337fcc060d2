//! pullsar-middleware
//!
//! Wrappers that layer behavior around any `StatsConnector`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use pullsar_core::{CacheConfig, StatsConnector};
//! use pullsar_middleware::ConnectorBuilder;
//!
//! fn wrap(raw: Arc<dyn StatsConnector>) -> Arc<dyn StatsConnector> {
//!     ConnectorBuilder::new(raw)
//!         .with_cache(&CacheConfig::default())
//!         .build()
//! }
//! ```

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
