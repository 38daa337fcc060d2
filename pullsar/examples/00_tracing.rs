mod common;
use common::{get_connector, today};
use pullsar::{ListQuery, Pullsar};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=pullsar=debug shows connector calls, cache hits, and timeouts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pullsar=debug")),
        )
        .with_target(true)
        .init();

    let pullsar = Pullsar::builder()
        .with_connector(get_connector())
        .with_cache(pullsar::CacheConfig::default())
        .build()?;

    let q = ListQuery::defaults(today());
    // the second call is served from the cache
    pullsar.list_page(&q).await?;
    let page = pullsar.list_page(&q).await?;
    tracing::info!(items = page.items.len(), total = page.total_count, "catalogs loaded");
    Ok(())
}
