use pullsar_core::connector::listing_capability;
use pullsar_core::{ListItem, ListQuery, Pager, PullsarError};
use serde::Serialize;

use crate::Pullsar;

/// One page of a catalog, package, or bundle listing, with its pager controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPage {
    /// Items on the requested page.
    pub items: Vec<ListItem>,
    /// Matching items across all pages.
    pub total_count: u64,
    /// Items per page reported by the data source.
    pub page_size: u64,
    /// Page window for the controls under the table.
    pub pager: Pager,
}

impl Pullsar {
    /// Fetch one listing page.
    ///
    /// The pager is derived from the response's counts rather than the
    /// request, so it reflects what the data source actually holds.
    ///
    /// # Errors
    /// Returns `InvalidArg` for page 0, and any error from the connector.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "pullsar::router::listing",
            skip(self, query),
            fields(scope = ?query.scope, page = query.page),
        )
    )]
    pub async fn list_page(&self, query: &ListQuery) -> Result<ItemPage, PullsarError> {
        if query.page == 0 {
            return Err(PullsarError::InvalidArg("page must be at least 1".into()));
        }
        let resp = self
            .call(listing_capability(query), |c| c.list_items(query))
            .await?;
        let pager = Pager::from_counts(query.page, resp.total_count, resp.page_size);
        Ok(ItemPage {
            items: resp.items,
            total_count: resp.total_count,
            page_size: resp.page_size,
            pager,
        })
    }
}
