use pullsar_core::{ApiConfig, Capability, PullsarError};
use serde::Serialize;

use crate::Pullsar;

/// Values offered by the filter bar's dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// OCP versions with recorded pulls, e.g. `v4.18`.
    pub ocp_versions: Vec<String>,
    /// Sort keys accepted by listings.
    pub sort_types: Vec<String>,
}

impl Pullsar {
    /// Fetch OCP versions and sort types concurrently.
    ///
    /// # Errors
    /// The first connector error, `ProviderTimeout`, or `RequestTimeout`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "pullsar::router::filters", skip(self))
    )]
    pub async fn filters(&self) -> Result<FilterOptions, PullsarError> {
        let fetch = async {
            let (ocp_versions, sort_types) = futures::try_join!(
                self.call(Capability::OcpVersions, |c| c.ocp_versions()),
                self.call(Capability::SortTypes, |c| c.sort_types()),
            )?;
            Ok(FilterOptions {
                ocp_versions,
                sort_types,
            })
        };
        self.with_request_timeout(Capability::OcpVersions, fetch)
            .await
    }

    /// Server-side settings: data start date, export limit, aggregate catalog name.
    ///
    /// # Errors
    /// Any error from the connector, or `ProviderTimeout`.
    pub async fn api_config(&self) -> Result<ApiConfig, PullsarError> {
        self.call(Capability::Config, |c| c.api_config()).await
    }
}
