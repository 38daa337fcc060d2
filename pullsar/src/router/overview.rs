use pullsar_core::{
    Capability, MergedRow, NamedSeries, OverallPulls, OverallQuery, PullsarError, SummaryStats,
    merge_series,
};
use serde::Serialize;

use crate::Pullsar;

/// Series name used for the homepage's overall chart.
pub const OVERALL_SERIES: &str = "pulls";

/// Data behind the homepage: all-time counters plus the windowed overall chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// All-time counters.
    pub summary: SummaryStats,
    /// Totals, trend, and daily points for the selected window.
    pub overall: OverallPulls,
}

impl Pullsar {
    /// All-time counters.
    ///
    /// # Errors
    /// Any error from the connector, or `ProviderTimeout`.
    pub async fn summary(&self) -> Result<SummaryStats, PullsarError> {
        self.call(Capability::Summary, |c| c.summary()).await
    }

    /// Fetch summary counters and overall statistics concurrently.
    ///
    /// Fails as soon as either call fails.
    ///
    /// # Errors
    /// The first connector error, `ProviderTimeout` for a slow call, or
    /// `RequestTimeout` when the configured request deadline passes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "pullsar::router::overview",
            skip(self, query),
            fields(ocp_version = %query.ocp_version),
        )
    )]
    pub async fn overview(&self, query: &OverallQuery) -> Result<Overview, PullsarError> {
        let fetch = async {
            let (summary, overall) = futures::try_join!(
                self.call(Capability::Summary, |c| c.summary()),
                self.call(Capability::Overall, |c| c.overall(query)),
            )?;
            Ok(Overview { summary, overall })
        };
        self.with_request_timeout(Capability::Overall, fetch).await
    }

    /// Overall pulls as chart rows under the single series [`OVERALL_SERIES`].
    ///
    /// # Errors
    /// Any error from the connector, or `ProviderTimeout`.
    pub async fn overall_chart(&self, query: &OverallQuery) -> Result<Vec<MergedRow>, PullsarError> {
        let overall = self
            .call(Capability::Overall, |c| c.overall(query))
            .await?;
        Ok(merge_series([NamedSeries::from_chart(
            OVERALL_SERIES,
            &overall.chart_data,
        )]))
    }
}
