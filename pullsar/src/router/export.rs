use chrono::NaiveDate;
use pullsar_core::dates::export_file_name;
use pullsar_core::{ApiConfig, Capability, DATE_FORMAT, DateWindow, ExportQuery, PullsarError};
use serde::Serialize;

use crate::Pullsar;

/// A CSV export ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    /// Suggested file name, `pullsar_export_<today>.csv`.
    pub file_name: String,
    /// CSV body exactly as produced by the data source.
    pub bytes: Vec<u8>,
}

/// Reject windows the export endpoint would refuse.
///
/// # Errors
/// `InvalidArg` when the window spans more than `export_max_days` days
/// (both ends counted) or starts before the first day with data.
pub fn check_export_window(window: &DateWindow, cfg: &ApiConfig) -> Result<(), PullsarError> {
    if window.exceeds(cfg.export_max_days) {
        return Err(PullsarError::InvalidArg(format!(
            "Range exceeds {} days.",
            cfg.export_max_days
        )));
    }
    if window.start() < cfg.db_start_date {
        return Err(PullsarError::InvalidArg(format!(
            "Start date cannot be before {}.",
            cfg.db_start_date.format(DATE_FORMAT)
        )));
    }
    Ok(())
}

impl Pullsar {
    /// Export the rows matching `query` as CSV.
    ///
    /// The window is checked against the API configuration before the export
    /// itself is requested; `today` names the file.
    ///
    /// # Errors
    /// `InvalidArg` for a window outside the export limits, otherwise any error
    /// from the connector or `ProviderTimeout`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "pullsar::router::export",
            skip(self, query),
            fields(scope = ?query.scope, days = query.window.days()),
        )
    )]
    pub async fn export_csv(
        &self,
        query: &ExportQuery,
        today: NaiveDate,
    ) -> Result<ExportFile, PullsarError> {
        let cfg = self.api_config().await?;
        check_export_window(&query.window, &cfg)?;
        let bytes = self
            .call(Capability::ExportCsv, |c| c.export_csv(query))
            .await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = bytes.len(), "export ready");
        Ok(ExportFile {
            file_name: export_file_name(today),
            bytes,
        })
    }
}
