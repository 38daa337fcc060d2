//! pullsar-http
//!
//! Connector that implements `StatsConnector` against the Pullsar REST API
//! (`/api/v1` by default). Every endpoint the dashboard reads is supported:
//! listings at all three levels, overall and summary statistics, CSV export,
//! and the filter and configuration lookups.
#![warn(missing_docs)]

mod request;

use async_trait::async_trait;
use pullsar_core::connector::listing_capability;
use pullsar_core::{
    ApiConfig, Capability, ExportQuery, HttpConfig, ListQuery, OverallPulls, OverallQuery,
    PaginatedResponse, PullsarError, StatsConnector, SummaryStats,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::request::Params;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// `StatsConnector` backed by the Pullsar HTTP API.
#[derive(Clone)]
pub struct HttpConnector {
    client: reqwest::Client,
    base: Url,
}

impl HttpConnector {
    /// Connector name used in error tags and logs.
    pub const NAME: &'static str = "pullsar-http";

    /// Build a connector with its own `reqwest::Client` configured from `cfg`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `cfg.base_url` is not a usable URL, or `Other`
    /// when the HTTP client cannot be constructed.
    pub fn new(cfg: &HttpConfig) -> Result<Self, PullsarError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(|e| PullsarError::Other(e.to_string()))?;
        Self::with_client(client, &cfg.base_url)
    }

    /// Build from an existing `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `base_url` does not parse or cannot carry a path.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, PullsarError> {
        let base = Url::parse(base_url)
            .map_err(|e| PullsarError::InvalidArg(format!("invalid base URL {base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(PullsarError::InvalidArg(format!(
                "base URL cannot take a path: {base_url}"
            )));
        }
        Ok(Self { client, base })
    }

    /// Build from `HttpConfig::from_env()`.
    ///
    /// # Errors
    /// See [`HttpConnector::new`].
    pub fn from_env() -> Result<Self, PullsarError> {
        Self::new(&HttpConfig::from_env())
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    fn transport_error(e: &reqwest::Error) -> PullsarError {
        PullsarError::connector(Self::NAME, e.to_string())
    }

    /// GET `segments` with `params`, returning the body of a 2xx response.
    ///
    /// Non-2xx responses become `NotFound` (404) or `Api` with the server's
    /// `detail` message, falling back to `fallback` when the body has none.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pullsar_http::fetch",
            skip(self, capability, params, fallback),
            fields(capability = %capability),
            err,
        )
    )]
    async fn fetch(
        &self,
        capability: Capability,
        segments: &[&str],
        params: &Params,
        fallback: &str,
    ) -> Result<Vec<u8>, PullsarError> {
        let url = request::endpoint(&self.base, segments)?;
        let resp = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        if status.is_success() {
            return Ok(body.to_vec());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(status = status.as_u16(), "request rejected");
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PullsarError::not_found(segments.join("/")));
        }
        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(PullsarError::api(status.as_u16(), detail))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        capability: Capability,
        segments: &[&str],
        params: &Params,
        fallback: &str,
    ) -> Result<T, PullsarError> {
        let body = self.fetch(capability, segments, params, fallback).await?;
        serde_json::from_slice(&body)
            .map_err(|e| PullsarError::Data(format!("{capability} response: {e}")))
    }
}

#[async_trait]
impl StatsConnector for HttpConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn list_items(&self, query: &ListQuery) -> Result<PaginatedResponse, PullsarError> {
        self.fetch_json(
            listing_capability(query),
            &request::listing_segments(&query.scope),
            &request::listing_params(query),
            "Failed to fetch items",
        )
        .await
    }

    async fn overall(&self, query: &OverallQuery) -> Result<OverallPulls, PullsarError> {
        self.fetch_json(
            Capability::Overall,
            &["overall"],
            &request::overall_params(query),
            "Failed to fetch overall pull statistics",
        )
        .await
    }

    async fn summary(&self) -> Result<SummaryStats, PullsarError> {
        self.fetch_json(
            Capability::Summary,
            &["summary"],
            &Params::new(),
            "Failed to fetch summary stats",
        )
        .await
    }

    async fn export_csv(&self, query: &ExportQuery) -> Result<Vec<u8>, PullsarError> {
        self.fetch(
            Capability::ExportCsv,
            &["export", "csv"],
            &request::export_params(query),
            "Failed to export data.",
        )
        .await
    }

    async fn ocp_versions(&self) -> Result<Vec<String>, PullsarError> {
        self.fetch_json(
            Capability::OcpVersions,
            &["ocp-versions"],
            &Params::new(),
            "Failed to fetch OCP versions",
        )
        .await
    }

    async fn sort_types(&self) -> Result<Vec<String>, PullsarError> {
        self.fetch_json(
            Capability::SortTypes,
            &["sort-types"],
            &Params::new(),
            "Failed to fetch sort types",
        )
        .await
    }

    async fn api_config(&self) -> Result<ApiConfig, PullsarError> {
        self.fetch_json(
            Capability::Config,
            &["config"],
            &Params::new(),
            "Failed to fetch API configuration",
        )
        .await
    }
}
