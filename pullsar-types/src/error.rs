use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pullsar workspace.
///
/// This wraps capability mismatches, argument validation errors, connector-tagged
/// failures, API status errors, not-found conditions, and timeouts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PullsarError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "export-csv").
        capability: String,
    },

    /// Issues with the returned or expected data (undecodable body, missing fields).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector failed before a response was obtained.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The API answered with a non-success status.
    #[error("api error ({status}): {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided `detail` or a per-endpoint fallback message.
        detail: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "packages in catalog foo".
        what: String,
    },

    /// An individual connector call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "catalogs", "overall").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl PullsarError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Api` error from a status code and detail message.
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and benign not-found conditions are not actionable;
    /// the dashboard renders them as empty states instead.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }

    /// Message suitable for display next to the control that triggered the call.
    ///
    /// API errors show the server's `detail` verbatim; everything else uses the
    /// `Display` rendering.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}
