use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for endpoints, errors, and telemetry.
///
/// These map one-to-one with the Pullsar API endpoints and allow consistent
/// Display formatting and match-exhaustive handling when adding new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Paginated catalog listing.
    Catalogs,
    /// Paginated package listing within a catalog.
    Packages,
    /// Paginated bundle listing within a package.
    Bundles,

    /// Overall pull totals and chart across all catalogs.
    Overall,
    /// Homepage summary counters.
    Summary,
    /// CSV export of a filtered listing.
    ExportCsv,

    /// Available OCP versions for the version selector.
    OcpVersions,
    /// Available sort types for the sort selector.
    SortTypes,
    /// Server-side configuration (database start date, export limits).
    Config,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalogs => "catalogs",
            Self::Packages => "packages",
            Self::Bundles => "bundles",
            Self::Overall => "overall",
            Self::Summary => "summary",
            Self::ExportCsv => "export-csv",
            Self::OcpVersions => "ocp-versions",
            Self::SortTypes => "sort-types",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
