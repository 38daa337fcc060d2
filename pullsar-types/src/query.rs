//! Query and filter state shared by connectors and the orchestrator.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::PullsarError;

/// Date format used on the wire and in filter state.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// OCP version selected when the user has not picked one.
pub const DEFAULT_OCP_VERSION: &str = "v4.18";

/// Sort type selected when the user has not picked one.
pub const DEFAULT_SORT_TYPE: &str = "pulls";

/// Inclusive calendar window `[start, end]`.
///
/// Construction validates `start <= end`; both bounds serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawWindow> for DateWindow {
    type Error = PullsarError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateWindow {
    /// Build a window, rejecting inverted bounds.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PullsarError> {
        if start > end {
            return Err(PullsarError::InvalidArg(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a window from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns `InvalidArg` for malformed dates or inverted bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, PullsarError> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
                PullsarError::InvalidArg(format!("Date must be in YYYY-MM-DD format: {s}"))
            })
        };
        Self::new(parse(start)?, parse(end)?)
    }

    /// The window the dashboard opens with: fifteen days ago through yesterday.
    #[must_use]
    pub fn default_for(today: NaiveDate) -> Self {
        let start = today.checked_sub_days(Days::new(15)).unwrap_or(today);
        let end = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        Self { start, end }
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both bounds included.
    #[must_use]
    pub fn days(&self) -> u64 {
        // start <= end holds by construction
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    /// True when the window covers more than `max_days` days.
    #[must_use]
    pub fn exceeds(&self, max_days: u32) -> bool {
        self.days() > u64::from(max_days)
    }

    /// `start` formatted for the wire.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `end` formatted for the wire.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

/// Depth of a listing in the catalog → package → bundle hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Top-level catalogs.
    Catalog,
    /// Packages within one catalog.
    Package,
    /// Bundles within one package.
    Bundle,
}

/// Which listing a query targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum Scope {
    /// Every catalog.
    #[default]
    Catalogs,
    /// Packages of a catalog.
    Packages {
        /// Full catalog name.
        catalog: String,
    },
    /// Bundles of a package.
    Bundles {
        /// Full catalog name.
        catalog: String,
        /// Package name.
        package: String,
    },
}

impl Scope {
    /// Hierarchy level of the items this scope lists.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::Catalogs => Level::Catalog,
            Self::Packages { .. } => Level::Package,
            Self::Bundles { .. } => Level::Bundle,
        }
    }

    /// Catalog filter, if any.
    #[must_use]
    pub fn catalog(&self) -> Option<&str> {
        match self {
            Self::Catalogs => None,
            Self::Packages { catalog } | Self::Bundles { catalog, .. } => Some(catalog),
        }
    }

    /// Package filter, if any.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        match self {
            Self::Bundles { package, .. } => Some(package),
            _ => None,
        }
    }
}

/// Filters and paging for a catalog, package, or bundle listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    /// OCP version filter, e.g. `v4.18`.
    pub ocp_version: String,
    /// Date window for the statistics.
    pub window: DateWindow,
    /// Free-text name filter; empty means no filter.
    pub search_query: String,
    /// Sort key as offered by the API's sort types.
    pub sort_type: String,
    /// Descending order when true.
    pub is_desc: bool,
    /// 1-indexed page number.
    pub page: u32,
    /// Listing target.
    pub scope: Scope,
}

impl ListQuery {
    /// Query state the dashboard starts from on `today`.
    #[must_use]
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            ocp_version: DEFAULT_OCP_VERSION.to_string(),
            window: DateWindow::default_for(today),
            search_query: String::new(),
            sort_type: DEFAULT_SORT_TYPE.to_string(),
            is_desc: true,
            page: 1,
            scope: Scope::Catalogs,
        }
    }

    /// Same filters targeting another page.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Same filters targeting another scope; paging restarts at 1.
    #[must_use]
    pub fn with_scope(&self, scope: Scope) -> Self {
        Self {
            scope,
            page: 1,
            ..self.clone()
        }
    }

    /// The export query matching this listing's filters.
    #[must_use]
    pub fn to_export(&self) -> ExportQuery {
        ExportQuery {
            ocp_version: self.ocp_version.clone(),
            window: self.window,
            search_query: self.search_query.clone(),
            sort_type: self.sort_type.clone(),
            is_desc: self.is_desc,
            scope: self.scope.clone(),
        }
    }

    /// The overall-chart query matching this listing's version and window.
    #[must_use]
    pub fn to_overall(&self) -> OverallQuery {
        OverallQuery {
            ocp_version: self.ocp_version.clone(),
            window: self.window,
        }
    }
}

/// Filters for the overall (all catalogs) statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverallQuery {
    /// OCP version filter.
    pub ocp_version: String,
    /// Date window.
    pub window: DateWindow,
}

impl OverallQuery {
    /// Homepage defaults on `today`.
    #[must_use]
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            ocp_version: DEFAULT_OCP_VERSION.to_string(),
            window: DateWindow::default_for(today),
        }
    }
}

/// Filters for a CSV export; identical to a listing minus paging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportQuery {
    /// OCP version filter.
    pub ocp_version: String,
    /// Date window.
    pub window: DateWindow,
    /// Free-text name filter; empty means no filter.
    pub search_query: String,
    /// Sort key.
    pub sort_type: String,
    /// Descending order when true.
    pub is_desc: bool,
    /// Listing target.
    pub scope: Scope,
}
