//! Display labels: shortened entity names, breadcrumbs, and trend badges.

use serde::{Deserialize, Serialize};

use pullsar_types::{Level, Scope};

/// Catalog names carry their registry path; only the last segment is shown.
///
/// `"registry.example.io/org/my-index"` shortens to `"my-index"`.
#[must_use]
pub fn short_catalog_name(full: &str) -> &str {
    full.rsplit_once('/').map_or(full, |(_, tail)| tail)
}

/// Bundle names repeat their package; only the part after the first dot is shown.
///
/// `"operator-alpha.v1.0.0"` shortens to `"v1.0.0"`.
#[must_use]
pub fn short_bundle_name(full: &str) -> &str {
    full.split_once('.').map_or(full, |(_, tail)| tail)
}

/// Label for an item listed at `level`.
#[must_use]
pub fn label_for(level: Level, name: &str) -> &str {
    match level {
        Level::Catalog => short_catalog_name(name),
        Level::Package => name,
        Level::Bundle => short_bundle_name(name),
    }
}

/// Uppercase the first character, e.g. for sort-type options.
#[must_use]
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// One step of the catalog → package → bundle navigation trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Text shown for the step.
    pub label: String,
    /// Listing the step navigates to.
    pub scope: Scope,
}

/// Navigation trail ending at `scope`.
#[must_use]
pub fn breadcrumbs(scope: &Scope) -> Vec<Breadcrumb> {
    let mut out = vec![Breadcrumb {
        label: "Catalogs".to_string(),
        scope: Scope::Catalogs,
    }];
    if let Some(catalog) = scope.catalog() {
        out.push(Breadcrumb {
            label: short_catalog_name(catalog).to_string(),
            scope: Scope::Packages {
                catalog: catalog.to_string(),
            },
        });
        if let Some(package) = scope.package() {
            out.push(Breadcrumb {
                label: package.to_string(),
                scope: scope.clone(),
            });
        }
    }
    out
}

/// Direction of a pull-count trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    /// Pulls grew over the window.
    Up,
    /// Pulls shrank over the window.
    Down,
    /// No change, or no meaningful value.
    Stable,
}

impl Trend {
    /// Classify a percentage change.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Up
        } else if value < 0.0 {
            Self::Down
        } else {
            Self::Stable
        }
    }
}

/// Render a percentage change with one decimal and a leading `+` when positive.
#[must_use]
pub fn format_trend(value: f64) -> String {
    if value.is_nan() {
        return "0.0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+inf" } else { "-inf" }.to_string();
    }
    let sign = if value > 0.0 { "+" } else { "" };
    let rendered = format!("{sign}{value:.1}");
    // tiny negatives round to "-0.0"
    if rendered == "-0.0" {
        "0.0".to_string()
    } else {
        rendered
    }
}
