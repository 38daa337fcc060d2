//! URL and query-string construction for the statistics API.

use pullsar_core::{DateWindow, ExportQuery, ListQuery, OverallQuery, PullsarError, Scope};
use url::Url;

pub type Params = Vec<(&'static str, String)>;

/// Append `segments` to `base`, percent-encoding each one.
///
/// Catalog names contain `/`, which must not split the path.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, PullsarError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| PullsarError::InvalidArg(format!("base URL cannot take a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn listing_segments(scope: &Scope) -> Vec<&str> {
    match scope {
        Scope::Catalogs => vec!["catalogs"],
        Scope::Packages { catalog } => vec!["catalogs", catalog.as_str(), "packages"],
        Scope::Bundles { catalog, package } => {
            vec!["catalogs", catalog.as_str(), "packages", package.as_str(), "bundles"]
        }
    }
}

fn window_params(ocp_version: &str, window: &DateWindow) -> Params {
    vec![
        ("ocp_version", ocp_version.to_string()),
        ("start_date", window.start_param()),
        ("end_date", window.end_param()),
    ]
}

pub fn listing_params(q: &ListQuery) -> Params {
    let mut p = window_params(&q.ocp_version, &q.window);
    p.push(("search_query", q.search_query.clone()));
    p.push(("sort_type", q.sort_type.clone()));
    p.push(("is_desc", q.is_desc.to_string()));
    p.push(("page", q.page.to_string()));
    p
}

pub fn overall_params(q: &OverallQuery) -> Params {
    window_params(&q.ocp_version, &q.window)
}

/// Optional filters are only sent when set.
pub fn export_params(q: &ExportQuery) -> Params {
    let mut p = window_params(&q.ocp_version, &q.window);
    p.push(("sort_type", q.sort_type.clone()));
    p.push(("is_desc", q.is_desc.to_string()));
    if !q.search_query.is_empty() {
        p.push(("search_query", q.search_query.clone()));
    }
    if let Some(catalog) = q.scope.catalog() {
        p.push(("catalog_name", catalog.to_string()));
    }
    if let Some(package) = q.scope.package() {
        p.push(("package_name", package.to_string()));
    }
    p
}
