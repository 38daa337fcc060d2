mod catalogs;
mod series;

pub use catalogs::{
    ALL_OPERATORS_CATALOG, CATALOGS, EXPORT_MAX_DAYS, OCP_VERSIONS, SORT_TYPES, bundles_of,
    find_catalog,
};
pub use series::{db_start_date, full_history, summed_chart};
