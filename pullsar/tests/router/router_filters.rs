use crate::helpers::{d, fixtures};

#[tokio::test]
async fn filters_list_versions_and_sort_types() {
    let opts = fixtures().filters().await.unwrap();
    assert_eq!(
        opts.ocp_versions,
        ["v4.14", "v4.15", "v4.16", "v4.17", "v4.18"]
    );
    assert_eq!(opts.sort_types, ["pulls", "name", "trend"]);
}

#[tokio::test]
async fn api_config_comes_from_the_connector() {
    let cfg = fixtures().api_config().await.unwrap();
    assert_eq!(cfg.db_start_date, d(2025, 1, 1));
    assert_eq!(cfg.export_max_days, 90);
    assert_eq!(cfg.all_operators_catalog, "all_operators");
}
