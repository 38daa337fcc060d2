use chrono::NaiveDate;
use httpmock::prelude::*;
use pullsar_core::{
    ListQuery, OverallQuery, PullsarError, Scope, StatsConnector,
};
use pullsar_http::HttpConnector;
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn connector(server: &MockServer) -> HttpConnector {
    HttpConnector::with_client(reqwest::Client::new(), &server.url("/api/v1")).unwrap()
}

fn item(name: &str, trend: serde_json::Value) -> serde_json::Value {
    json!({
        "name": name,
        "stats": {
            "total_pulls": 12,
            "trend": trend,
            "chart_data": [
                {"date": "2025-02-14", "pulls": 4},
                {"date": "2025-02-15", "pulls": 8}
            ]
        }
    })
}

#[tokio::test]
async fn catalogs_listing_sends_filters_and_decodes_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/catalogs")
                .query_param("ocp_version", "v4.18")
                .query_param("start_date", "2025-02-14")
                .query_param("end_date", "2025-02-28")
                .query_param("sort_type", "pulls")
                .query_param("is_desc", "true")
                .query_param("page", "2");
            then.status(200).json_body(json!({
                "total_count": 11,
                "page_size": 10,
                "items": [item("registry.io/org/index", json!(100.0))]
            }));
        })
        .await;

    let conn = connector(&server);
    let page = conn
        .list_items(&ListQuery::defaults(today()).with_page(2))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(page.total_count, 11);
    assert_eq!(page.items[0].name, "registry.io/org/index");
    assert_eq!(page.items[0].stats.chart_data.len(), 2);
}

#[tokio::test]
async fn bundles_listing_nests_under_catalog_and_package() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/catalogs/community/packages/etcd/bundles");
            then.status(200).json_body(json!({
                "total_count": 1,
                "page_size": 10,
                "items": [item("etcd.v0.9.4", json!("Infinity"))]
            }));
        })
        .await;

    let q = ListQuery::defaults(today()).with_scope(Scope::Bundles {
        catalog: "community".into(),
        package: "etcd".into(),
    });
    let page = connector(&server).list_items(&q).await.unwrap();
    mock.assert_async().await;
    assert!(page.items[0].stats.trend.is_infinite());
}

#[tokio::test]
async fn server_detail_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/export/csv");
            then.status(400)
                .json_body(json!({"detail": "Date range cannot exceed 90 days."}));
        })
        .await;

    let q = ListQuery::defaults(today()).to_export();
    let err = connector(&server).export_csv(&q).await.unwrap_err();
    assert_eq!(
        err,
        PullsarError::api(400, "Date range cannot exceed 90 days.")
    );
    assert_eq!(err.user_message(), "Date range cannot exceed 90 days.");
}

#[tokio::test]
async fn missing_detail_falls_back_per_endpoint() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/catalogs");
            then.status(500).body("Internal Server Error");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/export/csv");
            then.status(502).json_body(json!({"error": "bad gateway"}));
        })
        .await;

    let conn = connector(&server);
    let err = conn
        .list_items(&ListQuery::defaults(today()))
        .await
        .unwrap_err();
    assert_eq!(err, PullsarError::api(500, "Failed to fetch items"));

    let err = conn
        .export_csv(&ListQuery::defaults(today()).to_export())
        .await
        .unwrap_err();
    assert_eq!(err, PullsarError::api(502, "Failed to export data."));
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/summary");
            then.status(404).json_body(json!({"detail": "Not Found"}));
        })
        .await;

    let err = connector(&server).summary().await.unwrap_err();
    assert!(matches!(err, PullsarError::NotFound { .. }));
    assert!(!err.is_actionable());
}

#[tokio::test]
async fn malformed_body_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/overall");
            then.status(200).json_body(json!({"total_pulls": "lots"}));
        })
        .await;

    let err = connector(&server)
        .overall(&OverallQuery::defaults(today()))
        .await
        .unwrap_err();
    assert!(matches!(err, PullsarError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_connector_error() {
    let conn =
        HttpConnector::with_client(reqwest::Client::new(), "http://127.0.0.1:1/api/v1").unwrap();
    match conn.ocp_versions().await {
        Err(PullsarError::Connector { connector, .. }) => assert_eq!(connector, "pullsar-http"),
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn auxiliary_endpoints_decode() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/ocp-versions");
            then.status(200).json_body(json!(["v4.17", "v4.18"]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/sort-types");
            then.status(200).json_body(json!(["pulls", "name"]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/config");
            then.status(200).json_body(json!({
                "db_start_date": "2025-05-01",
                "export_max_days": 90,
                "all_operators_catalog": "all_operators"
            }));
        })
        .await;
    let csv = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/export/csv")
                .query_param("catalog_name", "community")
                .query_param("search_query", "etcd");
            then.status(200)
                .header("content-type", "text/csv")
                .body("name,total_pulls\netcd,3\n");
        })
        .await;

    let conn = connector(&server);
    assert_eq!(conn.ocp_versions().await.unwrap(), ["v4.17", "v4.18"]);
    assert_eq!(conn.sort_types().await.unwrap(), ["pulls", "name"]);
    let cfg = conn.api_config().await.unwrap();
    assert_eq!(cfg.export_max_days, 90);
    assert_eq!(cfg.all_operators_catalog, "all_operators");

    let mut q = ListQuery::defaults(today()).with_scope(Scope::Packages {
        catalog: "community".into(),
    });
    q.search_query = "etcd".into();
    let bytes = conn.export_csv(&q.to_export()).await.unwrap();
    csv.assert_async().await;
    assert_eq!(bytes, b"name,total_pulls\netcd,3\n");
}

#[test]
fn opaque_base_url_is_rejected() {
    assert!(matches!(
        HttpConnector::with_client(reqwest::Client::new(), "not a url"),
        Err(PullsarError::InvalidArg(_))
    ));
}
