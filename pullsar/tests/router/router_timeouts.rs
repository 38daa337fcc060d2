use std::time::Duration;

use pullsar::{ListQuery, OverallQuery, Pullsar, PullsarError, Scope};
use pullsar_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{fixtures, scripted, today};

#[tokio::test]
async fn hanging_listing_maps_to_provider_timeout() {
    let (pullsar, ctl) = scripted();
    ctl.set_list_behavior(MockBehavior::Hang).await;
    let err = pullsar
        .list_page(&ListQuery::defaults(today()))
        .await
        .unwrap_err();
    assert_eq!(err, PullsarError::provider_timeout("scripted", "catalogs"));
}

#[tokio::test]
async fn slow_fixture_catalog_times_out() {
    let pullsar = Pullsar::builder()
        .with_connector(std::sync::Arc::new(pullsar_mock::MockConnector::new()))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();
    let q = ListQuery::defaults(today()).with_scope(Scope::Packages {
        catalog: "TIMEOUT".into(),
    });
    let err = pullsar.list_page(&q).await.unwrap_err();
    assert_eq!(err, PullsarError::provider_timeout("pullsar-mock", "packages"));
}

#[tokio::test]
async fn request_deadline_bounds_the_overview() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("slow");
    let pullsar = Pullsar::builder()
        .with_connector(conn)
        .provider_timeout(Duration::from_secs(5))
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    ctl.set_summary_behavior(MockBehavior::Hang).await;
    let err = pullsar
        .overview(&OverallQuery::defaults(today()))
        .await
        .unwrap_err();
    assert!(matches!(err, PullsarError::RequestTimeout { .. }), "{err:?}");
}

#[tokio::test]
async fn fast_calls_are_unaffected() {
    let overview = fixtures()
        .overview(&OverallQuery::defaults(today()))
        .await;
    assert!(overview.is_ok());
}
