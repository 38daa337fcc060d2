use std::sync::Arc;
use std::time::Duration;

use pullsar::{CacheConfig, Capability, ListQuery, Pullsar, PullsarError};
use pullsar_mock::{DynamicMockConnector, MockConnector};

use crate::helpers::today;

#[test]
fn build_without_connector_is_rejected() {
    match Pullsar::builder().build() {
        Err(PullsarError::InvalidArg(msg)) => assert!(msg.contains("with_connector")),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn later_connector_replaces_earlier_one() {
    let (dynamic, _ctl) = DynamicMockConnector::new_with_controller("second");
    let pullsar = Pullsar::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .with_connector(dynamic)
        .build()
        .unwrap();
    assert_eq!(pullsar.connector_name(), "second");
}

#[test]
fn timeouts_land_in_config() {
    let pullsar = Pullsar::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_secs(3))
        .request_timeout(Duration::from_secs(7))
        .build()
        .unwrap();
    assert_eq!(pullsar.config().provider_timeout, Duration::from_secs(3));
    assert_eq!(pullsar.config().request_timeout, Some(Duration::from_secs(7)));
}

#[tokio::test]
async fn cache_serves_repeated_listings() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("cached");
    let pullsar = Pullsar::builder()
        .with_connector(conn)
        .with_cache(CacheConfig::default())
        .build()
        .unwrap();
    assert_eq!(pullsar.connector_name(), "cached");

    let q = ListQuery::defaults(today());
    let first = pullsar.list_page(&q).await.unwrap();
    let second = pullsar.list_page(&q).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(ctl.calls(Capability::Catalogs).await, 1);

    pullsar.list_page(&q.with_page(2)).await.unwrap();
    assert_eq!(ctl.calls(Capability::Catalogs).await, 2);
}
