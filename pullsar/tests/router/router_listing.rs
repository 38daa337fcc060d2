use pullsar::{ListQuery, PageEntry, PullsarError, Scope};

use crate::helpers::{COMMUNITY, fixtures, today};

fn community() -> ListQuery {
    ListQuery::defaults(today()).with_scope(Scope::Packages {
        catalog: COMMUNITY.into(),
    })
}

#[tokio::test]
async fn catalogs_fit_on_one_page() {
    let page = fixtures()
        .list_page(&ListQuery::defaults(today()))
        .await
        .unwrap();
    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.pager.total_pages(), 1);
    assert!(!page.pager.is_visible());
}

#[tokio::test]
async fn pager_follows_response_counts() {
    let pullsar = fixtures();
    let first = pullsar.list_page(&community()).await.unwrap();
    assert_eq!(first.total_count, 12);
    assert_eq!(first.page_size, 10);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.pager.total_pages(), 2);
    assert_eq!(
        first.pager.entries(),
        [PageEntry::Page(1), PageEntry::Page(2)]
    );
    assert_eq!(first.pager.next(), Some(2));

    let second = pullsar.list_page(&community().with_page(2)).await.unwrap();
    assert_eq!(second.items.len(), 2);
    assert!(second.pager.is_active(2));
    assert_eq!(second.pager.next(), None);
}

#[tokio::test]
async fn descending_pulls_is_the_default_order() {
    let page = fixtures().list_page(&community()).await.unwrap();
    let pulls: Vec<u64> = page.items.iter().map(|i| i.stats.total_pulls).collect();
    assert!(pulls.windows(2).all(|w| w[0] >= w[1]), "{pulls:?}");
}

#[tokio::test]
async fn search_narrows_the_listing() {
    let mut q = community();
    q.search_query = "OPERATOR".into();
    let page = fixtures().list_page(&q).await.unwrap();
    assert!(page.total_count > 0);
    assert!(page.items.iter().all(|i| i.name.contains("operator")));
}

#[tokio::test]
async fn page_zero_is_rejected_before_any_call() {
    let (pullsar, ctl) = crate::helpers::scripted();
    let err = pullsar
        .list_page(&community().with_page(0))
        .await
        .unwrap_err();
    assert!(matches!(err, PullsarError::InvalidArg(_)));
    assert!(ctl.list_requests().await.is_empty());
}

#[tokio::test]
async fn unknown_catalog_is_not_found() {
    let q = ListQuery::defaults(today()).with_scope(Scope::Packages {
        catalog: "nope".into(),
    });
    let err = fixtures().list_page(&q).await.unwrap_err();
    assert!(matches!(err, PullsarError::NotFound { .. }));
}

#[tokio::test]
async fn connector_failures_propagate() {
    let q = ListQuery::defaults(today()).with_scope(Scope::Packages {
        catalog: "FAIL".into(),
    });
    match fixtures().list_page(&q).await {
        Err(PullsarError::Connector { connector, msg }) => {
            assert_eq!(connector, "pullsar-mock");
            assert!(msg.contains("packages"), "{msg}");
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}
