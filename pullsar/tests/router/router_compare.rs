use pullsar::{ComparisonSet, Level, ListQuery, Scope};

use crate::helpers::{COMMUNITY, fixtures, today};

#[tokio::test]
async fn compare_charts_visible_selections() {
    let pullsar = fixtures();
    let page = pullsar
        .list_page(&ListQuery::defaults(today()))
        .await
        .unwrap();

    let mut set = ComparisonSet::new();
    for item in page.items.iter().take(2) {
        assert!(set.toggle(item.clone()));
    }
    let chart = pullsar.compare(&set, Level::Catalog);
    assert_eq!(chart.series.len(), 2);
    // catalogs are labelled by their last path segment
    assert!(chart.series.iter().all(|s| !s.label.contains('/')));
    assert_eq!(chart.rows.len(), 15);
    for s in &chart.series {
        assert!(chart.rows.iter().all(|r| r.get(&s.label).is_some()));
    }

    let hidden = chart.series[0].name.clone();
    assert_eq!(set.toggle_visibility(&hidden), Some(false));
    let chart = pullsar.compare(&set, Level::Catalog);
    assert_eq!(chart.series.len(), 1);
    assert_ne!(chart.series[0].name, hidden);
}

#[tokio::test]
async fn bundle_labels_drop_the_package_prefix() {
    let pullsar = fixtures();
    let q = ListQuery::defaults(today()).with_scope(Scope::Bundles {
        catalog: COMMUNITY.into(),
        package: "etcd".into(),
    });
    let page = pullsar.list_page(&q).await.unwrap();
    let mut set = ComparisonSet::new();
    for item in page.items {
        set.toggle(item);
    }
    let chart = pullsar.compare(&set, Level::Bundle);
    let mut labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    labels.sort_unstable();
    assert_eq!(labels, ["v1.0.0", "v1.1.0", "v2.0.0"]);
}
