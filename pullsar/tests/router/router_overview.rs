use pullsar::{OVERALL_SERIES, OverallQuery, PullsarError};
use pullsar_mock::MockBehavior;

use crate::helpers::{fixtures, scripted, today};

#[tokio::test]
async fn overview_combines_summary_and_overall() {
    let overview = fixtures()
        .overview(&OverallQuery::defaults(today()))
        .await
        .unwrap();
    assert_eq!(overview.summary.total_catalogs, 3);
    assert_eq!(overview.summary.total_packages, 17);
    assert_eq!(overview.summary.total_bundles, 51);
    assert_eq!(overview.overall.chart_data.len(), 15);
    let sum: u64 = overview.overall.chart_data.iter().map(|p| p.pulls).sum();
    assert_eq!(overview.overall.total_pulls, sum);
}

#[tokio::test]
async fn overview_fails_when_either_half_fails() {
    let (pullsar, ctl) = scripted();
    ctl.set_overall_behavior(MockBehavior::Fail(PullsarError::api(
        500,
        "Failed to fetch overall pull statistics",
    )))
    .await;
    let err = pullsar
        .overview(&OverallQuery::defaults(today()))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Failed to fetch overall pull statistics");
}

#[tokio::test]
async fn overall_chart_is_one_series_in_date_order() {
    let pullsar = fixtures();
    let q = OverallQuery::defaults(today());
    let overall = pullsar.overview(&q).await.unwrap().overall;
    let rows = pullsar.overall_chart(&q).await.unwrap();

    assert_eq!(rows.len(), overall.chart_data.len());
    assert_eq!(rows[0].date, "2025-02-14");
    assert_eq!(rows[rows.len() - 1].date, "2025-02-28");
    for (row, point) in rows.iter().zip(&overall.chart_data) {
        assert_eq!(row.date, point.date);
        assert_eq!(row.get(OVERALL_SERIES), Some(point.pulls));
    }
}

#[tokio::test]
async fn unknown_version_yields_an_empty_chart() {
    let mut q = OverallQuery::defaults(today());
    q.ocp_version = "v3.11".into();
    let rows = fixtures().overall_chart(&q).await.unwrap();
    assert!(rows.is_empty());
}
