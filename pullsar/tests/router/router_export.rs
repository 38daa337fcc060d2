use pullsar::{Capability, DateWindow, ListQuery, PullsarError, Scope, check_export_window};

use crate::helpers::{COMMUNITY, REDHAT, d, fixtures, scripted, today};

#[tokio::test]
async fn export_names_the_file_after_today() {
    let q = ListQuery::defaults(today()).to_export();
    let file = fixtures().export_csv(&q, today()).await.unwrap();
    assert_eq!(file.file_name, "pullsar_export_2025-03-01.csv");
    let body = String::from_utf8(file.bytes).unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("name,total_pulls,trend"));
    assert_eq!(lines.count(), 3);
}

#[tokio::test]
async fn export_follows_listing_scope() {
    let q = ListQuery::defaults(today())
        .with_scope(Scope::Packages {
            catalog: REDHAT.into(),
        })
        .to_export();
    let file = fixtures().export_csv(&q, today()).await.unwrap();
    let rows = String::from_utf8(file.bytes).unwrap().lines().count() - 1;
    assert_eq!(rows, 3);
}

#[tokio::test]
async fn long_windows_are_rejected_without_exporting() {
    let (pullsar, ctl) = scripted();
    let mut q = ListQuery::defaults(today()).to_export();
    q.window = DateWindow::new(d(2025, 1, 1), d(2025, 4, 1)).unwrap();
    let err = pullsar.export_csv(&q, today()).await.unwrap_err();
    assert_eq!(err, PullsarError::InvalidArg("Range exceeds 90 days.".into()));
    assert_eq!(ctl.calls(Capability::ExportCsv).await, 0);
}

#[tokio::test]
async fn windows_before_the_data_are_rejected() {
    let mut q = ListQuery::defaults(today())
        .with_scope(Scope::Packages {
            catalog: COMMUNITY.into(),
        })
        .to_export();
    q.window = DateWindow::new(d(2024, 12, 20), d(2025, 1, 10)).unwrap();
    let err = fixtures().export_csv(&q, today()).await.unwrap_err();
    assert!(matches!(err, PullsarError::InvalidArg(_)), "{err:?}");
}

#[tokio::test]
async fn export_failures_surface_the_connector_error() {
    let q = ListQuery::defaults(today())
        .with_scope(Scope::Packages {
            catalog: "FAIL".into(),
        })
        .to_export();
    let err = fixtures().export_csv(&q, today()).await.unwrap_err();
    assert!(matches!(err, PullsarError::Connector { .. }));
}

#[test]
fn window_limit_counts_both_ends() {
    let cfg = pullsar::ApiConfig {
        db_start_date: d(2025, 1, 1),
        export_max_days: 90,
        all_operators_catalog: "all_operators".into(),
    };
    // Jan 1 through Mar 31 is exactly 90 days
    let ok = DateWindow::new(d(2025, 1, 1), d(2025, 3, 31)).unwrap();
    assert!(check_export_window(&ok, &cfg).is_ok());
    let long = DateWindow::new(d(2025, 1, 1), d(2025, 4, 1)).unwrap();
    assert!(check_export_window(&long, &cfg).is_err());
    let single = DateWindow::new(d(2025, 1, 1), d(2025, 1, 1)).unwrap();
    assert!(check_export_window(&single, &cfg).is_ok());
}
