// Shared fixtures so tests can `use crate::helpers::*;`
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use pullsar::Pullsar;
use pullsar_mock::{DynamicMockConnector, DynamicMockController, MockConnector};

pub const COMMUNITY: &str = "registry.redhat.io/redhat/community-operator-index";
pub const REDHAT: &str = "registry.redhat.io/redhat/redhat-operator-index";

/// A day well inside the fixtures' history.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Orchestrator over the static fixtures.
pub fn fixtures() -> Pullsar {
    Pullsar::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

/// Orchestrator over a scriptable mock with a short provider timeout.
pub fn scripted() -> (Pullsar, DynamicMockController) {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("scripted");
    let pullsar = Pullsar::builder()
        .with_connector(conn)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    (pullsar, ctl)
}
