use std::sync::Arc;

use pullsar_core::StatsConnector;

#[must_use]
pub fn get_connector() -> Arc<dyn StatsConnector> {
    if std::env::var("PULLSAR_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(pullsar_mock::MockConnector::new())
    } else {
        match pullsar_http::HttpConnector::from_env() {
            Ok(c) => Arc::new(c),
            Err(e) => {
                eprintln!("falling back to fixtures: {e}");
                Arc::new(pullsar_mock::MockConnector::new())
            }
        }
    }
}

/// Yesterday is the last complete day of data; examples pin "today" for the mock.
#[must_use]
pub fn today() -> chrono::NaiveDate {
    if std::env::var("PULLSAR_EXAMPLES_USE_MOCK").is_ok() {
        chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
    } else {
        chrono::Local::now().date_naive()
    }
}
