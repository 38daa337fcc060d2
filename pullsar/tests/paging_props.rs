use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use pullsar::{ListQuery, Pullsar, Scope};
use pullsar_mock::MockConnector;

const COMMUNITY: &str = "registry.redhat.io/redhat/community-operator-index";

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn walking_every_page_yields_each_item_once(
        needle in prop::sample::select(vec!["", "o", "operator", "e", "kafka", "zzz"]),
        sort in prop::sample::select(vec!["pulls", "name", "trend"]),
        is_desc in any::<bool>(),
        day in 0u64..200,
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap() + chrono::Days::new(day);
        let pullsar = Pullsar::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .build()
            .unwrap();
        let mut q = ListQuery::defaults(today).with_scope(Scope::Packages {
            catalog: COMMUNITY.into(),
        });
        q.search_query = needle.to_string();
        q.sort_type = sort.to_string();
        q.is_desc = is_desc;

        let rt = runtime();
        let first = rt.block_on(pullsar.list_page(&q)).unwrap();
        let pages = first.pager.total_pages();
        let mut seen = HashSet::new();
        for page in 1..=pages.max(1) {
            let p = rt.block_on(pullsar.list_page(&q.with_page(page))).unwrap();
            prop_assert_eq!(p.total_count, first.total_count);
            prop_assert_eq!(p.pager.total_pages(), pages);
            for item in p.items {
                prop_assert!(seen.insert(item.name));
            }
        }
        prop_assert_eq!(seen.len() as u64, first.total_count);
    }
}
