use chrono::NaiveDate;
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::collections::HashSet;

use telecomdash::data::{Field, Priority, Project, Region, SiteType, Status, Table};
use telecomdash::filter::{filter, Criteria};
use telecomdash::metrics::{average_progress, count_by_category, count_total};

fn build_table(rows: Vec<(usize, usize, u8)>) -> Table {
    rows.into_iter()
        .enumerate()
        .map(|(i, (r, s, progress))| Project {
            project_id: format!("PRJ-{:04}", i + 1),
            project_name: format!("Telecom Site {:04}", i + 1),
            region: Region::ALL[r],
            status: Status::ALL[s],
            site_type: SiteType::Rooftop,
            progress,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            budget: 500_000,
            priority: Priority::Low,
        })
        .collect()
}

fn arb_table() -> impl Strategy<Value = Table> {
    prop::collection::vec((0..Region::ALL.len(), 0..Status::ALL.len(), 0u8..=100), 0..60)
        .prop_map(build_table)
}

fn arb_region() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("All".to_string()),
        Just(String::new()),
        Just("North".to_string()),
        Just("Central".to_string()),
        Just("north".to_string()),
    ]
}

fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("All".to_string()),
        Just("Completed".to_string()),
        Just("In Progress".to_string()),
        Just("On Hold".to_string()),
    ]
}

fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[0-9]{1,3}",
        Just("prj".to_string()),
        Just("SITE 00".to_string()),
        "[a-z]{1,3}",
    ]
}

fn ids(t: &Table) -> Vec<String> {
    t.iter().map(|p| p.project_id.clone()).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filter_returns_ordered_subset(
        table in arb_table(),
        region in arb_region(),
        status in arb_status(),
        search in arb_search(),
    ) {
        let c = Criteria::new(Some(&region), Some(&status), Some(&search));
        let out = filter(&table, &c);
        let source: Vec<String> = ids(&table);
        let mut cursor = source.iter();
        for id in ids(&out) {
            prop_assert!(cursor.any(|s| *s == id), "{} missing or out of order", id);
        }
        for p in &out {
            prop_assert!(table.iter().any(|q| q == p));
        }
    }

    #[test]
    fn filter_is_idempotent(
        table in arb_table(),
        region in arb_region(),
        status in arb_status(),
        search in arb_search(),
    ) {
        let c = Criteria::new(Some(&region), Some(&status), Some(&search));
        let once = filter(&table, &c);
        let twice = filter(&once, &c);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn region_and_status_commute(
        table in arb_table(),
        region in arb_region(),
        status in arb_status(),
    ) {
        let both = filter(&table, &Criteria::new(Some(&region), Some(&status), None));
        let region_then_status = filter(
            &filter(&table, &Criteria::default().region(&region)),
            &Criteria::default().status(&status),
        );
        let status_then_region = filter(
            &filter(&table, &Criteria::default().status(&status)),
            &Criteria::default().region(&region),
        );
        prop_assert_eq!(&both, &region_then_status);
        prop_assert_eq!(&both, &status_then_region);
    }

    #[test]
    fn unconstrained_filter_is_identity(table in arb_table()) {
        let out = filter(&table, &Criteria::default());
        prop_assert_eq!(count_total(&out), count_total(&table));
        prop_assert_eq!(out, table);
    }

    #[test]
    fn status_counts_sum_to_total(table in arb_table()) {
        let counts = count_by_category(&table, Field::Status);
        prop_assert_eq!(counts.values().sum::<usize>(), count_total(&table));
        let distinct: HashSet<Status> = table.iter().map(|p| p.status).collect();
        prop_assert_eq!(counts.len(), distinct.len());
    }

    #[test]
    fn constant_progress_average_is_exact(n in 1usize..80, p in 0u8..=100) {
        let table = build_table(vec![(0, 0, p); n]);
        prop_assert_eq!(average_progress(&table), Some(f64::from(p)));
    }
}
