use chrono::{Duration, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{Priority, Project, Region, SiteType, Status, Table};
use crate::logging::{log_generated, ProfileScope};

/// Seed used for session datasets.
pub const DEFAULT_SEED: u64 = 42;

/// Start dates fall within this many days before `today`.
const START_WINDOW_DAYS: i64 = 365;
const BUDGET_MIN: u64 = 100_000;
const BUDGET_MAX: u64 = 1_000_000;

/// Generate `n` projects with the default seed, dated relative to today (UTC).
pub fn generate(n: usize) -> Table {
    generate_with(n, DEFAULT_SEED, Utc::now().date_naive())
}

/// Deterministic generator: same `n`, `seed` and `today` give the same table.
///
/// Columns are drawn one at a time across all rows, so adding a column at the
/// end never perturbs the earlier ones.
pub fn generate_with(n: usize, seed: u64, today: NaiveDate) -> Table {
    let _scope = ProfileScope::new("data", "generate");
    let mut rng = StdRng::seed_from_u64(seed);

    let regions = draw(&mut rng, n, Region::ALL);
    let statuses = draw(&mut rng, n, Status::ALL);
    let site_types = draw(&mut rng, n, SiteType::ALL);
    let progress: Vec<u8> = (0..n).map(|_| rng.gen_range(0..=100)).collect();
    let start_dates: Vec<NaiveDate> = (0..n)
        .map(|_| today - Duration::days(rng.gen_range(0..START_WINDOW_DAYS)))
        .collect();
    let budgets: Vec<u64> = (0..n).map(|_| rng.gen_range(BUDGET_MIN..BUDGET_MAX)).collect();
    let priorities = draw(&mut rng, n, Priority::ALL);

    let table: Table = (0..n)
        .map(|i| {
            let idx = i + 1;
            Project {
                project_id: format!("PRJ-{:04}", idx),
                project_name: format!("Telecom Site {:04}", idx),
                region: regions[i],
                status: statuses[i],
                site_type: site_types[i],
                progress: progress[i],
                start_date: start_dates[i],
                budget: budgets[i],
                priority: priorities[i],
            }
        })
        .collect();

    log_generated(table.len(), seed, &today.to_string());
    table
}

fn draw<T: Copy>(rng: &mut StdRng, n: usize, set: &[T]) -> Vec<T> {
    (0..n).map(|_| set[rng.gen_range(0..set.len())]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_generate_exact_count_and_ranges() {
        let table = generate_with(50, DEFAULT_SEED, day());
        assert_eq!(table.len(), 50);

        let ids: HashSet<&str> = table.iter().map(|p| p.project_id.as_str()).collect();
        assert_eq!(ids.len(), 50);

        for p in &table {
            assert!(p.progress <= 100);
            assert!((BUDGET_MIN..BUDGET_MAX).contains(&p.budget));
            assert!(p.start_date <= day());
            assert!(p.start_date > day() - Duration::days(START_WINDOW_DAYS));
        }
    }

    #[test]
    fn test_ids_are_one_based_and_padded() {
        let table = generate_with(12, DEFAULT_SEED, day());
        assert_eq!(table.rows()[0].project_id, "PRJ-0001");
        assert_eq!(table.rows()[0].project_name, "Telecom Site 0001");
        assert_eq!(table.rows()[11].project_id, "PRJ-0012");
    }

    #[test]
    fn test_generate_is_reproducible() {
        let a = generate_with(30, DEFAULT_SEED, day());
        let b = generate_with(30, DEFAULT_SEED, day());
        assert_eq!(a, b);

        let c = generate_with(30, DEFAULT_SEED + 1, day());
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_zero_is_empty() {
        assert!(generate_with(0, DEFAULT_SEED, day()).is_empty());
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_categories_are_all_reachable() {
        let table = generate_with(500, DEFAULT_SEED, day());
        let regions: HashSet<Region> = table.iter().map(|p| p.region).collect();
        let statuses: HashSet<Status> = table.iter().map(|p| p.status).collect();
        assert_eq!(regions.len(), Region::ALL.len());
        assert_eq!(statuses.len(), Status::ALL.len());
    }
}
