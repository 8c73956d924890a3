//! Aggregates over a (possibly filtered) project table.
//!
//! Every function is total: an empty table yields zero counts, and the
//! average is `None` rather than a division by zero.

use serde::Serialize;
use std::collections::HashMap;

use crate::data::{Field, Status, Table};

pub fn count_total(table: &Table) -> usize {
    table.len()
}

/// Rows whose status label equals `status` exactly.
pub fn count_by_status(table: &Table, status: &str) -> usize {
    table.iter().filter(|p| p.status.as_str() == status).count()
}

/// Mean progress rounded to one decimal, `None` for an empty table.
///
/// Halves round to even (50.25 -> 50.2).
pub fn average_progress(table: &Table) -> Option<f64> {
    if table.is_empty() {
        return None;
    }
    let sum: u64 = table.iter().map(|p| u64::from(p.progress)).sum();
    let mean = sum as f64 / table.len() as f64;
    Some((mean * 10.0).round_ties_even() / 10.0)
}

/// Occurrences of each distinct value of `field`. Iteration order is unspecified.
pub fn count_by_category(table: &Table, field: Field) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for p in table {
        *counts.entry(p.field_value(field)).or_insert(0) += 1;
    }
    counts
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub average_progress: Option<f64>,
}

impl DashboardMetrics {
    pub fn compute(table: &Table) -> Self {
        Self {
            total: count_total(table),
            completed: count_by_status(table, Status::Completed.as_str()),
            in_progress: count_by_status(table, Status::InProgress.as_str()),
            average_progress: average_progress(table),
        }
    }

    pub fn average_progress_label(&self) -> String {
        match self.average_progress {
            Some(avg) => format!("{:.1}%", avg),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::project;
    use crate::data::Region;

    #[test]
    fn test_count_by_status_scenario() {
        let t = Table::new(vec![
            project(1, Region::North, Status::Completed, 10),
            project(2, Region::North, Status::Completed, 20),
            project(3, Region::South, Status::Planning, 30),
        ]);
        assert_eq!(count_by_status(&t, "Completed"), 2);
        assert_eq!(count_by_status(&t, "Planning"), 1);
        assert_eq!(count_by_status(&t, "On Hold"), 0);
        assert_eq!(count_total(&t), 3);
    }

    #[test]
    fn test_empty_table() {
        let t = Table::default();
        assert_eq!(count_total(&t), 0);
        assert_eq!(average_progress(&t), None);
        assert!(count_by_category(&t, Field::Status).is_empty());

        let m = DashboardMetrics::compute(&t);
        assert_eq!(m.average_progress_label(), "N/A");
    }

    #[test]
    fn test_average_progress_rounding() {
        let t = Table::new(vec![
            project(1, Region::North, Status::Planning, 10),
            project(2, Region::North, Status::Planning, 20),
            project(3, Region::North, Status::Planning, 20),
        ]);
        // 50 / 3 = 16.666..
        assert_eq!(average_progress(&t), Some(16.7));

        let t = Table::new(vec![
            project(1, Region::North, Status::Planning, 100),
            project(2, Region::North, Status::Planning, 1),
            project(3, Region::North, Status::Planning, 0),
            project(4, Region::North, Status::Planning, 0),
        ]);
        // 101 / 4 = 25.25
        assert_eq!(average_progress(&t), Some(25.2));
    }

    #[test]
    fn test_average_progress_constant() {
        let t: Table = (1..=7)
            .map(|i| project(i, Region::East, Status::OnHold, 63))
            .collect();
        assert_eq!(average_progress(&t), Some(63.0));
    }

    #[test]
    fn test_count_by_category() {
        let t = Table::new(vec![
            project(1, Region::North, Status::Completed, 10),
            project(2, Region::West, Status::Completed, 20),
            project(3, Region::North, Status::Planning, 30),
        ]);
        let regions = count_by_category(&t, Field::Region);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions["North"], 2);
        assert_eq!(regions["West"], 1);

        let statuses = count_by_category(&t, Field::Status);
        assert_eq!(statuses.values().sum::<usize>(), count_total(&t));
    }

    #[test]
    fn test_dashboard_metrics() {
        let t = Table::new(vec![
            project(1, Region::North, Status::Completed, 100),
            project(2, Region::North, Status::InProgress, 40),
            project(3, Region::North, Status::InProgress, 45),
        ]);
        let m = DashboardMetrics::compute(&t);
        assert_eq!(m.total, 3);
        assert_eq!(m.completed, 1);
        assert_eq!(m.in_progress, 2);
        assert_eq!(m.average_progress, Some(61.7));
        assert_eq!(m.average_progress_label(), "61.7%");
    }
}
