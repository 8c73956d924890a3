use serde::Serialize;

use crate::dashboard::{DashboardView, ProjectDetail};
use crate::data::{generate_with, Table, DEFAULT_SEED};
use crate::filter::{filter, Criteria};
use crate::logging::{log_session_started, ts_epoch_ms};
use chrono::{NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub project_count: usize,
    pub seed: u64,
    pub region: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_count: 50,
            seed: DEFAULT_SEED,
            region: None,
            status: None,
            search: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            project_count: lookup("PROJECT_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(d.project_count),
            seed: lookup("DATA_SEED").and_then(|v| v.parse().ok()).unwrap_or(d.seed),
            region: lookup("FILTER_REGION"),
            status: lookup("FILTER_STATUS"),
            search: lookup("FILTER_SEARCH"),
        }
    }

    /// Criteria from the configured selectors; sentinels collapse to unset.
    pub fn criteria(&self) -> Criteria {
        Criteria::new(self.region.as_deref(), self.status.as_deref(), self.search.as_deref())
    }
}

/// One user's view of the data: owns its generated table for its lifetime.
///
/// Sessions share nothing; two sessions with the same config hold equal but
/// separate tables.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    config: Config,
    table: Table,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self::on_date(config, Utc::now().date_naive())
    }

    /// Generate the session table with start dates relative to `today`.
    pub fn on_date(config: Config, today: NaiveDate) -> Self {
        let table = generate_with(config.project_count, config.seed, today);
        Self::from_table(config, table)
    }

    pub fn from_table(config: Config, table: Table) -> Self {
        let id = format!("s-{}-{}", ts_epoch_ms(), next_session_seq());
        log_session_started(&id, table.len());
        Self { id, config, table }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Recompute the full view for `criteria` from the source table.
    pub fn view(&self, criteria: &Criteria) -> DashboardView {
        DashboardView::build(&self.table, criteria)
    }

    /// Detail panel for `project_id`, only if it survives `criteria`.
    pub fn detail(&self, criteria: &Criteria, project_id: &str) -> Option<ProjectDetail> {
        ProjectDetail::lookup(&filter(&self.table, criteria), project_id)
    }

    /// View for the selectors in this session's config.
    pub fn default_view(&self) -> DashboardView {
        self.view(&self.config.criteria())
    }
}

fn next_session_seq() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static SEQ: AtomicU64 = AtomicU64::new(0);
    SEQ.fetch_add(1, Ordering::Relaxed)
}
