//! Conjunctive row filtering over a project table.
//!
//! Each criterion is an independent per-row predicate, so application order
//! never changes the result and surviving rows keep their input order.

use serde::{Deserialize, Serialize};

use crate::data::{Project, Table};
use crate::logging::log_filter_applied;

/// Selector value meaning "no constraint".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub region: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl Criteria {
    /// Build criteria from raw selector values. `"All"` and `""` count as unset.
    pub fn new(region: Option<&str>, status: Option<&str>, search: Option<&str>) -> Self {
        Self {
            region: selector(region),
            status: selector(status),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = selector(Some(region));
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = selector(Some(status));
        self
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term).filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.region.is_none() && self.status.is_none() && self.search.is_none()
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(region) = &self.region {
            if project.region.as_str() != region.as_str() {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if project.status.as_str() != status.as_str() {
                return false;
            }
        }
        match &self.search {
            Some(term) => {
                let needle = term.to_lowercase();
                project.project_id.to_lowercase().contains(&needle)
                    || project.project_name.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

fn selector(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty() && *v != ALL)
        .map(str::to_string)
}

/// Rows of `table` matching every set criterion, as a new table.
pub fn filter(table: &Table, criteria: &Criteria) -> Table {
    let out: Table = table
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();
    log_filter_applied(criteria, table.len(), out.len());
    out
}
