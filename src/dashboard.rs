//! Per-interaction pipeline: (criteria, source table) -> everything the
//! presentation layer draws.
//!
//! Nothing here is cached. Each call re-filters and re-aggregates from the
//! source table.

use chrono::NaiveDate;
use serde::Serialize;

use crate::charts::{region_distribution, status_distribution, ProgressGauge, Series};
use crate::data::{Priority, Project, Region, SiteType, Status, Table};
use crate::filter::{filter, Criteria, ALL};
use crate::metrics::DashboardMetrics;

/// Row of the project list table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    #[serde(rename = "Project_ID")]
    pub project_id: String,
    #[serde(rename = "Project_Name")]
    pub project_name: String,
    #[serde(rename = "Region")]
    pub region: Region,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Progress")]
    pub progress: u8,
    #[serde(rename = "Start_Date")]
    pub start_date: NaiveDate,
    #[serde(rename = "Priority")]
    pub priority: Priority,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            project_id: p.project_id.clone(),
            project_name: p.project_name.clone(),
            region: p.region,
            status: p.status,
            progress: p.progress,
            start_date: p.start_date,
            priority: p.priority,
        }
    }
}

/// Detail panel for one selected project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub project_id: String,
    pub project_name: String,
    pub region: Region,
    pub site_type: SiteType,
    pub priority: Priority,
    pub status: Status,
    pub start_date: NaiveDate,
    pub budget: String,
    pub gauge: ProgressGauge,
}

impl ProjectDetail {
    pub fn lookup(table: &Table, project_id: &str) -> Option<Self> {
        table.get(project_id).map(Self::from)
    }

    pub fn display_label(&self) -> String {
        detail_label(&self.project_id, &self.project_name)
    }
}

impl From<&Project> for ProjectDetail {
    fn from(p: &Project) -> Self {
        Self {
            project_id: p.project_id.clone(),
            project_name: p.project_name.clone(),
            region: p.region,
            site_type: p.site_type,
            priority: p.priority,
            status: p.status,
            start_date: p.start_date,
            budget: format_budget(p.budget),
            gauge: ProgressGauge::new(p.progress),
        }
    }
}

/// Selector label, `"PRJ-0001 - Telecom Site 0001"`.
pub fn detail_label(project_id: &str, project_name: &str) -> String {
    format!("{} - {}", project_id, project_name)
}

/// `$` plus comma-grouped thousands.
pub fn format_budget(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"All"` then each distinct value in order of first appearance.
fn options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for v in values {
        if !out.iter().skip(1).any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}

pub fn region_options(table: &Table) -> Vec<String> {
    options(table.iter().map(|p| p.region.as_str()))
}

pub fn status_options(table: &Table) -> Vec<String> {
    options(table.iter().map(|p| p.status.as_str()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub criteria: Criteria,
    pub region_options: Vec<String>,
    pub status_options: Vec<String>,
    pub metrics: DashboardMetrics,
    pub average_progress_label: String,
    pub status_chart: Series,
    pub region_chart: Series,
    pub rows: Vec<ProjectRow>,
}

impl DashboardView {
    pub fn build(source: &Table, criteria: &Criteria) -> Self {
        let filtered = filter(source, criteria);
        let metrics = DashboardMetrics::compute(&filtered);
        Self {
            criteria: criteria.clone(),
            region_options: region_options(source),
            status_options: status_options(source),
            average_progress_label: metrics.average_progress_label(),
            metrics,
            status_chart: status_distribution(&filtered),
            region_chart: region_distribution(&filtered),
            rows: filtered.iter().map(ProjectRow::from).collect(),
        }
    }

    /// Detail labels for the rows currently listed.
    pub fn detail_choices(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| detail_label(&r.project_id, &r.project_name))
            .collect()
    }
}
