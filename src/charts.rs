//! Renderer-agnostic chart inputs.

use serde::Serialize;

use crate::data::{Field, Table};
use crate::metrics::count_by_category;

/// Labelled counts for a pie or bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(String, usize)>,
}

impl Series {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn values(&self) -> Vec<usize> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    pub fn total(&self) -> usize {
        self.points.iter().map(|(_, v)| v).sum()
    }
}

/// Value counts of `field`, largest first, ties by label.
fn distribution(table: &Table, field: Field, title: &str, x_label: &str) -> Series {
    let mut points: Vec<(String, usize)> = count_by_category(table, field).into_iter().collect();
    points.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Series {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: "Number of Projects".to_string(),
        points,
    }
}

pub fn status_distribution(table: &Table) -> Series {
    distribution(table, Field::Status, "Project Status Distribution", "Status")
}

pub fn region_distribution(table: &Table) -> Series {
    distribution(table, Field::Region, "Projects by Region", "Region")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeBand {
    Low,
    Medium,
    High,
}

impl GaugeBand {
    /// [0, 33) low, [33, 66) medium, [66, 100] high.
    pub fn classify(progress: u8) -> Self {
        match progress {
            0..=32 => GaugeBand::Low,
            33..=65 => GaugeBand::Medium,
            _ => GaugeBand::High,
        }
    }
}

/// Progress pass-through for a single-project gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressGauge {
    pub value: u8,
    pub band: GaugeBand,
}

impl ProgressGauge {
    pub fn new(progress: u8) -> Self {
        Self {
            value: progress,
            band: GaugeBand::classify(progress),
        }
    }
}
