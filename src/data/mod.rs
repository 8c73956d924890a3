//! Project records, category sets and the in-memory project table.

mod generate;
mod manifest;

pub use generate::{generate, generate_with, DEFAULT_SEED};
pub use manifest::{
    default_manifest_path, manifest, manifest_output_path, table_sha256, write_manifest,
    DatasetManifest, DEFAULT_MANIFEST_DIR,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a fixed category set with display strings.
///
/// Variant order is the generator's draw order.
macro_rules! category {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {:?}", stringify!($name), other)),
                }
            }
        }
    };
}

category!(Region {
    North => "North",
    South => "South",
    East => "East",
    West => "West",
    Central => "Central",
});

category!(Status {
    Planning => "Planning",
    InProgress => "In Progress",
    OnHold => "On Hold",
    Completed => "Completed",
});

category!(SiteType {
    MacroSite => "Macro Site",
    SmallCell => "Small Cell",
    Das => "DAS",
    Rooftop => "Rooftop",
});

category!(Priority {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

/// One project row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "Project_ID")]
    pub project_id: String,
    #[serde(rename = "Project_Name")]
    pub project_name: String,
    #[serde(rename = "Region")]
    pub region: Region,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Site_Type")]
    pub site_type: SiteType,
    /// Completion percentage, 0..=100
    #[serde(rename = "Progress")]
    pub progress: u8,
    #[serde(rename = "Start_Date")]
    pub start_date: NaiveDate,
    /// Currency units
    #[serde(rename = "Budget")]
    pub budget: u64,
    #[serde(rename = "Priority")]
    pub priority: Priority,
}

/// Column selector for per-field aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProjectId,
    ProjectName,
    Region,
    Status,
    SiteType,
    Progress,
    StartDate,
    Budget,
    Priority,
}

impl Field {
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::ProjectId => "Project_ID",
            Field::ProjectName => "Project_Name",
            Field::Region => "Region",
            Field::Status => "Status",
            Field::SiteType => "Site_Type",
            Field::Progress => "Progress",
            Field::StartDate => "Start_Date",
            Field::Budget => "Budget",
            Field::Priority => "Priority",
        }
    }
}

impl Project {
    /// Display value of a single column.
    pub fn field_value(&self, field: Field) -> String {
        match field {
            Field::ProjectId => self.project_id.clone(),
            Field::ProjectName => self.project_name.clone(),
            Field::Region => self.region.as_str().to_string(),
            Field::Status => self.status.as_str().to_string(),
            Field::SiteType => self.site_type.as_str().to_string(),
            Field::Progress => self.progress.to_string(),
            Field::StartDate => self.start_date.format("%Y-%m-%d").to_string(),
            Field::Budget => self.budget.to_string(),
            Field::Priority => self.priority.as_str().to_string(),
        }
    }
}

/// Ordered, immutable sequence of projects.
///
/// Filtering derives a new table; there is no way to mutate rows in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Project>,
}

impl Table {
    pub fn new(rows: Vec<Project>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Project] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, project_id: &str) -> Option<&Project> {
        self.rows.iter().find(|p| p.project_id == project_id)
    }
}

impl FromIterator<Project> for Table {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal project with the given id suffix, status and progress.
    pub fn project(i: u32, region: Region, status: Status, progress: u8) -> Project {
        Project {
            project_id: format!("PRJ-{:04}", i),
            project_name: format!("Telecom Site {:04}", i),
            region,
            status,
            site_type: SiteType::MacroSite,
            progress,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            budget: 250_000,
            priority: Priority::Medium,
        }
    }
}
