pub mod charts;
pub mod dashboard;
pub mod data;
pub mod filter;
pub mod logging;
pub mod metrics;
pub mod state;

pub use charts::{region_distribution, status_distribution, GaugeBand, ProgressGauge, Series};
pub use dashboard::{DashboardView, ProjectDetail, ProjectRow};
pub use data::{generate, Field, Project, Table};
pub use filter::{filter, Criteria};
pub use metrics::{
    average_progress, count_by_category, count_by_status, count_total, DashboardMetrics,
};
pub use state::{Config, Session};
