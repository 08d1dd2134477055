//! The view model handed to the renderer.

use crate::core::domain::model::{
    cluster_summary::ClusterSummary, dashboard_filters::DashboardFilters, host::HostRow,
    service::AggregatedServiceRow,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// The backend call a snapshot error stems from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStage {
    Summary,
    Services,
    Hosts,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchStage::Summary => "cluster summary",
            FetchStage::Services => "services",
            FetchStage::Hosts => "hosts",
        };
        f.write_str(name)
    }
}

/// A failed backend call, kept on the snapshot for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotError {
    pub stage: FetchStage,
    pub message: String,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to fetch {}: {}", self.stage, self.message)
    }
}

/// Everything one dashboard page shows.
///
/// Built fresh for every request. Partial data is normal: a failed backend
/// call leaves its part empty (or `summary` unset) and records `error`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub timestamp: DateTime<Local>,
    pub summary: Option<ClusterSummary>,
    pub service_rows: Vec<AggregatedServiceRow>,
    pub host_rows: Vec<HostRow>,
    pub filters_applied: DashboardFilters,
    pub base_url: String,
    pub error: Option<SnapshotError>,
}

impl DashboardSnapshot {
    /// Wall-clock time of the snapshot as `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
