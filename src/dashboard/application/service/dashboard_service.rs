use crate::{
    core::domain::{
        data_source::MonitoringDataSource,
        error::DashboardResult,
        model::{
            dashboard_filters::DashboardFilters,
            dashboard_snapshot::{DashboardSnapshot, FetchStage, SnapshotError},
        },
    },
    dashboard::application::service::{
        host_view_builder::build_host_rows,
        ordering::{sort_hosts, sort_services},
        service_aggregator::aggregate_services,
    },
};
use chrono::Local;
use tracing::{debug, warn};

/// Assembles one dashboard snapshot from the monitoring data source.
///
/// The three backend calls are independent and run concurrently. A failing
/// call never aborts the snapshot: its part stays empty and the first
/// failure (summary, then services, then hosts) is recorded as the
/// snapshot error.
pub struct DashboardService {
    base_url: String,
}

impl DashboardService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn execute<S>(&self, source: &S, filters: DashboardFilters) -> DashboardSnapshot
    where
        S: MonitoringDataSource + ?Sized,
    {
        let timestamp = Local::now();
        debug!(
            min_state = filters.min_state,
            max_state = filters.max_state,
            min_state_type = filters.min_state_type,
            "Building dashboard snapshot"
        );

        let (summary, services, hosts) = tokio::join!(
            source.fetch_cluster_summary(),
            source.fetch_services(
                filters.min_state,
                filters.max_state,
                filters.min_state_type
            ),
            source.fetch_hosts(filters.min_state_type),
        );

        let mut error = None;
        let summary = settle(FetchStage::Summary, summary, &mut error);

        let mut service_rows =
            aggregate_services(settle(FetchStage::Services, services, &mut error).unwrap_or_default());
        sort_services(&mut service_rows);

        let mut host_rows =
            build_host_rows(settle(FetchStage::Hosts, hosts, &mut error).unwrap_or_default());
        sort_hosts(&mut host_rows);

        DashboardSnapshot {
            timestamp,
            summary,
            service_rows,
            host_rows,
            filters_applied: filters,
            base_url: self.base_url.clone(),
            error,
        }
    }
}

/// Unwraps a backend result, logging a failure and keeping the first one.
fn settle<T>(
    stage: FetchStage,
    result: DashboardResult<T>,
    first_error: &mut Option<SnapshotError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%stage, error = %e, "Monitoring data source call failed");
            first_error.get_or_insert_with(|| SnapshotError {
                stage,
                message: e.to_string(),
            });
            None
        }
    }
}
