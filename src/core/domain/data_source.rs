use crate::core::domain::{
    error::DashboardResult,
    model::{cluster_summary::ClusterSummary, host::RawHostRecord, service::RawServiceRecord},
};
use async_trait::async_trait;

/// Read access to the monitoring backend.
///
/// Implementations apply the alerting filters server-side; the dashboard
/// trusts what they return. Timeouts surface as errors, retries are up to
/// the implementation.
#[async_trait]
pub trait MonitoringDataSource: Send + Sync {
    /// Fetches the cluster-wide object counters.
    async fn fetch_cluster_summary(&self) -> DashboardResult<ClusterSummary>;

    /// Fetches hosts that are not OK, not acknowledged, not in downtime and
    /// have a state type of at least `min_state_type`.
    async fn fetch_hosts(&self, min_state_type: i32) -> DashboardResult<Vec<RawHostRecord>>;

    /// Fetches services with a state in `[min_state, max_state]` and a state
    /// type of at least `min_state_type` that are neither acknowledged nor in
    /// downtime. Services of hosts that are themselves down are left out.
    async fn fetch_services(
        &self,
        min_state: i32,
        max_state: i32,
        min_state_type: i32,
    ) -> DashboardResult<Vec<RawServiceRecord>>;
}
