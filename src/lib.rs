mod core;
mod dashboard;


pub use crate::core::domain::{
    data_source::MonitoringDataSource,
    error::{DashboardError, DashboardResult, ValidationError},
    model::{
        cluster_summary::ClusterSummary,
        dashboard_config::{ApiConfig, DashboardConfig, RateLimitConfig},
        dashboard_filters::DashboardFilters,
        dashboard_snapshot::{DashboardSnapshot, FetchStage, SnapshotError},
        host::{HostRow, RawHostRecord},
        icinga_application::IcingaApplication,
        service::{AggregatedServiceRow, RawServiceRecord},
        severity::{MAX_STATE, MAX_STATE_TYPE, UNKNOWN_LABEL, state_label, state_type_label},
    },
    value_object::IcingaUrl,
};
pub use crate::core::infrastructure::api_client::IcingaApiClient;
pub use crate::dashboard::application::{
    request::dashboard_query::DashboardQuery,
    service::{
        dashboard_service::DashboardService,
        host_view_builder::build_host_rows,
        ordering::{compare_services, sort_hosts, sort_services},
        service_aggregator::aggregate_services,
    },
};

/// An operational dashboard on top of an Icinga 2 monitoring backend
///
/// The dashboard turns raw host and service health records into a
/// [`DashboardSnapshot`]:
/// - alerts filtered by state, state type, acknowledgement and downtime
/// - identical service failures on many hosts collapsed into one row
/// - rows in a fixed, severity-first order
///
/// A snapshot is built fresh for every request and is rendered even when
/// some backend calls fail.
///
/// # Examples
///
/// ```no_run
/// use icinga_dashboard::{DashboardConfig, DashboardQuery, DashboardResult, IcingaDashboard};
///
/// #[tokio::main]
/// async fn main() -> DashboardResult<()> {
///     let dashboard = IcingaDashboard::from_config(DashboardConfig::from_env()?)?;
///
///     let snapshot = dashboard.render(&DashboardQuery::parse("minState=2")).await;
///     for row in &snapshot.service_rows {
///         println!("{} {} {}", row.state_label(), row.host_field, row.service_field);
///     }
///     Ok(())
/// }
/// ```
pub struct IcingaDashboard<S = IcingaApiClient> {
    source: S,
    defaults: DashboardFilters,
    service: DashboardService,
}

impl IcingaDashboard<IcingaApiClient> {
    /// Builds a dashboard backed by the Icinga 2 REST API.
    ///
    /// # Errors
    /// Returns an error if the API client cannot be built (unreadable
    /// certificates, invalid rate limit).
    pub fn from_config(config: DashboardConfig) -> DashboardResult<Self> {
        let DashboardConfig {
            api,
            defaults,
            base_url,
        } = config;
        let source = IcingaApiClient::new(api)?;
        Ok(Self::new(source, defaults, &base_url))
    }

    /// Returns version and feature information of the Icinga instance.
    pub async fn application_status(&self) -> DashboardResult<IcingaApplication> {
        self.source.application_status().await
    }
}

impl<S: MonitoringDataSource> IcingaDashboard<S> {
    /// Creates a dashboard on top of any data source.
    pub fn new(source: S, defaults: DashboardFilters, base_url: &IcingaUrl) -> Self {
        Self {
            source,
            defaults,
            service: DashboardService::new(base_url.as_str()),
        }
    }

    /// Returns the filters used when a request does not override them
    pub fn defaults(&self) -> &DashboardFilters {
        &self.defaults
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Builds a snapshot for a request, applying its overrides on top of the
    /// configured defaults.
    pub async fn render(&self, query: &DashboardQuery) -> DashboardSnapshot {
        self.snapshot(query.resolve(&self.defaults)).await
    }

    /// Builds a snapshot for explicit filters.
    pub async fn snapshot(&self, filters: DashboardFilters) -> DashboardSnapshot {
        self.service.execute(&self.source, filters).await
    }
}
