use crate::{
    AggregatedServiceRow, ClusterSummary, DashboardError, DashboardFilters, DashboardQuery,
    DashboardResult, FetchStage, IcingaDashboard, IcingaUrl, MonitoringDataSource,
    RawHostRecord, RawServiceRecord,
};
use async_trait::async_trait;
use mockall::{mock, predicate::eq};

mock! {
    DataSource {}

    #[async_trait]
    impl MonitoringDataSource for DataSource {
        async fn fetch_cluster_summary(&self) -> DashboardResult<ClusterSummary>;
        async fn fetch_hosts(&self, min_state_type: i32) -> DashboardResult<Vec<RawHostRecord>>;
        async fn fetch_services(
            &self,
            min_state: i32,
            max_state: i32,
            min_state_type: i32,
        ) -> DashboardResult<Vec<RawServiceRecord>>;
    }
}

const DEFAULTS: DashboardFilters = DashboardFilters {
    min_state: 1,
    max_state: 2,
    min_state_type: 0,
};

fn service(host: &str, name: &str, state: i32, state_type: i32) -> RawServiceRecord {
    RawServiceRecord {
        host_name: host.to_string(),
        service_name: name.to_string(),
        state,
        state_type,
    }
}

fn host(name: &str, state: i32) -> RawHostRecord {
    RawHostRecord {
        name: name.to_string(),
        state,
        state_type: 1,
    }
}

fn summary() -> ClusterSummary {
    ClusterSummary {
        hosts_up: 9,
        hosts_down: 1,
        services_ok: 97,
        services_warning: 0,
        services_critical: 2,
        services_unknown: 1,
    }
}

fn create_dashboard(source: MockDataSource) -> IcingaDashboard<MockDataSource> {
    IcingaDashboard::new(
        source,
        DEFAULTS,
        &IcingaUrl::new_unchecked("https://icinga.example.com/monitoring"),
    )
}

fn outage() -> DashboardError {
    DashboardError::Connection("connection refused".to_string())
}

#[tokio::test]
async fn test_snapshot_aggregates_and_orders_services() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .times(1)
        .returning(|| Ok(summary()));
    source
        .expect_fetch_services()
        .with(eq(1), eq(3), eq(0))
        .times(1)
        .returning(|_, _, _| {
            Ok(vec![
                service("web01", "http", 2, 1),
                service("web02", "http", 2, 1),
                service("web03", "disk", 3, 0),
            ])
        });
    source
        .expect_fetch_hosts()
        .with(eq(0))
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let dashboard = create_dashboard(source);
    let snapshot = dashboard
        .snapshot(DashboardFilters {
            min_state: 1,
            max_state: 3,
            min_state_type: 0,
        })
        .await;

    assert_eq!(
        snapshot.service_rows,
        vec![
            AggregatedServiceRow {
                host_field: "web03".to_string(),
                service_field: "disk".to_string(),
                state: 3,
                state_type: 0,
                is_aggregated: false,
            },
            AggregatedServiceRow {
                host_field: "2 Hosts".to_string(),
                service_field: "http".to_string(),
                state: 2,
                state_type: 1,
                is_aggregated: true,
            },
        ]
    );
    assert_eq!(snapshot.summary, Some(summary()));
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.base_url, "https://icinga.example.com/monitoring");
}

#[tokio::test]
async fn test_summary_failure_keeps_services_and_hosts() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Err(outage()));
    source
        .expect_fetch_services()
        .returning(|_, _, _| Ok(vec![service("web01", "http", 2, 1)]));
    source
        .expect_fetch_hosts()
        .returning(|_| Ok(vec![host("db01", 1)]));

    let snapshot = create_dashboard(source).snapshot(DEFAULTS).await;

    assert!(snapshot.summary.is_none());
    let error = snapshot.error.expect("summary failure must be reported");
    assert_eq!(error.stage, FetchStage::Summary);
    assert!(error.message.contains("connection refused"));
    assert_eq!(snapshot.service_rows.len(), 1);
    assert_eq!(snapshot.host_rows.len(), 1);
}

#[tokio::test]
async fn test_later_failures_do_not_overwrite_first_error() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Err(outage()));
    source.expect_fetch_services().returning(|_, _, _| {
        Err(DashboardError::Http {
            status: 500,
            body: "boom".to_string(),
        })
    });
    source
        .expect_fetch_hosts()
        .returning(|_| Ok(vec![host("db01", 2)]));

    let snapshot = create_dashboard(source).snapshot(DEFAULTS).await;

    assert_eq!(snapshot.error.unwrap().stage, FetchStage::Summary);
    assert!(snapshot.service_rows.is_empty());
    assert_eq!(snapshot.host_rows.len(), 1);
}

#[tokio::test]
async fn test_service_failure_is_reported_when_summary_succeeds() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Ok(summary()));
    source
        .expect_fetch_services()
        .returning(|_, _, _| Err(DashboardError::Parse("unexpected shape".to_string())));
    source
        .expect_fetch_hosts()
        .returning(|_| Ok(vec![host("db01", 1)]));

    let snapshot = create_dashboard(source).snapshot(DEFAULTS).await;

    assert_eq!(snapshot.summary, Some(summary()));
    assert_eq!(snapshot.error.unwrap().stage, FetchStage::Services);
    assert!(snapshot.service_rows.is_empty());
    assert_eq!(snapshot.host_rows.len(), 1);
}

#[tokio::test]
async fn test_host_failure_is_reported() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Ok(summary()));
    source
        .expect_fetch_services()
        .returning(|_, _, _| Ok(vec![service("web01", "http", 2, 1)]));
    source.expect_fetch_hosts().returning(|_| Err(outage()));

    let snapshot = create_dashboard(source).snapshot(DEFAULTS).await;

    assert_eq!(snapshot.error.unwrap().stage, FetchStage::Hosts);
    assert_eq!(snapshot.service_rows.len(), 1);
    assert!(snapshot.host_rows.is_empty());
}

#[tokio::test]
async fn test_total_outage_still_yields_snapshot() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Err(outage()));
    source
        .expect_fetch_services()
        .returning(|_, _, _| Err(outage()));
    source.expect_fetch_hosts().returning(|_| Err(outage()));

    let snapshot = create_dashboard(source).snapshot(DEFAULTS).await;

    assert!(snapshot.summary.is_none());
    assert!(snapshot.service_rows.is_empty());
    assert!(snapshot.host_rows.is_empty());
    assert_eq!(snapshot.filters_applied, DEFAULTS);
    assert_eq!(snapshot.error.unwrap().stage, FetchStage::Summary);
}

#[tokio::test]
async fn test_hosts_are_sorted_by_name() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Ok(summary()));
    source
        .expect_fetch_services()
        .returning(|_, _, _| Ok(Vec::new()));
    source
        .expect_fetch_hosts()
        .returning(|_| Ok(vec![host("web02", 1), host("app01", 2), host("db01", 1)]));

    let snapshot = create_dashboard(source).snapshot(DEFAULTS).await;

    let names: Vec<_> = snapshot.host_rows.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["app01", "db01", "web02"]);
}

#[tokio::test]
async fn test_render_applies_query_overrides() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Ok(summary()));
    // minState/maxState never reach the host query.
    source
        .expect_fetch_services()
        .with(eq(2), eq(3), eq(1))
        .times(1)
        .returning(|_, _, _| Ok(Vec::new()));
    source
        .expect_fetch_hosts()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let dashboard = create_dashboard(source);
    let snapshot = dashboard
        .render(&DashboardQuery::parse("minState=2&maxState=3&minStateType=1"))
        .await;

    assert_eq!(
        snapshot.filters_applied,
        DashboardFilters {
            min_state: 2,
            max_state: 3,
            min_state_type: 1,
        }
    );
    assert_eq!(snapshot.filters_applied.min_state_label(), "Critical");
    assert_eq!(snapshot.filters_applied.max_state_label(), "Unknown");
    assert_eq!(snapshot.filters_applied.min_state_type_label(), "Hard");
}

#[tokio::test]
async fn test_render_ignores_invalid_overrides() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_cluster_summary()
        .returning(|| Ok(summary()));
    source
        .expect_fetch_services()
        .with(eq(1), eq(2), eq(0))
        .times(1)
        .returning(|_, _, _| Ok(Vec::new()));
    source
        .expect_fetch_hosts()
        .with(eq(0))
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let dashboard = create_dashboard(source);
    let snapshot = dashboard
        .render(&DashboardQuery::parse("minState=high&maxState=&minStateType=soft"))
        .await;

    assert_eq!(snapshot.filters_applied, DEFAULTS);
    assert!(snapshot.error.is_none());
}
