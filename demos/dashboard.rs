//! Print the current dashboard of an Icinga 2 instance.
//!
//! Configuration comes from the environment (or a `.env` file), see
//! `DashboardConfig::from_env`. An optional first argument is used as the
//! query string, e.g. `cargo run --example dashboard -- "minState=2&maxState=3"`.

use icinga_dashboard::{DashboardConfig, DashboardQuery, DashboardResult, IcingaDashboard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> DashboardResult<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icinga_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dashboard = IcingaDashboard::from_config(DashboardConfig::from_env()?)?;

    match dashboard.application_status().await {
        Ok(app) => println!("Icinga {} on {}", app.version, app.node_name),
        Err(e) => tracing::warn!(error = %e, "Could not read application status"),
    }

    let query = DashboardQuery::parse(&std::env::args().nth(1).unwrap_or_default());
    let snapshot = dashboard.render(&query).await;
    let filters = &snapshot.filters_applied;

    println!(
        "Dashboard at {} (states {}..{}, from {} state)",
        snapshot.time_label(),
        filters.min_state_label(),
        filters.max_state_label(),
        filters.min_state_type_label()
    );

    if let Some(error) = &snapshot.error {
        println!("!! {}", error);
    }

    if let Some(summary) = &snapshot.summary {
        println!(
            "Hosts up: {:.1}% ({}/{})  Services OK: {:.1}% ({}/{})",
            summary.percent_hosts_up(),
            summary.hosts_up,
            summary.total_hosts(),
            summary.percent_services_ok(),
            summary.services_ok,
            summary.total_services()
        );
    }

    println!("\nServices:");
    for row in &snapshot.service_rows {
        let link = if row.is_aggregated {
            format!(
                "{}/list/services?service={}",
                snapshot.base_url,
                row.url_encoded_service()
            )
        } else {
            format!(
                "{}/service/show?host={}&service={}",
                snapshot.base_url,
                row.url_encoded_host(),
                row.url_encoded_service()
            )
        };
        println!(
            "  {:<8} {:<4} {:<30} {:<30} {}",
            row.state_label(),
            row.state_type_label(),
            row.host_field,
            row.service_field,
            link
        );
    }

    println!("\nHosts:");
    for row in &snapshot.host_rows {
        println!(
            "  {:<8} {:<4} {:<30} {}/host/show?host={}",
            row.state_label(),
            row.state_type_label(),
            row.name,
            snapshot.base_url,
            row.url_encoded_host()
        );
    }

    Ok(())
}
