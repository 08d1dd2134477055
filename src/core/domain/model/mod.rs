pub mod cluster_summary;
pub mod dashboard_config;
pub mod dashboard_filters;
pub mod dashboard_snapshot;
pub mod host;
pub mod icinga_application;
pub mod service;
pub mod severity;
