pub mod dashboard_service;
pub mod host_view_builder;
pub mod ordering;
pub mod service_aggregator;
