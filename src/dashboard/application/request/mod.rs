pub mod dashboard_query;
