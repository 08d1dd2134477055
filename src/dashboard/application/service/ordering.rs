//! Display order of dashboard rows.

use crate::core::domain::model::{host::HostRow, service::AggregatedServiceRow};
use std::cmp::Ordering;

/// Most severe state first, then service name, then soft before hard.
pub fn compare_services(a: &AggregatedServiceRow, b: &AggregatedServiceRow) -> Ordering {
    b.state
        .cmp(&a.state)
        .then_with(|| a.service_field.cmp(&b.service_field))
        .then_with(|| a.state_type.cmp(&b.state_type))
}

/// Sorts service rows for display, see [`compare_services`].
pub fn sort_services(rows: &mut [AggregatedServiceRow]) {
    rows.sort_by(compare_services);
}

/// Sorts host rows by name.
pub fn sort_hosts(rows: &mut [HostRow]) {
    rows.sort_by(|a, b| a.name.cmp(&b.name));
}
