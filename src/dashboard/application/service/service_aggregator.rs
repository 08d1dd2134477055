//! Collapses identical failures on many hosts into single rows.

use crate::core::domain::model::service::{AggregatedServiceRow, RawServiceRecord};
use std::collections::HashMap;

/// Records sharing this key are shown as one row. The host name is not part
/// of the key on purpose.
#[derive(Debug, PartialEq, Eq, Hash)]
struct GroupKey {
    service_name: String,
    state: i32,
    state_type: i32,
}

struct Group {
    representative: RawServiceRecord,
    size: usize,
}

/// Groups service records by `(service name, state, state type)`.
///
/// A group with a single record keeps its host name; larger groups get a
/// `"<N> Hosts"` label and lose the individual host names. The output order
/// is unspecified, see [`super::ordering::sort_services`].
pub fn aggregate_services(records: Vec<RawServiceRecord>) -> Vec<AggregatedServiceRow> {
    let mut groups: HashMap<GroupKey, Group> = HashMap::new();

    for record in records {
        let key = GroupKey {
            service_name: record.service_name.clone(),
            state: record.state,
            state_type: record.state_type,
        };
        groups
            .entry(key)
            .and_modify(|group| group.size += 1)
            .or_insert(Group {
                representative: record,
                size: 1,
            });
    }

    groups.into_values().map(into_row).collect()
}

fn into_row(group: Group) -> AggregatedServiceRow {
    let record = group.representative;
    let is_aggregated = group.size > 1;
    let host_field = if is_aggregated {
        format!("{} Hosts", group.size)
    } else {
        record.host_name
    };

    AggregatedServiceRow {
        host_field,
        service_field: record.service_name,
        state: record.state,
        state_type: record.state_type,
        is_aggregated,
    }
}
