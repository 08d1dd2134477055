use crate::core::domain::model::host::{HostRow, RawHostRecord};

/// Maps host records to display rows, one each, keeping their order.
///
/// Hosts are never collapsed and no filtering happens here.
pub fn build_host_rows(records: Vec<RawHostRecord>) -> Vec<HostRow> {
    records.into_iter().map(HostRow::from).collect()
}
