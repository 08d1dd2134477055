//! Host records as delivered by the data source and as displayed.

use crate::core::domain::model::severity::{state_label, state_type_label};
use serde::{Deserialize, Serialize};

/// An unhealthy host reported by the monitoring backend.
///
/// The data source already dropped healthy, acknowledged and downtimed
/// hosts, so every record here is meant to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawHostRecord {
    /// Host name, unique within one snapshot.
    pub name: String,
    /// State ordinal (0=OK .. 3=Unknown).
    pub state: i32,
    /// State-type ordinal (0=Soft, 1=Hard).
    pub state_type: i32,
}

/// A host line on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRow {
    pub name: String,
    pub state: i32,
    pub state_type: i32,
}

impl HostRow {
    /// Returns the host name escaped for use in a URL query string.
    pub fn url_encoded_host(&self) -> String {
        url::form_urlencoded::byte_serialize(self.name.as_bytes()).collect()
    }

    pub fn state_label(&self) -> &'static str {
        state_label(self.state)
    }

    pub fn state_type_label(&self) -> &'static str {
        state_type_label(self.state_type)
    }
}

impl From<RawHostRecord> for HostRow {
    fn from(record: RawHostRecord) -> Self {
        Self {
            name: record.name,
            state: record.state,
            state_type: record.state_type,
        }
    }
}
