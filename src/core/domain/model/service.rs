//! Service records as delivered by the data source and as displayed.

use crate::core::domain::model::severity::{state_label, state_type_label};
use serde::{Deserialize, Serialize};

/// Separator between host and service in an Icinga service object name.
const NAME_SEPARATOR: char = '!';

/// A failing service reported by the monitoring backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawServiceRecord {
    pub host_name: String,
    pub service_name: String,
    /// State ordinal (0=OK .. 3=Unknown).
    pub state: i32,
    /// State-type ordinal (0=Soft, 1=Hard).
    pub state_type: i32,
}

impl RawServiceRecord {
    /// Builds a record from a composite `<host>!<service>` object name.
    ///
    /// Only the first `!` separates; anything after it belongs to the
    /// service name. Without a separator the whole name is the host and the
    /// service name is empty.
    pub fn from_object_name(object_name: &str, state: i32, state_type: i32) -> Self {
        let (host_name, service_name) = object_name
            .split_once(NAME_SEPARATOR)
            .unwrap_or((object_name, ""));

        Self {
            host_name: host_name.to_string(),
            service_name: service_name.to_string(),
            state,
            state_type,
        }
    }
}

/// A service line on the dashboard, possibly standing in for many hosts.
///
/// When `is_aggregated` is set, `host_field` is a count label such as
/// `"12 Hosts"` and the individual host names are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedServiceRow {
    pub host_field: String,
    pub service_field: String,
    pub state: i32,
    pub state_type: i32,
    pub is_aggregated: bool,
}

impl AggregatedServiceRow {
    /// Returns the host field escaped for use in a URL query string.
    pub fn url_encoded_host(&self) -> String {
        url::form_urlencoded::byte_serialize(self.host_field.as_bytes()).collect()
    }

    /// Returns the service field escaped for use in a URL query string.
    pub fn url_encoded_service(&self) -> String {
        url::form_urlencoded::byte_serialize(self.service_field.as_bytes()).collect()
    }

    pub fn state_label(&self) -> &'static str {
        state_label(self.state)
    }

    pub fn state_type_label(&self) -> &'static str {
        state_type_label(self.state_type)
    }
}
