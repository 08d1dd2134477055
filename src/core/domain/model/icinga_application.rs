//! Domain model for `/v1/status/IcingaApplication`.

use serde::{Deserialize, Serialize};

/// Runtime information about the Icinga 2 instance behind the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IcingaApplication {
    #[serde(default)]
    pub enable_event_handlers: bool,
    #[serde(default)]
    pub enable_flapping: bool,
    #[serde(default)]
    pub enable_host_checks: bool,
    #[serde(default)]
    pub enable_notifications: bool,
    #[serde(default)]
    pub enable_perfdata: bool,
    #[serde(default)]
    pub enable_service_checks: bool,
    /// Configured environment name (often empty).
    #[serde(default)]
    pub environment: String,
    /// Endpoint name of the answering node.
    pub node_name: String,
    /// Process id of the Icinga daemon. Reported as a float by Icinga.
    pub pid: f64,
    /// Start of the daemon as UNIX timestamp with fractional seconds.
    pub program_start: f64,
    /// Version string (e.g. "r2.14.2-1").
    pub version: String,
}
