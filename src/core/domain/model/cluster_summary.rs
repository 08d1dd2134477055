//! Domain model for the cluster-wide counters from `/v1/status/CIB`.

use crate::core::domain::value_object::serde_helpers;
use serde::{Deserialize, Serialize};

/// Aggregate object counters of the whole monitoring configuration.
///
/// Field names follow the Icinga CIB status document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClusterSummary {
    #[serde(rename = "num_hosts_up", deserialize_with = "serde_helpers::counter::deserialize")]
    pub hosts_up: u64,
    #[serde(rename = "num_hosts_down", deserialize_with = "serde_helpers::counter::deserialize")]
    pub hosts_down: u64,
    #[serde(rename = "num_services_ok", deserialize_with = "serde_helpers::counter::deserialize")]
    pub services_ok: u64,
    #[serde(rename = "num_services_warning", deserialize_with = "serde_helpers::counter::deserialize")]
    pub services_warning: u64,
    #[serde(rename = "num_services_critical", deserialize_with = "serde_helpers::counter::deserialize")]
    pub services_critical: u64,
    #[serde(rename = "num_services_unknown", deserialize_with = "serde_helpers::counter::deserialize")]
    pub services_unknown: u64,
}

impl ClusterSummary {
    pub fn total_hosts(&self) -> u64 {
        self.hosts_up + self.hosts_down
    }

    pub fn total_services(&self) -> u64 {
        self.services_ok + self.services_warning + self.services_critical + self.services_unknown
    }

    /// Share of hosts that are up, in percent.
    ///
    /// Returns 0 when no hosts are known at all. A 0 here therefore means
    /// either "no data" or "everything down"; check [`Self::total_hosts`] to
    /// tell them apart.
    pub fn percent_hosts_up(&self) -> f64 {
        percent(self.hosts_up, self.total_hosts())
    }

    /// Share of services that are OK, in percent.
    ///
    /// Returns 0 when no services are known at all, see
    /// [`Self::percent_hosts_up`].
    pub fn percent_services_ok(&self) -> f64 {
        percent(self.services_ok, self.total_services())
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}
