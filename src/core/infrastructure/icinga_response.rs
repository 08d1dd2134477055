//! Wire types of the Icinga 2 REST API.

use crate::core::domain::{
    model::{
        cluster_summary::ClusterSummary, host::RawHostRecord,
        icinga_application::IcingaApplication, service::RawServiceRecord,
    },
    value_object::serde_helpers,
};
use serde::{Deserialize, Serialize};

/// Body of an object query (`POST /v1/objects/...` with a GET override).
#[derive(Debug, Serialize)]
pub struct ObjectQuery {
    pub attrs: Vec<&'static str>,
    pub joins: Vec<&'static str>,
    pub filter: String,
}

/// Every API answer wraps its payload in a `results` array.
#[derive(Debug, Deserialize)]
pub struct ResultsResponse<T> {
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct StatusResult<T> {
    pub status: T,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationStatus {
    pub icingaapplication: ApplicationWrapper,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationWrapper {
    pub app: IcingaApplication,
}

/// The attributes the dashboard needs of a host or service object.
#[derive(Debug, Deserialize)]
pub struct StateAttributes {
    #[serde(deserialize_with = "serde_helpers::ordinal::deserialize")]
    pub state: i32,
    #[serde(deserialize_with = "serde_helpers::ordinal::deserialize")]
    pub state_type: i32,
}

/// A configuration object (host or service) as returned by `/v1/objects`.
#[derive(Debug, Deserialize)]
pub struct ObjectResult {
    /// Full object name; `<host>!<service>` for services.
    pub name: String,
    pub attrs: StateAttributes,
}

impl From<ObjectResult> for RawHostRecord {
    fn from(object: ObjectResult) -> Self {
        Self {
            name: object.name,
            state: object.attrs.state,
            state_type: object.attrs.state_type,
        }
    }
}

impl From<ObjectResult> for RawServiceRecord {
    fn from(object: ObjectResult) -> Self {
        RawServiceRecord::from_object_name(&object.name, object.attrs.state, object.attrs.state_type)
    }
}

pub type CibStatusResponse = ResultsResponse<StatusResult<ClusterSummary>>;
pub type ApplicationStatusResponse = ResultsResponse<StatusResult<ApplicationStatus>>;
pub type ObjectsResponse = ResultsResponse<ObjectResult>;
