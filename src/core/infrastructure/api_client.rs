//! HTTP client for the Icinga 2 REST API.

use crate::core::{
    domain::{
        data_source::MonitoringDataSource,
        error::{DashboardError, DashboardResult},
        model::{
            cluster_summary::ClusterSummary, dashboard_config::ApiConfig, host::RawHostRecord,
            icinga_application::IcingaApplication, service::RawServiceRecord,
        },
    },
    infrastructure::icinga_response::{
        ApplicationStatusResponse, CibStatusResponse, ObjectQuery, ObjectsResponse,
    },
};
use async_trait::async_trait;
use governor::DefaultDirectRateLimiter;
use reqwest::{
    Certificate, Client, Identity, Method,
    header::{ACCEPT, HeaderValue},
};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Icinga expects object queries as GET, but GET requests cannot carry the
/// filter body. The API honours this override on a POST.
pub(crate) const METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";

const HOST_ATTRS: [&str; 5] = [
    "name",
    "state",
    "state_type",
    "downtime_depth",
    "acknowledgement",
];
const SERVICE_ATTRS: [&str; 6] = [
    "name",
    "state",
    "state_type",
    "downtime_depth",
    "acknowledgement",
    "display_name",
];

/// Client for the Icinga 2 REST API.
///
/// Every request carries JSON `Accept` headers and, when configured, HTTP
/// basic auth. TLS client certificates and a custom CA are loaded once when
/// the client is built. Requests are never retried.
#[derive(Debug)]
pub struct IcingaApiClient {
    http_client: Client,
    config: Arc<ApiConfig>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl IcingaApiClient {
    /// Creates a new `IcingaApiClient`.
    ///
    /// # Errors
    /// Returns `DashboardError::Connection` if a certificate cannot be read
    /// or the HTTP client cannot be built, and `DashboardError::Validation`
    /// for an unusable rate limit.
    pub fn new(config: ApiConfig) -> DashboardResult<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.validate_certificate);

        if let (Some(cert_path), Some(key_path)) =
            (&config.client_cert_path, &config.client_key_path)
        {
            let mut pem = read_pem(cert_path)?;
            pem.extend(read_pem(key_path)?);
            let identity = Identity::from_pem(&pem).map_err(|e| {
                DashboardError::Connection(format!("Invalid client certificate: {}", e))
            })?;
            builder = builder.identity(identity);
        }

        if let Some(ca_path) = &config.ca_cert_path {
            let ca = Certificate::from_pem(&read_pem(ca_path)?).map_err(|e| {
                DashboardError::Connection(format!("Invalid CA certificate: {}", e))
            })?;
            builder = builder.add_root_certificate(ca);
        }

        let http_client = builder
            .build()
            .map_err(|e| DashboardError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => Some(Arc::new(DefaultDirectRateLimiter::direct(rl.quota()?))),
            None => None,
        };

        Ok(Self {
            http_client,
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Returns the connection settings this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches version and feature information of the Icinga instance.
    ///
    /// # Errors
    /// Returns `DashboardError` if the request fails or the answer is empty.
    pub async fn application_status(&self) -> DashboardResult<IcingaApplication> {
        let response: ApplicationStatusResponse = self.get("/v1/status/IcingaApplication").await?;
        response
            .results
            .into_iter()
            .next()
            .map(|result| result.status.icingaapplication.app)
            .ok_or_else(|| {
                DashboardError::Parse("No results in IcingaApplication response".to_string())
            })
    }

    /// Performs a GET request.
    pub async fn get<T>(&self, path: &str) -> DashboardResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::GET, path, None::<&()>).await
    }

    /// Performs an object query: a POST with a JSON body and the GET
    /// method override.
    pub async fn query<B, T>(&self, path: &str, body: &B) -> DashboardResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::POST, path, Some(body)).await
    }

    async fn execute_request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> DashboardResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.config.url.join(path);
        debug!(%method, %url, "Sending Icinga API request");

        let mut req_builder = self
            .http_client
            .request(method, &url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if self.config.has_basic_auth() {
            req_builder =
                req_builder.basic_auth(&self.config.username, Some(&self.config.password));
        }

        if let Some(body) = body {
            req_builder = req_builder
                .header(METHOD_OVERRIDE_HEADER, HeaderValue::from_static("GET"))
                .json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| DashboardError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(DashboardError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DashboardError::Connection(format!("Failed to read response: {}", e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| DashboardError::Parse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl MonitoringDataSource for IcingaApiClient {
    async fn fetch_cluster_summary(&self) -> DashboardResult<ClusterSummary> {
        let response: CibStatusResponse = self.get("/v1/status/CIB").await?;
        response
            .results
            .into_iter()
            .next()
            .map(|result| result.status)
            .ok_or_else(|| DashboardError::Parse("No results in CIB status response".to_string()))
    }

    async fn fetch_hosts(&self, min_state_type: i32) -> DashboardResult<Vec<RawHostRecord>> {
        let query = ObjectQuery {
            attrs: HOST_ATTRS.to_vec(),
            joins: Vec::new(),
            filter: host_filter(min_state_type),
        };
        let response: ObjectsResponse = self.query("/v1/objects/hosts", &query).await?;
        Ok(response.results.into_iter().map(Into::into).collect())
    }

    async fn fetch_services(
        &self,
        min_state: i32,
        max_state: i32,
        min_state_type: i32,
    ) -> DashboardResult<Vec<RawServiceRecord>> {
        let query = ObjectQuery {
            attrs: SERVICE_ATTRS.to_vec(),
            joins: Vec::new(),
            filter: service_filter(min_state, max_state, min_state_type),
        };
        let response: ObjectsResponse = self.query("/v1/objects/services", &query).await?;
        Ok(response.results.into_iter().map(Into::into).collect())
    }
}

/// Icinga DSL filter for hosts worth alerting on.
pub(crate) fn host_filter(min_state_type: i32) -> String {
    format!(
        "host.state != 0 && host.downtime_depth == 0 && host.acknowledgement == 0 && host.state_type >= {}",
        min_state_type
    )
}

/// Icinga DSL filter for services worth alerting on. Services on hosts that
/// are not up are excluded, the host row already covers them.
pub(crate) fn service_filter(min_state: i32, max_state: i32, min_state_type: i32) -> String {
    format!(
        "service.state >= {} && service.state <= {} && service.state_type >= {} && service.acknowledgement == 0 && service.downtime_depth == 0 && host.state == 0",
        min_state, max_state, min_state_type
    )
}

fn read_pem(path: &Path) -> DashboardResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        DashboardError::Connection(format!(
            "Failed to read certificate {}: {}",
            path.display(),
            e
        ))
    })
}
