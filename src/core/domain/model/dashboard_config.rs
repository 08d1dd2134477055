//! Process-wide configuration, loaded once and passed down explicitly.

use crate::core::domain::{
    error::{DashboardResult, ValidationError},
    model::dashboard_filters::DashboardFilters,
    value_object::IcingaUrl,
};
use governor::Quota;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Client-side throttle for requests to the Icinga API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// Converts the settings into a `governor` quota.
    pub(crate) fn quota(&self) -> Result<Quota, ValidationError> {
        let per_second =
            NonZeroU32::new(self.requests_per_second).ok_or_else(|| ValidationError::Field {
                field: "requests_per_second".to_string(),
                message: "Rate limit must allow at least one request per second".to_string(),
            })?;
        let burst = NonZeroU32::new(self.burst_size).ok_or_else(|| ValidationError::Field {
            field: "burst_size".to_string(),
            message: "Burst size cannot be 0".to_string(),
        })?;
        Ok(Quota::per_second(per_second).allow_burst(burst))
    }
}

/// Connection settings for the Icinga 2 REST API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub url: IcingaUrl,
    /// Basic auth is only sent when both username and password are non-empty.
    pub username: String,
    pub password: String,
    /// PEM client certificate, used together with `client_key_path`.
    pub client_cert_path: Option<PathBuf>,
    pub client_key_path: Option<PathBuf>,
    /// PEM CA certificate for self-signed API certificates.
    pub ca_cert_path: Option<PathBuf>,
    pub timeout: Duration,
    pub validate_certificate: bool,
    pub rate_limit: Option<RateLimitConfig>,
}

impl ApiConfig {
    /// Settings with defaults for everything but the URL.
    pub fn new(url: IcingaUrl) -> Self {
        Self {
            url,
            username: String::new(),
            password: String::new(),
            client_cert_path: None,
            client_key_path: None,
            ca_cert_path: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            validate_certificate: true,
            rate_limit: None,
        }
    }

    pub(crate) fn has_basic_auth(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Complete dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    /// Filters used when a request does not override them.
    pub defaults: DashboardFilters,
    /// Base of the Icinga web UI, used to link rows.
    pub base_url: IcingaUrl,
}

impl DashboardConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns a validation error if `ICINGA2_API_URL` or `ICINGA2_BASE_URL`
    /// is missing or invalid.
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset. Integer settings that fail to parse are
    /// reported and replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let get_int = |key: &str, default: i64| match get(key) {
            None => default,
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                warn!(key, value = %raw, default, "Invalid integer setting, using default");
                default
            }),
        };
        let get_path = |key: &str| get(key).map(PathBuf::from);

        let required = |key: &str| {
            get(key).ok_or_else(|| ValidationError::Field {
                field: key.to_string(),
                message: "Setting is required".to_string(),
            })
        };

        let url = IcingaUrl::new(required("ICINGA2_API_URL")?, "ICINGA2_API_URL")?;
        let base_url = IcingaUrl::new(required("ICINGA2_BASE_URL")?, "ICINGA2_BASE_URL")?;

        let timeout_secs = get_int("ICINGA2_API_TIMEOUT", DEFAULT_TIMEOUT_SECS as i64);
        let timeout_secs = u64::try_from(timeout_secs).unwrap_or_else(|_| {
            warn!(timeout_secs, "Negative timeout, using default");
            DEFAULT_TIMEOUT_SECS
        });

        let api = ApiConfig {
            username: get("ICINGA2_API_USERNAME").unwrap_or_default(),
            password: get("ICINGA2_API_PASSWORD").unwrap_or_default(),
            client_cert_path: get_path("ICINGA2_API_CLIENT_CERT_PATH"),
            client_key_path: get_path("ICINGA2_API_CLIENT_KEY_PATH"),
            ca_cert_path: get_path("ICINGA2_API_CA_PATH"),
            timeout: Duration::from_secs(timeout_secs),
            validate_certificate: get_int("ICINGA2_API_VALIDATE_CERTIFICATE", 1) == 1,
            ..ApiConfig::new(url)
        };

        let fallback = DashboardFilters::default();
        let defaults = DashboardFilters {
            min_state: clamp_i32(get_int("MIN_STATE", fallback.min_state.into())),
            max_state: clamp_i32(get_int("MAX_STATE", fallback.max_state.into())),
            min_state_type: clamp_i32(get_int("MIN_STATE_TYPE", fallback.min_state_type.into())),
        };

        Ok(Self {
            api,
            defaults,
            base_url,
        })
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN.into(), i32::MAX.into()) as i32
}
