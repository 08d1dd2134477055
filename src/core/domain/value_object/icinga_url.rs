use crate::core::domain::error::ValidationError;
use std::fmt;

/// Maximum URL length accepted (RFC 7230 practical limit).
const MAX_URL_LENGTH: usize = 2083;
const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];

/// A validated base URL of an Icinga endpoint.
///
/// Used both for the REST API (`https://icinga.example.com:5665`) and for
/// the web UI the dashboard links into. The value never ends with a slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcingaUrl(String);

impl IcingaUrl {
    /// Validates and wraps a base URL.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the URL is empty, too long, cannot be
    /// parsed, or does not use http(s).
    pub fn new(url: impl Into<String>, field: &str) -> Result<Self, ValidationError> {
        let url = url.into();
        validate_url(&url, field)?;
        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    /// Creates a new URL without validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(url: impl Into<String>) -> Self {
        Self(url.into().trim_end_matches('/').to_string())
    }

    /// Appends an absolute path (`/v1/...`) to the base URL.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IcingaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates an http(s) base URL.
pub(crate) fn validate_url(url: &str, field: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: field.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ValidationError::Field {
            field: field.to_string(),
            message: "URL must contain a host".to_string(),
        });
    }

    Ok(())
}
