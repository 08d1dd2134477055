use thiserror::Error;

/// The main error type for dashboard operations.
///
/// This enum represents all possible errors that can occur while talking
/// to the monitoring backend or validating the dashboard configuration.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Represents errors that occur before a response is received
    ///
    /// # Fields
    /// * `0` - A description of what went wrong (network, TLS, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents a non-2xx answer from the monitoring backend
    ///
    /// # Fields
    /// * `status` - The HTTP status code
    /// * `body` - The response body, as far as it could be read
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Represents a response whose body does not have the expected shape
    ///
    /// # Fields
    /// * `0` - A description of the parse failure
    #[error("Parse error: {0}")]
    Parse(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },
}

impl DashboardError {
    /// Returns true if the error means the data source could not deliver data.
    ///
    /// Transport, status and shape errors all collapse into this condition;
    /// only configuration problems are reported as something else.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, DashboardError::Validation { .. })
    }
}

impl From<ValidationError> for DashboardError {
    fn from(error: ValidationError) -> Self {
        DashboardError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;
