use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Unsupported query type: {0}")]
    UnsupportedQueryType(String),

    #[error("Backend {url} unreachable: {cause}")]
    BackendUnreachable { url: String, cause: String },

    #[error("Backend {url} returned HTTP {status}")]
    BackendNonOk { url: String, status: u16 },

    #[error("Failed to read backend response body from {url}: {cause}")]
    BackendBodyUnreadable { url: String, cause: String },

    #[error("Malformed backend response from {url}: {cause}")]
    BackendBodyMalformed { url: String, cause: String },

    #[error("No {0} records for domain")]
    NoRecordsOfType(String),
}

impl DomainError {
    /// Failures that turn into SERVFAIL. Everything else maps to a
    /// well-formed positive or negative answer.
    pub fn is_server_failure(&self) -> bool {
        matches!(
            self,
            DomainError::BackendUnreachable { .. }
                | DomainError::BackendBodyUnreadable { .. }
                | DomainError::BackendBodyMalformed { .. }
        )
    }
}
