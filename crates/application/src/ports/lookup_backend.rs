use async_trait::async_trait;
use bytes::Bytes;
use restdns_domain::{AddressFamily, DomainError};
use std::sync::Arc;

/// One backend call, derived from a supported query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRequest {
    pub url: String,
    pub lookup_key: Arc<str>,
    pub family: AddressFamily,
}

/// Whatever the backend answered. The body is read separately from the
/// status so a broken error body never hides the status code.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: u16,
    pub body: Result<Bytes, DomainError>,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: Ok(body.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait LookupBackend: Send + Sync {
    /// Performs the HTTP call. `Err` means the call itself could not be
    /// completed; any status code comes back as `Ok`.
    async fn fetch(&self, request: &BackendRequest) -> Result<BackendReply, DomainError>;
}
