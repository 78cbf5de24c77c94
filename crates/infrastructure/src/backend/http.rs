//! HTTP lookup backend
//!
//! Issues one `GET <base-url>ALL/<domain>` per supported query and hands the
//! status code and raw body back to the application layer untouched:
//!
//! ```text
//! GET /rest/v1/dns/ALL/example.org HTTP/1.1
//! Accept: application/json
//!
//! {"a": ["10.0.0.1"], "aaaa": []}
//! ```

use async_trait::async_trait;
use restdns_application::ports::{BackendReply, BackendRequest, LookupBackend};
use restdns_domain::DomainError;
use std::time::Duration;
use tracing::debug;

const ACCEPT_JSON: &str = "application/json";

pub struct HttpLookupBackend {
    client: reqwest::Client,
}

impl HttpLookupBackend {
    /// `timeout` bounds the whole call, body included. Fails when the TLS
    /// backend cannot be initialised.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LookupBackend for HttpLookupBackend {
    async fn fetch(&self, request: &BackendRequest) -> Result<BackendReply, DomainError> {
        debug!(url = %request.url, "Sending backend lookup");

        let response = self
            .client
            .get(&request.url)
            .header("Accept", ACCEPT_JSON)
            .send()
            .await
            .map_err(|e| DomainError::BackendUnreachable {
                url: request.url.clone(),
                cause: e.to_string(),
            })?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::BackendBodyUnreadable {
                url: request.url.clone(),
                cause: e.to_string(),
            });

        debug!(
            url = %request.url,
            status,
            body_len = body.as_ref().map(|b| b.len()).unwrap_or(0),
            "Backend response received"
        );

        Ok(BackendReply { status, body })
    }
}
