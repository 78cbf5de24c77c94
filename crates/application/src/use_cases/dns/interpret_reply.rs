use crate::ports::{BackendReply, BackendRequest};
use restdns_domain::{DnsQuery, DnsRecord, DomainError, LookupResult, ResponseOutcome};
use tracing::{info, warn};

/// Turns whatever came back from the backend into the reply outcome for one
/// query. Diagnostics are only emitted when `verbose` is set.
#[derive(Debug, Clone)]
pub struct ReplyInterpreter {
    ttl: u32,
    verbose: bool,
}

impl ReplyInterpreter {
    pub fn new(ttl: u32) -> Self {
        Self { ttl, verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn interpret(
        &self,
        query: &DnsQuery,
        request: &BackendRequest,
        fetched: Result<BackendReply, DomainError>,
    ) -> ResponseOutcome {
        match self.classify(query, request, fetched) {
            Ok(records) => ResponseOutcome::Answered(records),
            Err(error) => {
                self.log_failure(request, &error);
                ResponseOutcome::from(error)
            }
        }
    }

    fn classify(
        &self,
        query: &DnsQuery,
        request: &BackendRequest,
        fetched: Result<BackendReply, DomainError>,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let reply = fetched?;

        if !reply.is_success() {
            if self.verbose {
                match &reply.body {
                    Ok(body) => info!(
                        url = %request.url,
                        status = reply.status,
                        body = %String::from_utf8_lossy(body),
                        "Backend error response"
                    ),
                    Err(e) => info!(
                        url = %request.url,
                        status = reply.status,
                        error = %e,
                        "Backend error response with unreadable body"
                    ),
                }
            }
            return Err(DomainError::BackendNonOk {
                url: request.url.clone(),
                status: reply.status,
            });
        }

        let body = reply.body?;

        let result: LookupResult = serde_json::from_slice(&body).map_err(|e| {
            if self.verbose {
                warn!(
                    url = %request.url,
                    body = %String::from_utf8_lossy(&body),
                    "Backend body is not a lookup result"
                );
            }
            DomainError::BackendBodyMalformed {
                url: request.url.clone(),
                cause: e.to_string(),
            }
        })?;

        if self.verbose {
            info!(
                url = %request.url,
                a = ?result.a,
                aaaa = ?result.aaaa,
                "Backend response"
            );
        }

        let literals = result.addresses(request.family);
        if literals.is_empty() {
            return Err(DomainError::NoRecordsOfType(
                request.family.record_type().to_string(),
            ));
        }

        request
            .family
            .build_records(&query.name, literals, self.ttl)
            .map_err(|e| DomainError::BackendBodyMalformed {
                url: request.url.clone(),
                cause: e.to_string(),
            })
    }

    fn log_failure(&self, request: &BackendRequest, error: &DomainError) {
        if self.verbose && error.is_server_failure() {
            warn!(url = %request.url, error = %error, "Backend lookup failed");
        }
    }
}
