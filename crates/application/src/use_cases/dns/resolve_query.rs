use crate::ports::BackendRequest;
use restdns_domain::{AddressFamily, DnsQuery, DomainError, ResponseOutcome};
use std::sync::Arc;
use url::Url;

/// Path segment of the endpoint that returns both address families.
pub const COMBINED_ENDPOINT: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Backend(BackendRequest),
    Immediate(ResponseOutcome),
}

/// Decides whether a query goes to the backend and, if so, where.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    base_url: Url,
}

impl QueryResolver {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Unsupported types are rejected here without touching the backend.
    /// Supported ones always produce a request; nothing in this step can fail.
    pub fn resolve(&self, query: &DnsQuery) -> Resolution {
        let Some(family) = AddressFamily::from_record_type(query.record_type) else {
            let error = DomainError::UnsupportedQueryType(query.record_type.to_string());
            return Resolution::Immediate(ResponseOutcome::from(error));
        };

        let lookup_key: Arc<str> = Arc::from(query.lookup_key());

        Resolution::Backend(BackendRequest {
            url: self.endpoint_url(&lookup_key).into(),
            lookup_key,
            family,
        })
    }

    /// `<base>/ALL/<lookup_key>`. The key is always a single percent-encoded
    /// segment, whatever characters the query name carries.
    fn endpoint_url(&self, lookup_key: &str) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path; only cannot-be-a-base URLs fail here
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(COMBINED_ENDPOINT)
                .push(lookup_key);
        }
        url
    }
}
