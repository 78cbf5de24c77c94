use super::{QueryResolver, ReplyInterpreter, Resolution};
use crate::ports::LookupBackend;
use restdns_domain::{DnsQuery, ResponseOutcome};
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Query in, reply outcome out. Never fails: every path ends in exactly one
/// outcome for the caller to write.
pub struct HandleDnsQueryUseCase {
    resolver: QueryResolver,
    interpreter: ReplyInterpreter,
    backend: Arc<dyn LookupBackend>,
    verbose: bool,
}

impl HandleDnsQueryUseCase {
    pub fn new(backend: Arc<dyn LookupBackend>, base_url: Url, ttl: u32) -> Self {
        Self {
            resolver: QueryResolver::new(base_url),
            interpreter: ReplyInterpreter::new(ttl),
            backend,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.interpreter = self.interpreter.with_verbose(verbose);
        self.verbose = verbose;
        self
    }

    pub async fn execute(&self, query: &DnsQuery) -> ResponseOutcome {
        let request = match self.resolver.resolve(query) {
            Resolution::Backend(request) => request,
            Resolution::Immediate(outcome) => return outcome,
        };

        if self.verbose {
            info!(
                url = %request.url,
                domain = %request.lookup_key,
                record_type = %query.record_type,
                "Querying backend"
            );
        }

        let fetched = self.backend.fetch(&request).await;
        self.interpreter.interpret(query, &request, fetched)
    }
}
