use restdns_application::use_cases::HandleDnsQueryUseCase;
use restdns_domain::Config;
use restdns_infrastructure::backend::HttpLookupBackend;
use restdns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub fn build_dns_handler(config: &Config) -> anyhow::Result<DnsServerHandler> {
    info!(
        timeout_secs = config.backend.timeout_secs,
        "Initializing HTTP lookup backend"
    );

    let backend = HttpLookupBackend::new(Duration::from_secs(config.backend.timeout_secs))
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?;
    let base_url = config.backend.base_url()?;

    let use_case = HandleDnsQueryUseCase::new(Arc::new(backend), base_url, config.backend.ttl)
        .with_verbose(config.logging.verbose);

    Ok(DnsServerHandler::new(Arc::new(use_case)))
}
