use clap::Parser;
use restdns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "restdns")]
#[command(version)]
#[command(about = "restdns - authoritative A/AAAA answers from an HTTP lookup backend")]
struct Cli {
    /// Backend base URL, optionally followed by the record TTL in seconds
    #[arg(value_name = "URL [TTL]", num_args = 1..=2)]
    backend: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log backend requests and replies
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        // VERBOSE only needs to be present in the environment.
        verbose: cli.verbose || std::env::var_os("VERBOSE").is_some(),
        backend_args: cli.backend,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting restdns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        backend = %config.backend.url,
        ttl = config.backend.ttl,
        verbose = config.logging.verbose,
        "Backend configured"
    );

    let handler = di::build_dns_handler(&config)?;
    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);

    tokio::select! {
        result = server::start_dns_server(dns_addr, handler, config.server.tcp_timeout_secs) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
