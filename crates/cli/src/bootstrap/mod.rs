use restdns_domain::{CliOverrides, Config};

/// Loads the configuration and refuses to start on anything invalid.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Sets up the tracing subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(default_filter(&config.logging.level))
    });

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn default_filter(level: &str) -> String {
    let mut filter = level.to_string();

    // hickory logs every malformed packet at warn
    for target in ["hickory_server", "hickory_proto"] {
        if !filter.contains(target) {
            filter.push_str(&format!(",{}=off", target));
        }
    }

    filter
}
