use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::ConfigError;

pub const DEFAULT_TTL: u32 = 300;

/// Where address lookups are sent and how answers are stamped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the lookup service, always ending in `/` once normalized.
    #[serde(default)]
    pub url: String,

    /// TTL written on every answer record, in seconds.
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Deadline applied by the HTTP client to a whole backend call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            ttl: default_ttl(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Parses the positional `<url> [ttl]` form.
    ///
    /// The URL is mandatory and must use the `http` or `https` scheme; a
    /// trailing `/` is appended when missing. The TTL defaults to 300 seconds.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let url = args.first().ok_or(ConfigError::MissingUrl)?.as_ref();
        let url = normalize_url(url)?;

        let ttl = match args.get(1) {
            Some(raw) => parse_ttl(raw.as_ref())?,
            None => DEFAULT_TTL,
        };

        Ok(Self {
            url,
            ttl,
            timeout_secs: default_timeout_secs(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        self.base_url()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Backend timeout cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured URL as a parsed base for request paths.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        if !has_http_scheme(&self.url) {
            return Err(ConfigError::InvalidUrl(self.url.clone()));
        }
        Url::parse(&self.url).map_err(|_| ConfigError::InvalidUrl(self.url.clone()))
    }

    /// Applies the trailing-slash rule to a URL loaded from a file.
    pub fn normalize(&mut self) {
        if !self.url.is_empty() && !self.url.ends_with('/') {
            self.url.push('/');
        }
    }
}

pub fn normalize_url(url: &str) -> Result<String, ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::MissingUrl);
    }
    if !has_http_scheme(url) {
        return Err(ConfigError::InvalidUrl(url.to_string()));
    }

    let mut url = url.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    Ok(url)
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn parse_ttl(raw: &str) -> Result<u32, ConfigError> {
    raw.parse::<u32>()
        .map_err(|_| ConfigError::InvalidTtl(raw.to_string()))
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

fn default_timeout_secs() -> u64 {
    10
}
