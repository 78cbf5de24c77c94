#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Backend URL is required")]
    MissingUrl,

    #[error("Backend URL must start with http:// or https://: {0}")]
    InvalidUrl(String),

    #[error("Invalid TTL {0:?}: expected a number of seconds")]
    InvalidTtl(String),
}
