//! restdns domain layer
pub mod address_family;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup_result;
pub mod outcome;

pub use address_family::AddressFamily;
pub use config::{BackendConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordType};
pub use errors::DomainError;
pub use lookup_result::LookupResult;
pub use outcome::ResponseOutcome;
