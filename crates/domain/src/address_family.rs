use crate::{DnsRecord, DomainError, RecordType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Address family selected once per query. Each variant knows which record
/// type it produces and how to parse the literals the backend hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// `None` for every type this server does not answer.
    pub fn from_record_type(record_type: RecordType) -> Option<Self> {
        match record_type {
            RecordType::A => Some(AddressFamily::V4),
            RecordType::AAAA => Some(AddressFamily::V6),
            RecordType::Other(_) => None,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            AddressFamily::V4 => RecordType::A,
            AddressFamily::V6 => RecordType::AAAA,
        }
    }

    pub fn parse(&self, literal: &str) -> Result<IpAddr, DomainError> {
        match self {
            AddressFamily::V4 => literal
                .parse::<Ipv4Addr>()
                .map(IpAddr::V4)
                .map_err(|_| DomainError::InvalidIpAddress(literal.to_string())),
            AddressFamily::V6 => literal
                .parse::<Ipv6Addr>()
                .map(IpAddr::V6)
                .map_err(|_| DomainError::InvalidIpAddress(literal.to_string())),
        }
    }

    /// Builds one record per literal, in input order. Fails on the first
    /// literal that is not an address of this family.
    pub fn build_records(
        &self,
        owner: &Arc<str>,
        literals: &[String],
        ttl: u32,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        literals
            .iter()
            .map(|literal| {
                let address = self.parse(literal)?;
                Ok(DnsRecord::new(Arc::clone(owner), address, ttl))
            })
            .collect()
    }
}
