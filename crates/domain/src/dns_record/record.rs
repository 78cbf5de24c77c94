use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// One address answer. Class is always IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub owner: Arc<str>,

    pub record_type: RecordType,

    pub address: IpAddr,

    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(owner: impl Into<Arc<str>>, address: IpAddr, ttl: u32) -> Self {
        let record_type = match address {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::AAAA,
        };
        Self {
            owner: owner.into(),
            record_type,
            address,
            ttl,
        }
    }
}
