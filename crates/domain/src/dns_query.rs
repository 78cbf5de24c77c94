use super::RecordType;
use std::sync::Arc;

/// A single incoming question. `name` keeps the trailing root dot and the
/// case it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    /// Name used to address the backend: the query name without the
    /// trailing root-label dot.
    pub fn lookup_key(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }
}
