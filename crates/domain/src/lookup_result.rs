use crate::AddressFamily;
use serde::{Deserialize, Serialize};

/// Body of a successful backend lookup: `{"a": [...], "aaaa": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupResult {
    #[serde(default)]
    pub a: Vec<String>,

    #[serde(default)]
    pub aaaa: Vec<String>,
}

impl LookupResult {
    pub fn addresses(&self, family: AddressFamily) -> &[String] {
        match family {
            AddressFamily::V4 => &self.a,
            AddressFamily::V6 => &self.aaaa,
        }
    }
}
