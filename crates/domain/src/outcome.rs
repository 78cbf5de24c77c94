use crate::{DnsRecord, DomainError};

/// What the reply to one query should say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    Answered(Vec<DnsRecord>),
    EmptyAnswer,
    NameError,
    ServerFailure(DomainError),
}

impl ResponseOutcome {
    pub fn response_status(&self) -> &'static str {
        match self {
            ResponseOutcome::Answered(_) | ResponseOutcome::EmptyAnswer => "NOERROR",
            ResponseOutcome::NameError => "NXDOMAIN",
            ResponseOutcome::ServerFailure(_) => "SERVFAIL",
        }
    }

    /// AA is set for answers and for name errors; an empty answer set and a
    /// server failure leave it clear.
    pub fn is_authoritative(&self) -> bool {
        matches!(
            self,
            ResponseOutcome::Answered(_) | ResponseOutcome::NameError
        )
    }

    pub fn records(&self) -> &[DnsRecord] {
        match self {
            ResponseOutcome::Answered(records) => records,
            _ => &[],
        }
    }
}

impl From<DomainError> for ResponseOutcome {
    /// Maps a classified failure onto the reply it produces. Unsupported
    /// types and non-2xx backend answers are name errors, a missing record
    /// family is an empty answer, everything else is a server failure.
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::UnsupportedQueryType(_) | DomainError::BackendNonOk { .. } => {
                ResponseOutcome::NameError
            }
            DomainError::NoRecordsOfType(_) => ResponseOutcome::EmptyAnswer,
            other => ResponseOutcome::ServerFailure(other),
        }
    }
}
