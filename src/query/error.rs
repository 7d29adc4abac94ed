//! Query error types

use thiserror::Error;

/// Query failure with classification.
///
/// The message carries raw diagnostic detail and is meant for the log only.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct QueryError {
    pub kind: QueryErrorKind,
    pub message: String,
}

impl QueryError {
    pub fn new(kind: QueryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Network, message)
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Protocol, message)
    }
}

/// Where in the exchange the failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// Transport level: connection refused, timeout, DNS, broken body
    Network,
    /// Service reachable but the reply is not a 2xx `{"response": ...}` body
    Protocol,
}

impl QueryErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Protocol => "protocol",
        }
    }
}
