// Errors raised by host information backends.
//
// These never escape `DomainMembershipQuery`; they exist so backends can say
// what went wrong and the query can log it before degrading to a default.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostQueryError {
    /// A platform call returned a non-success status code.
    #[error("{call} failed with status {code}")]
    Api { call: &'static str, code: u32 },

    /// The call succeeded but handed back something unusable.
    #[error("{call} returned unusable data: {reason}")]
    Malformed { call: &'static str, reason: String },

    #[error("{call} failed: {source}")]
    Io {
        call: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not available on this host")]
    Unsupported(&'static str),
}

impl HostQueryError {
    pub fn io(call: &'static str, source: std::io::Error) -> Self {
        HostQueryError::Io { call, source }
    }

    pub fn malformed(call: &'static str, reason: impl Into<String>) -> Self {
        HostQueryError::Malformed {
            call,
            reason: reason.into(),
        }
    }
}
