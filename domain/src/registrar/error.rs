//! Registrar lookup errors

use thiserror::Error;

/// Failure modes of a registrar lookup.
///
/// None of these abort a request on their own. They are reported back to the
/// planner as tool errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No registrar found for {0}")]
    NotFound(String),

    #[error("No {protocol} service is known for .{tld}")]
    UnsupportedRegistry { protocol: String, tld: String },

    #[error("Lookup timed out after {0}s")]
    Timeout(u64),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response from {server}: {message}")]
    Malformed { server: String, message: String },

    #[error("Invalid domain for lookup: {0}")]
    InvalidDomain(String),
}

impl LookupError {
    /// Whether the registry answered but had nothing for the domain
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::NotFound(_) | LookupError::UnsupportedRegistry { .. }
        )
    }
}
