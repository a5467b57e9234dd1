//! Domain error types

use thiserror::Error;

/// Input validation errors.
///
/// Every variant is raised before any lookup, search or model call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please provide an OpenAI API key.")]
    MissingApiKey,

    #[error("Please provide a domain name.")]
    MissingDomain,

    #[error("Please provide a valid domain name. '{0}' has no registrable name under a known public suffix.")]
    InvalidDomain(String),

    #[error("Please specify the custom reason for the takedown request.")]
    MissingCustomReason,

    #[error("Unknown takedown reason: {0}")]
    UnknownReason(String),

    #[error("Unknown lookup protocol: {0} (expected 'whois' or 'rdap')")]
    UnknownProtocol(String),

    #[error("'{0}' cannot be used in the draft file name. Enter the bare domain (e.g. example.com) or pass --no-save.")]
    UnexportableDomain(String),
}
