//! Request input and its validated form

use super::{DomainName, LookupProtocol, TakedownReason};
use crate::core::error::DomainError;

/// Raw request as collected by the presentation layer.
#[derive(Debug, Clone)]
pub struct TakedownRequestInput {
    pub domain: String,
    pub reason: TakedownReason,
    pub additional_info: String,
    pub lookup_protocol: LookupProtocol,
}

impl TakedownRequestInput {
    pub fn new(domain: impl Into<String>, reason: TakedownReason) -> Self {
        Self {
            domain: domain.into(),
            reason,
            additional_info: String::new(),
            lookup_protocol: LookupProtocol::default(),
        }
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = info.into();
        self
    }

    pub fn with_protocol(mut self, protocol: LookupProtocol) -> Self {
        self.lookup_protocol = protocol;
        self
    }

    /// Validate the domain and reason.
    ///
    /// The domain is checked first so a missing or bad domain is the error
    /// the user sees even when the reason is also incomplete.
    pub fn validate(&self) -> Result<TakedownRequest, DomainError> {
        let domain = DomainName::parse(&self.domain)?;
        self.reason.validate()?;
        Ok(TakedownRequest {
            domain,
            reason: self.reason.clone(),
            additional_info: self.additional_info.trim().to_string(),
            lookup_protocol: self.lookup_protocol,
        })
    }
}

/// A request whose domain and reason have been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakedownRequest {
    pub domain: DomainName,
    pub reason: TakedownReason,
    pub additional_info: String,
    pub lookup_protocol: LookupProtocol,
}

impl TakedownRequest {
    /// Additional information, or a placeholder when the user gave none
    pub fn additional_info_or_none(&self) -> &str {
        if self.additional_info.is_empty() {
            "None provided"
        } else {
            &self.additional_info
        }
    }
}
