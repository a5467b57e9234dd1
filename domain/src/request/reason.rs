//! Takedown reason value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Why the takedown is being requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TakedownReason {
    CopyrightInfringement,
    TrademarkInfringement,
    DefamationOrLibel,
    PrivacyViolations,
    MalwareOrPhishing,
    TermsOfServiceViolation,
    PersonalSafety,
    /// Free-text reason supplied by the user
    Other(String),
}

impl TakedownReason {
    /// The seven fixed categories, in display order
    pub fn presets() -> [TakedownReason; 7] {
        [
            TakedownReason::CopyrightInfringement,
            TakedownReason::TrademarkInfringement,
            TakedownReason::DefamationOrLibel,
            TakedownReason::PrivacyViolations,
            TakedownReason::MalwareOrPhishing,
            TakedownReason::TermsOfServiceViolation,
            TakedownReason::PersonalSafety,
        ]
    }

    /// Human-readable label, as cited in the email
    pub fn label(&self) -> &str {
        match self {
            TakedownReason::CopyrightInfringement => "Copyright infringement",
            TakedownReason::TrademarkInfringement => "Trademark infringement",
            TakedownReason::DefamationOrLibel => "Defamation or libel",
            TakedownReason::PrivacyViolations => "Privacy violations",
            TakedownReason::MalwareOrPhishing => "Malware or phishing activities",
            TakedownReason::TermsOfServiceViolation => "Violation of terms of service",
            TakedownReason::PersonalSafety => "Personal safety concerns",
            TakedownReason::Other(text) => text.trim(),
        }
    }

    /// Command-line slug (kebab-case)
    pub fn slug(&self) -> &'static str {
        match self {
            TakedownReason::CopyrightInfringement => "copyright",
            TakedownReason::TrademarkInfringement => "trademark",
            TakedownReason::DefamationOrLibel => "defamation",
            TakedownReason::PrivacyViolations => "privacy",
            TakedownReason::MalwareOrPhishing => "malware",
            TakedownReason::TermsOfServiceViolation => "terms-of-service",
            TakedownReason::PersonalSafety => "personal-safety",
            TakedownReason::Other(_) => "other",
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, TakedownReason::Other(_))
    }

    /// Fails when a free-text reason is blank
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            TakedownReason::Other(text) if text.trim().is_empty() => {
                Err(DomainError::MissingCustomReason)
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for TakedownReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TakedownReason {
    type Err = DomainError;

    /// Accepts either a slug (`copyright`) or a full label (`Copyright infringement`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::presets()
            .into_iter()
            .find(|r| r.slug() == needle || r.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::UnknownReason(needle.to_string()))
    }
}
