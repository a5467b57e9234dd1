//! Lookup protocol selection

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Protocol used to identify a domain's registrar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupProtocol {
    /// Legacy text protocol on TCP port 43
    #[default]
    Whois,
    /// Structured JSON over HTTPS
    Rdap,
}

impl LookupProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupProtocol::Whois => "whois",
            LookupProtocol::Rdap => "rdap",
        }
    }

    /// Name shown to users and to the model
    pub fn display_name(&self) -> &'static str {
        match self {
            LookupProtocol::Whois => "WHOIS",
            LookupProtocol::Rdap => "RDAP",
        }
    }

    /// Protocol-specific tool name that models sometimes ask for.
    ///
    /// Registered as an alias of the canonical `resolve_registrar` capability.
    pub fn tool_alias(&self) -> &'static str {
        match self {
            LookupProtocol::Whois => "get_registrar",
            LookupProtocol::Rdap => "rdap_lookup",
        }
    }
}

impl std::fmt::Display for LookupProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for LookupProtocol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whois" => Ok(LookupProtocol::Whois),
            "rdap" => Ok(LookupProtocol::Rdap),
            other => Err(DomainError::UnknownProtocol(other.to_string())),
        }
    }
}
