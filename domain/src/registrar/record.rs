//! Registrar record produced by a lookup

use crate::request::LookupProtocol;
use serde::{Deserialize, Serialize};

/// Registrar details for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarRecord {
    /// Domain the lookup was made for
    pub domain: String,
    pub registrar_name: Option<String>,
    /// Abuse contact published by the registry itself, if any
    pub abuse_email: Option<String>,
    /// WHOIS server or RDAP URL that answered
    pub source: Option<String>,
    pub protocol: LookupProtocol,
}

impl RegistrarRecord {
    pub fn new(domain: impl Into<String>, protocol: LookupProtocol) -> Self {
        Self {
            domain: domain.into(),
            registrar_name: None,
            abuse_email: None,
            source: None,
            protocol,
        }
    }

    pub fn with_registrar(mut self, name: impl Into<String>) -> Self {
        self.registrar_name = Some(name.into());
        self
    }

    pub fn with_abuse_email(mut self, email: impl Into<String>) -> Self {
        self.abuse_email = Some(email.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Text handed back to the planner as a tool result
    pub fn render(&self) -> String {
        let mut out = format!(
            "Registrar: {}",
            self.registrar_name.as_deref().unwrap_or("[not found]")
        );
        if let Some(email) = &self.abuse_email {
            out.push_str(&format!("\nRegistrar abuse contact email (from registry): {}", email));
        }
        if let Some(source) = &self.source {
            out.push_str(&format!("\nSource: {} {}", self.protocol.display_name(), source));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let record = RegistrarRecord::new("example.com", LookupProtocol::Whois)
            .with_registrar("Example Registrar LLC")
            .with_abuse_email("abuse@example-registrar.com")
            .with_source("whois.example-registrar.com");
        let text = record.render();
        assert!(text.starts_with("Registrar: Example Registrar LLC"));
        assert!(text.contains("abuse@example-registrar.com"));
        assert!(text.contains("Source: WHOIS whois.example-registrar.com"));
    }

    #[test]
    fn test_render_without_name() {
        let record = RegistrarRecord::new("example.com", LookupProtocol::Rdap);
        assert_eq!(record.render(), "Registrar: [not found]");
    }
}
