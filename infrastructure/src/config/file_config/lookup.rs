//! Registrar lookup configuration from TOML (`[lookup]` section)

use super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use takedown_domain::LookupProtocol;

/// Raw lookup configuration from TOML
///
/// # Example
///
/// ```toml
/// [lookup]
/// protocol = "rdap"                # "whois" or "rdap"
/// whois_timeout_secs = 10
/// iana_whois_server = "whois.iana.org"
/// rdap_bootstrap_url = "https://data.iana.org/rdap/dns.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    pub protocol: String,
    /// Socket timeout for each WHOIS query
    pub whois_timeout_secs: u64,
    /// Root WHOIS server used to find a TLD's registry server
    pub iana_whois_server: String,
    /// IANA RDAP bootstrap file for DNS
    pub rdap_bootstrap_url: String,
    /// HTTP timeout for RDAP requests
    pub rdap_timeout_secs: u64,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        Self {
            protocol: "whois".to_string(),
            whois_timeout_secs: 10,
            iana_whois_server: "whois.iana.org".to_string(),
            rdap_bootstrap_url: "https://data.iana.org/rdap/dns.json".to_string(),
            rdap_timeout_secs: 10,
        }
    }
}

impl FileLookupConfig {
    /// Parse protocol string into LookupProtocol, returning warnings on failure.
    pub fn parse_protocol(&self) -> (LookupProtocol, Vec<ConfigIssue>) {
        match self.protocol.parse::<LookupProtocol>() {
            Ok(protocol) => (protocol, vec![]),
            Err(_) => (
                LookupProtocol::default(),
                vec![ConfigIssue::invalid_enum(
                    "lookup.protocol",
                    &self.protocol,
                    &["whois", "rdap"],
                    "whois",
                )],
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_protocol().1;
        if self.whois_timeout_secs == 0 {
            issues.push(ConfigIssue::out_of_range(
                "lookup.whois_timeout_secs",
                "lookup.whois_timeout_secs cannot be 0",
            ));
        }
        if self.rdap_timeout_secs == 0 {
            issues.push(ConfigIssue::out_of_range(
                "lookup.rdap_timeout_secs",
                "lookup.rdap_timeout_secs cannot be 0",
            ));
        }
        if self.iana_whois_server.trim().is_empty() {
            issues.push(ConfigIssue::empty("lookup.iana_whois_server"));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_protocol() {
        let config = FileLookupConfig {
            protocol: "RDAP".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_protocol().0, LookupProtocol::Rdap);

        let config = FileLookupConfig {
            protocol: "dns".to_string(),
            ..Default::default()
        };
        let (protocol, issues) = config.parse_protocol();
        assert_eq!(protocol, LookupProtocol::Whois);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_zero_timeout_flagged() {
        let config = FileLookupConfig {
            whois_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 1);
    }
}
