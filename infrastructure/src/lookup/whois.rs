//! WHOIS registrar lookup (TCP port 43)
//!
//! The lookup follows the referral chain the way the `whois` command does:
//!
//! 1. Ask the IANA root server for the TLD and read its `refer:` line
//! 2. Ask the registry server for the domain
//! 3. If the registry is thin and names a `Registrar WHOIS Server:`, ask it too
//!
//! Field extraction is line based and case-insensitive on the label.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use takedown_domain::{LookupError, LookupProtocol, RegistrarRecord, extract_emails};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, warn};

/// WHOIS service port
pub const WHOIS_PORT: u16 = 43;

/// Registrar name labels, in order of preference.
const REGISTRAR_LABELS: [&str; 5] = [
    "registrar",
    "sponsoring registrar",
    "registrar name",
    "registrar organization",
    "registrar organisation",
];

const ABUSE_EMAIL_LABEL: &str = "registrar abuse contact email";
const REGISTRAR_SERVER_LABEL: &str = "registrar whois server";

static NOT_FOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\W*(no match for|not found|no data found|no entries found|domain not found|no object found|status:\s*(free|available))",
    )
    .expect("WHOIS not-found pattern is valid")
});

/// Raw WHOIS query transport.
#[async_trait]
pub trait WhoisTransport: Send + Sync {
    /// Send `query` to `server` and return the full text response
    async fn query(&self, server: &str, query: &str) -> Result<String, LookupError>;
}

/// Plain TCP transport with a per-query timeout.
#[derive(Debug, Clone)]
pub struct TcpWhoisTransport {
    timeout: Duration,
}

impl TcpWhoisTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exchange(server: &str, query: &str) -> std::io::Result<Vec<u8>> {
        let mut stream = TcpStream::connect((server, WHOIS_PORT)).await?;
        stream.write_all(format!("{}\r\n", query).as_bytes()).await?;
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await?;
        Ok(buf)
    }
}

#[async_trait]
impl WhoisTransport for TcpWhoisTransport {
    async fn query(&self, server: &str, query: &str) -> Result<String, LookupError> {
        debug!(server = %server, query = %query, "WHOIS query");
        match tokio::time::timeout(self.timeout, Self::exchange(server, query)).await {
            Ok(Ok(bytes)) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Ok(Err(e)) => Err(LookupError::Transport(format!("{}: {}", server, e))),
            Err(_) => Err(LookupError::Timeout(self.timeout.as_secs())),
        }
    }
}

/// Resolves registrars by walking the WHOIS referral chain.
pub struct WhoisResolver<T: WhoisTransport = TcpWhoisTransport> {
    transport: T,
    root_server: String,
}

impl<T: WhoisTransport> WhoisResolver<T> {
    pub fn new(transport: T, root_server: impl Into<String>) -> Self {
        Self {
            transport,
            root_server: root_server.into(),
        }
    }

    /// Look up the registrar for a registrable domain name.
    pub async fn resolve(&self, domain: &str) -> Result<RegistrarRecord, LookupError> {
        let domain = domain.trim().trim_end_matches('.').to_ascii_lowercase();
        let tld = domain
            .rsplit('.')
            .next()
            .filter(|t| !t.is_empty() && domain.contains('.'))
            .ok_or_else(|| LookupError::InvalidDomain(domain.clone()))?;

        let root_response = self.transport.query(&self.root_server, tld).await?;
        let registry_server =
            parse_referral(&root_response).ok_or_else(|| LookupError::UnsupportedRegistry {
                protocol: LookupProtocol::Whois.display_name().to_string(),
                tld: tld.to_string(),
            })?;

        let registry_response = self.transport.query(&registry_server, &domain).await?;
        if is_not_found(&registry_response) {
            return Err(LookupError::NotFound(domain));
        }

        let mut source = registry_server.clone();
        let mut responses = vec![registry_response];

        if let Some(registrar_server) = field(&responses[0], REGISTRAR_SERVER_LABEL)
            .map(|s| strip_scheme(&s).to_string())
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(&registry_server))
        {
            match self.transport.query(&registrar_server, &domain).await {
                Ok(text) if !is_not_found(&text) => {
                    source = registrar_server;
                    responses.insert(0, text);
                }
                Ok(_) => debug!(server = %registrar_server, "Registrar WHOIS has no record"),
                Err(e) => {
                    warn!(server = %registrar_server, error = %e, "Registrar WHOIS referral failed, using registry data")
                }
            }
        }

        let name = responses
            .iter()
            .find_map(|text| registrar_name(text))
            .ok_or_else(|| LookupError::NotFound(domain.clone()))?;

        let mut record = RegistrarRecord::new(&domain, LookupProtocol::Whois)
            .with_registrar(name)
            .with_source(source);
        if let Some(email) = responses.iter().find_map(|text| abuse_email(text)) {
            record = record.with_abuse_email(email);
        }
        Ok(record)
    }
}

/// Registry server named by an IANA root response (`refer:` or `whois:`).
pub fn parse_referral(text: &str) -> Option<String> {
    field(text, "refer")
        .or_else(|| field(text, "whois"))
        .filter(|s| !s.is_empty())
}

/// Whether a registry response says the domain does not exist.
pub fn is_not_found(text: &str) -> bool {
    NOT_FOUND_RE.is_match(text)
}

/// First non-empty registrar name field in a WHOIS response.
pub fn registrar_name(text: &str) -> Option<String> {
    REGISTRAR_LABELS.iter().find_map(|label| field(text, label))
}

fn abuse_email(text: &str) -> Option<String> {
    field(text, ABUSE_EMAIL_LABEL).and_then(|v| extract_emails(&v).into_iter().next())
}

/// Value of the first line labelled `label` (case-insensitive).
///
/// An empty inline value falls through to the next indented line, which is
/// how Nominet-style responses lay out `Registrar:` blocks.
fn field(text: &str, label: &str) -> Option<String> {
    let mut lines = text.lines().peekable();
    while let Some(line) = lines.next() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if !key.trim().eq_ignore_ascii_case(label) {
            continue;
        }
        let value = value.trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
        if let Some(next) = lines.peek()
            && next.starts_with(char::is_whitespace)
            && !next.trim().is_empty()
            && !next.contains(':')
        {
            return Some(strip_tag(next.trim()).to_string());
        }
    }
    None
}

/// `Example Ltd [Tag = EXAMPLE]` → `Example Ltd`
fn strip_tag(value: &str) -> &str {
    match value.find(" [Tag") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}

fn strip_scheme(value: &str) -> &str {
    value
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const IANA_COM: &str = "% IANA WHOIS server\n\ndomain:       COM\n\nrefer:        whois.verisign-grs.com\n";

    const VERISIGN: &str = "   Domain Name: EXAMPLE.COM\n   Registry Domain ID: 2336799_DOMAIN_COM-VRSN\n   Registrar WHOIS Server: whois.example-registrar.com\n   Registrar URL: http://www.example-registrar.com\n   Registrar: Example Registrar LLC\n   Registrar Abuse Contact Email: abuse@example-registrar.com\n";

    const REGISTRAR: &str = "Domain Name: example.com\nRegistrar: Example Registrar, LLC\nRegistrar Abuse Contact Email: Abuse@Example-Registrar.com\n";

    const NOMINET: &str = "\n    Domain name:\n        example.co.uk\n\n    Registrar:\n        Example UK Ltd [Tag = EXAMPLE]\n        URL: https://example.co.uk\n";

    /// Transport answering from a fixed (server, query) table.
    #[derive(Default)]
    struct MockTransport {
        answers: HashMap<(String, String), Result<String, LookupError>>,
        queries: Mutex<Vec<(String, String)>>,
    }

    impl MockTransport {
        fn answer(mut self, server: &str, query: &str, text: &str) -> Self {
            self.answers
                .insert((server.into(), query.into()), Ok(text.into()));
            self
        }

        fn fail(mut self, server: &str, query: &str, err: LookupError) -> Self {
            self.answers.insert((server.into(), query.into()), Err(err));
            self
        }
    }

    #[async_trait]
    impl WhoisTransport for MockTransport {
        async fn query(&self, server: &str, query: &str) -> Result<String, LookupError> {
            self.queries
                .lock()
                .unwrap()
                .push((server.to_string(), query.to_string()));
            self.answers
                .get(&(server.to_string(), query.to_string()))
                .cloned()
                .unwrap_or_else(|| Err(LookupError::Transport(format!("no route to {}", server))))
        }
    }

    fn resolver(transport: MockTransport) -> WhoisResolver<MockTransport> {
        WhoisResolver::new(transport, "whois.iana.org")
    }

    #[tokio::test]
    async fn test_follows_referral_chain_to_registrar() {
        let transport = MockTransport::default()
            .answer("whois.iana.org", "com", IANA_COM)
            .answer("whois.verisign-grs.com", "example.com", VERISIGN)
            .answer("whois.example-registrar.com", "example.com", REGISTRAR);
        let resolver = resolver(transport);

        let record = resolver.resolve("example.com").await.unwrap();
        assert_eq!(record.registrar_name.as_deref(), Some("Example Registrar, LLC"));
        assert_eq!(
            record.abuse_email.as_deref(),
            Some("abuse@example-registrar.com")
        );
        assert_eq!(record.source.as_deref(), Some("whois.example-registrar.com"));
        assert_eq!(record.protocol, LookupProtocol::Whois);
        assert_eq!(resolver.transport.queries.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_registrar_referral_failure_uses_registry_data() {
        let transport = MockTransport::default()
            .answer("whois.iana.org", "com", IANA_COM)
            .answer("whois.verisign-grs.com", "example.com", VERISIGN)
            .fail(
                "whois.example-registrar.com",
                "example.com",
                LookupError::Timeout(10),
            );

        let record = resolver(transport).resolve("example.com").await.unwrap();
        assert_eq!(record.registrar_name.as_deref(), Some("Example Registrar LLC"));
        assert_eq!(record.source.as_deref(), Some("whois.verisign-grs.com"));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let transport = MockTransport::default()
            .answer("whois.iana.org", "com", IANA_COM)
            .answer(
                "whois.verisign-grs.com",
                "unregistered-example.com",
                "No match for \"UNREGISTERED-EXAMPLE.COM\".\r\n>>> Last update <<<\r\n",
            );

        let err = resolver(transport)
            .resolve("unregistered-example.com")
            .await
            .unwrap_err();
        assert_eq!(err, LookupError::NotFound("unregistered-example.com".into()));
    }

    #[tokio::test]
    async fn test_missing_registrar_field_is_not_found() {
        let transport = MockTransport::default()
            .answer("whois.iana.org", "com", IANA_COM)
            .answer("whois.verisign-grs.com", "example.com", "Domain Name: EXAMPLE.COM\n");

        let err = resolver(transport).resolve("example.com").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_tld_without_whois_server() {
        let transport = MockTransport::default().answer(
            "whois.iana.org",
            "example",
            "domain: EXAMPLE\nstatus: ACTIVE\n",
        );

        let err = resolver(transport).resolve("foo.example").await.unwrap_err();
        assert!(matches!(err, LookupError::UnsupportedRegistry { ref tld, .. } if tld == "example"));
    }

    #[tokio::test]
    async fn test_timeout_propagates() {
        let transport = MockTransport::default().fail("whois.iana.org", "com", LookupError::Timeout(10));
        let err = resolver(transport).resolve("example.com").await.unwrap_err();
        assert_eq!(err, LookupError::Timeout(10));
    }

    #[test]
    fn test_nominet_next_line_registrar() {
        assert_eq!(registrar_name(NOMINET).as_deref(), Some("Example UK Ltd"));
    }

    #[test]
    fn test_label_match_is_exact_and_case_insensitive() {
        let text = "Registrar URL: http://r.example\nSPONSORING REGISTRAR: Old Style Registrar\n";
        assert_eq!(registrar_name(text).as_deref(), Some("Old Style Registrar"));
    }

    #[test]
    fn test_parse_referral_whois_line() {
        assert_eq!(
            parse_referral("domain: NET\nwhois: whois.verisign-grs.com\n").as_deref(),
            Some("whois.verisign-grs.com")
        );
        assert_eq!(parse_referral("domain: EXAMPLE\n"), None);
    }

    #[test]
    fn test_not_found_patterns() {
        assert!(is_not_found("No match for \"X.COM\"."));
        assert!(is_not_found("%% NOT FOUND\n"));
        assert!(is_not_found("Status: free\n"));
        assert!(!is_not_found(VERISIGN));
    }
}
