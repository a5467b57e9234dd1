//! Validated domain name value object

use crate::core::error::DomainError;

/// A domain name that has a registrable label under a known public suffix.
///
/// The string the user typed is kept verbatim in [`as_entered`](Self::as_entered)
/// so exports can use it unchanged; lookups use the normalized
/// [`registrable`](Self::registrable) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    entered: String,
    host: String,
    registrable: String,
    suffix: String,
}

impl DomainName {
    /// Parse user input into a domain name.
    ///
    /// Tolerates a leading scheme, userinfo, a trailing path or query, a port
    /// and a trailing dot. Matching is case-insensitive. Internationalized
    /// names are converted to their ASCII (punycode) form.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingDomain);
        }

        let host = to_ascii_host(&normalize_host(trimmed))
            .ok_or_else(|| DomainError::InvalidDomain(trimmed.to_string()))?;
        if host.is_empty() || !host.split('.').all(is_valid_label) {
            return Err(DomainError::InvalidDomain(trimmed.to_string()));
        }

        let suffix = psl::suffix(host.as_bytes())
            .filter(|s| s.is_known())
            .ok_or_else(|| DomainError::InvalidDomain(trimmed.to_string()))?;
        let registrable = psl::domain(host.as_bytes())
            .filter(|d| d.suffix().is_known())
            .ok_or_else(|| DomainError::InvalidDomain(trimmed.to_string()))?;

        let suffix = String::from_utf8_lossy(suffix.as_bytes()).into_owned();
        let registrable = String::from_utf8_lossy(registrable.as_bytes()).into_owned();

        // The registrable part must carry a label of its own in front of the suffix
        if registrable.len() <= suffix.len() + 1 {
            return Err(DomainError::InvalidDomain(trimmed.to_string()));
        }

        Ok(Self {
            entered: input.to_string(),
            host,
            registrable,
            suffix,
        })
    }

    /// The input exactly as the user entered it
    pub fn as_entered(&self) -> &str {
        &self.entered
    }

    /// Full normalized ASCII host name (may include subdomains)
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Registrable domain (`label.suffix`), the name registrars know about
    pub fn registrable(&self) -> &str {
        &self.registrable
    }

    /// Public suffix, e.g. `co.uk`
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Top-level label, e.g. `uk` for `example.co.uk`
    pub fn tld(&self) -> &str {
        self.suffix.rsplit('.').next().unwrap_or(&self.suffix)
    }
}

impl std::fmt::Display for DomainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.registrable)
    }
}

fn normalize_host(input: &str) -> String {
    let mut rest = input;
    if let Some(idx) = rest.find("://") {
        rest = &rest[idx + 3..];
    }
    if let Some(end) = rest.find(['/', '?', '#']) {
        rest = &rest[..end];
    }
    if let Some(at) = rest.rfind('@') {
        rest = &rest[at + 1..];
    }
    if let Some((host, port)) = rest.rsplit_once(':')
        && port.chars().all(|c| c.is_ascii_digit())
    {
        rest = host;
    }
    rest.trim_end_matches('.').to_lowercase()
}

/// A-label form of `host`; `None` when IDNA processing rejects it.
fn to_ascii_host(host: &str) -> Option<String> {
    if host.is_ascii() {
        return Some(host.to_string());
    }
    match url::Host::parse(host) {
        Ok(url::Host::Domain(ascii)) => Some(ascii),
        _ => None,
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
