//! IANA RDAP bootstrap directory for DNS (RFC 9224)

use serde_json::Value;

/// TLD → RDAP base URL table parsed from `dns.json`.
#[derive(Debug, Clone, Default)]
pub struct RdapBootstrap {
    services: Vec<(Vec<String>, String)>,
}

impl RdapBootstrap {
    /// Parse the `services` array of an IANA bootstrap file.
    ///
    /// Each service is `[[suffixes...], [urls...]]`; the first HTTPS url is
    /// kept, otherwise the first url.
    pub fn from_json(json: &Value) -> Result<Self, String> {
        let services = json
            .get("services")
            .and_then(Value::as_array)
            .ok_or("bootstrap file has no services array")?;

        let mut parsed = Vec::with_capacity(services.len());
        for service in services {
            let (Some(suffixes), Some(urls)) = (
                service.get(0).and_then(Value::as_array),
                service.get(1).and_then(Value::as_array),
            ) else {
                continue;
            };
            let urls: Vec<&str> = urls.iter().filter_map(Value::as_str).collect();
            let Some(url) = urls
                .iter()
                .find(|u| u.starts_with("https://"))
                .or_else(|| urls.first())
            else {
                continue;
            };
            let suffixes = suffixes
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_ascii_lowercase)
                .collect();
            parsed.push((suffixes, url.to_string()));
        }

        Ok(Self { services: parsed })
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// RDAP base URL for a domain, matching the longest listed suffix.
    pub fn base_url_for(&self, domain: &str) -> Option<&str> {
        let domain = domain.trim_end_matches('.').to_ascii_lowercase();
        let labels: Vec<&str> = domain.split('.').collect();
        (1..labels.len()).find_map(|start| {
            let suffix = labels[start..].join(".");
            self.services
                .iter()
                .find(|(suffixes, _)| suffixes.iter().any(|s| *s == suffix))
                .map(|(_, url)| url.as_str())
        })
    }
}
