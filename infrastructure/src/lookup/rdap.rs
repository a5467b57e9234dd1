//! RDAP registrar lookup
//!
//! The IANA bootstrap file is fetched once, on first use, and shared by every
//! later lookup through the resolver's `OnceCell`.

use super::bootstrap::RdapBootstrap;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use takedown_domain::{LookupError, LookupProtocol, RegistrarRecord};
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// HTTP JSON fetch used by the RDAP resolver.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GET a JSON document. HTTP 404 is `Ok(None)`.
    async fn get_json(&self, url: &str) -> Result<Option<Value>, LookupError>;
}

/// [`JsonFetcher`] over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestJsonFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestJsonFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("takedown/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl JsonFetcher for ReqwestJsonFetcher {
    async fn get_json(&self, url: &str) -> Result<Option<Value>, LookupError> {
        debug!(url = %url, "RDAP GET");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/rdap+json, application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Timeout(self.timeout.as_secs())
                } else {
                    LookupError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        response
            .json::<Value>()
            .await
            .map(Some)
            .map_err(|e| LookupError::Malformed {
                server: url.to_string(),
                message: e.to_string(),
            })
    }
}

/// Resolves registrars over RDAP.
pub struct RdapResolver<F: JsonFetcher = ReqwestJsonFetcher> {
    fetcher: F,
    bootstrap_url: String,
    bootstrap: OnceCell<RdapBootstrap>,
}

impl<F: JsonFetcher> RdapResolver<F> {
    pub fn new(fetcher: F, bootstrap_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            bootstrap_url: bootstrap_url.into(),
            bootstrap: OnceCell::new(),
        }
    }

    async fn bootstrap(&self) -> Result<&RdapBootstrap, LookupError> {
        self.bootstrap
            .get_or_try_init(|| async {
                let json = self.fetcher.get_json(&self.bootstrap_url).await?.ok_or_else(|| {
                    LookupError::Transport(format!(
                        "RDAP bootstrap not found at {}",
                        self.bootstrap_url
                    ))
                })?;
                let bootstrap =
                    RdapBootstrap::from_json(&json).map_err(|message| LookupError::Malformed {
                        server: self.bootstrap_url.clone(),
                        message,
                    })?;
                info!(services = bootstrap.len(), "Loaded RDAP bootstrap");
                Ok::<_, LookupError>(bootstrap)
            })
            .await
    }

    /// Look up the registrar for a registrable domain name.
    pub async fn resolve(&self, domain: &str) -> Result<RegistrarRecord, LookupError> {
        let domain = domain.trim().trim_end_matches('.').to_ascii_lowercase();
        if !domain.contains('.') {
            return Err(LookupError::InvalidDomain(domain));
        }

        let base = self.bootstrap().await?.base_url_for(&domain).ok_or_else(|| {
            LookupError::UnsupportedRegistry {
                protocol: LookupProtocol::Rdap.display_name().to_string(),
                tld: domain.rsplit('.').next().unwrap_or_default().to_string(),
            }
        })?;

        let url = format!("{}/domain/{}", base.trim_end_matches('/'), domain);
        let json = self
            .fetcher
            .get_json(&url)
            .await?
            .ok_or_else(|| LookupError::NotFound(domain.clone()))?;

        let registrar = find_entity(&json, "registrar")
            .ok_or_else(|| LookupError::NotFound(domain.clone()))?;
        let name = vcard_text(registrar, "fn")
            .or_else(|| vcard_text(registrar, "org"))
            .ok_or_else(|| LookupError::NotFound(domain.clone()))?;

        let mut record = RegistrarRecord::new(&domain, LookupProtocol::Rdap)
            .with_registrar(name)
            .with_source(url);
        if let Some(email) = find_entity(registrar, "abuse")
            .or_else(|| find_entity(&json, "abuse"))
            .and_then(|abuse| vcard_text(abuse, "email"))
        {
            record = record.with_abuse_email(email.to_ascii_lowercase());
        }
        Ok(record)
    }
}

/// First direct child entity carrying `role`.
fn find_entity<'a>(object: &'a Value, role: &str) -> Option<&'a Value> {
    object
        .get("entities")?
        .as_array()?
        .iter()
        .find(|entity| {
            entity
                .get("roles")
                .and_then(Value::as_array)
                .is_some_and(|roles| roles.iter().any(|r| r.as_str() == Some(role)))
        })
}

/// Text value of a jCard property (`["fn", {}, "text", "Example Registrar"]`).
fn vcard_text(entity: &Value, property: &str) -> Option<String> {
    entity
        .get("vcardArray")?
        .get(1)?
        .as_array()?
        .iter()
        .filter_map(Value::as_array)
        .find(|prop| prop.first().and_then(Value::as_str) == Some(property))
        .and_then(|prop| prop.get(3))
        .and_then(|value| match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Array(parts) => parts.iter().filter_map(Value::as_str).next().map(|s| s.trim().to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
}
