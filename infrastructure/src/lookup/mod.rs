//! Registrar lookup adapters
//!
//! [`LookupStrategy`] picks WHOIS or RDAP once, from configuration, and
//! implements [`RegistrarLookupPort`] by delegating to the chosen resolver.

pub mod bootstrap;
pub mod rdap;
pub mod whois;

pub use bootstrap::RdapBootstrap;
pub use rdap::{JsonFetcher, RdapResolver, ReqwestJsonFetcher};
pub use whois::{TcpWhoisTransport, WhoisResolver, WhoisTransport};

use crate::config::FileLookupConfig;
use async_trait::async_trait;
use std::time::Duration;
use takedown_application::ports::registrar_lookup::RegistrarLookupPort;
use takedown_domain::{LookupError, LookupProtocol, RegistrarRecord};
use tracing::info;

/// The registrar lookup protocol in use for this process.
pub enum LookupStrategy<W: WhoisTransport = TcpWhoisTransport, F: JsonFetcher = ReqwestJsonFetcher> {
    Whois(WhoisResolver<W>),
    Rdap(RdapResolver<F>),
}

impl LookupStrategy {
    /// Build the network-backed resolver for `protocol`.
    pub fn from_config(
        protocol: LookupProtocol,
        config: &FileLookupConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(match protocol {
            LookupProtocol::Whois => LookupStrategy::Whois(WhoisResolver::new(
                TcpWhoisTransport::new(Duration::from_secs(config.whois_timeout_secs)),
                config.iana_whois_server.clone(),
            )),
            LookupProtocol::Rdap => LookupStrategy::Rdap(RdapResolver::new(
                ReqwestJsonFetcher::new(Duration::from_secs(config.rdap_timeout_secs))?,
                config.rdap_bootstrap_url.clone(),
            )),
        })
    }
}

#[async_trait]
impl<W: WhoisTransport, F: JsonFetcher> RegistrarLookupPort for LookupStrategy<W, F> {
    fn protocol(&self) -> LookupProtocol {
        match self {
            LookupStrategy::Whois(_) => LookupProtocol::Whois,
            LookupStrategy::Rdap(_) => LookupProtocol::Rdap,
        }
    }

    async fn resolve(&self, domain: &str) -> Result<RegistrarRecord, LookupError> {
        let result = match self {
            LookupStrategy::Whois(resolver) => resolver.resolve(domain).await,
            LookupStrategy::Rdap(resolver) => resolver.resolve(domain).await,
        };
        match &result {
            Ok(record) => info!(
                domain = %domain,
                protocol = self.protocol().as_str(),
                registrar = record.registrar_name.as_deref().unwrap_or("-"),
                "Registrar resolved"
            ),
            Err(e) => info!(domain = %domain, protocol = self.protocol().as_str(), error = %e, "Registrar lookup failed"),
        }
        result
    }
}
