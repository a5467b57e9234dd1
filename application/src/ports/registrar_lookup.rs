//! Registrar lookup port

use async_trait::async_trait;
use takedown_domain::{LookupError, LookupProtocol, RegistrarRecord};

/// Resolves a domain to its registrar over one protocol.
///
/// WHOIS and RDAP adapters are interchangeable behind this trait; the
/// protocol is fixed when the adapter is built.
#[async_trait]
pub trait RegistrarLookupPort: Send + Sync {
    /// Protocol this adapter speaks
    fn protocol(&self) -> LookupProtocol;

    /// Look up the registrar for a registrable domain name
    async fn resolve(&self, domain: &str) -> Result<RegistrarRecord, LookupError>;
}
