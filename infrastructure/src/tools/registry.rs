//! Capability registry
//!
//! [`CapabilityRegistry`] implements [`ToolExecutorPort`] for the closed
//! capability set by routing each [`CapabilityInput`] to its adapter:
//!
//! | Capability | Adapter |
//! |------------|---------|
//! | `resolve_registrar` | [`RegistrarLookupPort`] (WHOIS or RDAP) |
//! | `search_web` | [`ContactFinderPort`] (DuckDuckGo) |
//!
//! Lookup failures become coded [`ToolError`]s so the planner can reason
//! about them instead of aborting the request.

use std::sync::Arc;

use async_trait::async_trait;
use takedown_application::ports::{
    contact_finder::ContactFinderPort, registrar_lookup::RegistrarLookupPort,
    tool_executor::ToolExecutorPort,
};
use takedown_domain::{
    DomainName, LookupError,
    tool::{
        CapabilityInput, CapabilityOutput, entities::ToolSpec, takedown_tool_spec,
        value_objects::ToolError,
    },
};
use tracing::debug;

/// Routes capability calls to the lookup and search adapters.
pub struct CapabilityRegistry {
    lookup: Arc<dyn RegistrarLookupPort>,
    finder: Arc<dyn ContactFinderPort>,
    tool_spec: ToolSpec,
}

impl CapabilityRegistry {
    pub fn new(lookup: Arc<dyn RegistrarLookupPort>, finder: Arc<dyn ContactFinderPort>) -> Self {
        let tool_spec = takedown_tool_spec(lookup.protocol());
        Self {
            lookup,
            finder,
            tool_spec,
        }
    }
}

/// Map a lookup failure onto the tool error codes the planner understands.
pub fn lookup_error_to_tool_error(err: LookupError) -> ToolError {
    match err {
        LookupError::NotFound(_) | LookupError::UnsupportedRegistry { .. } => {
            ToolError::new(ToolError::NOT_FOUND, err.to_string())
        }
        LookupError::Timeout(_) => ToolError::timeout(err.to_string()),
        LookupError::InvalidDomain(_) => ToolError::invalid_argument(err.to_string()),
        LookupError::Transport(_) | LookupError::Malformed { .. } => {
            ToolError::execution_failed(err.to_string())
        }
    }
}

#[async_trait]
impl ToolExecutorPort for CapabilityRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn invoke(&self, input: &CapabilityInput) -> Result<CapabilityOutput, ToolError> {
        match input {
            CapabilityInput::ResolveRegistrar { domain } => {
                let name = DomainName::parse(domain).map_err(|_| {
                    ToolError::invalid_argument(format!(
                        "'{}' is not a valid domain name",
                        domain
                    ))
                })?;
                debug!(domain = %name.registrable(), "Resolving registrar");
                self.lookup
                    .resolve(name.registrable())
                    .await
                    .map(CapabilityOutput::Registrar)
                    .map_err(lookup_error_to_tool_error)
            }
            CapabilityInput::SearchWeb { query } => {
                Ok(CapabilityOutput::Search(self.finder.search(query).await))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use takedown_domain::{LookupProtocol, RegistrarRecord, SearchResult, Snippet};

    struct MockLookup {
        result: Result<RegistrarRecord, LookupError>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RegistrarLookupPort for MockLookup {
        fn protocol(&self) -> LookupProtocol {
            LookupProtocol::Rdap
        }

        async fn resolve(&self, domain: &str) -> Result<RegistrarRecord, LookupError> {
            self.seen.lock().unwrap().push(domain.to_string());
            self.result.clone()
        }
    }

    struct MockFinder;

    #[async_trait]
    impl ContactFinderPort for MockFinder {
        async fn search(&self, query: &str) -> SearchResult {
            SearchResult::new(
                query,
                vec![Snippet::new(
                    "Example Registrar abuse",
                    "Abuse contact: abuse@example-registrar.com",
                    "https://example-registrar.com/abuse",
                )],
            )
        }
    }

    fn registry(result: Result<RegistrarRecord, LookupError>) -> (CapabilityRegistry, Arc<MockLookup>) {
        let lookup = Arc::new(MockLookup {
            result,
            seen: Mutex::new(Vec::new()),
        });
        (CapabilityRegistry::new(lookup.clone(), Arc::new(MockFinder)), lookup)
    }

    #[tokio::test]
    async fn test_resolve_uses_registrable_domain() {
        let record = RegistrarRecord::new("example.com", LookupProtocol::Rdap)
            .with_registrar("Example Registrar LLC");
        let (registry, lookup) = registry(Ok(record.clone()));

        let output = registry
            .invoke(&CapabilityInput::ResolveRegistrar {
                domain: "https://www.Example.com/page".into(),
            })
            .await
            .unwrap();

        assert_eq!(output, CapabilityOutput::Registrar(record));
        assert_eq!(lookup.seen.lock().unwrap().as_slice(), ["example.com"]);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found_code() {
        let (registry, _) = registry(Err(LookupError::NotFound("example.com".into())));
        let err = registry
            .invoke(&CapabilityInput::ResolveRegistrar {
                domain: "example.com".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invalid_domain_argument() {
        let (registry, lookup) = registry(Err(LookupError::NotFound("x".into())));
        let err = registry
            .invoke(&CapabilityInput::ResolveRegistrar {
                domain: "not a domain".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, "INVALID_ARGUMENT");
        assert!(lookup.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_passes_through() {
        let (registry, _) = registry(Err(LookupError::Timeout(10)));
        let output = registry
            .invoke(&CapabilityInput::SearchWeb {
                query: "Example Registrar abuse takedown contact email".into(),
            })
            .await
            .unwrap();
        let CapabilityOutput::Search(result) = output else {
            panic!("expected search output");
        };
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_spec_follows_lookup_protocol() {
        let (registry, _) = registry(Err(LookupError::Timeout(10)));
        let spec = registry.tool_spec();
        assert_eq!(spec.resolve("rdap_lookup"), Some("resolve_registrar"));
        assert_eq!(spec.resolve("resolve_registrar"), Some("resolve_registrar"));
        assert_eq!(registry.available_tools(), vec!["resolve_registrar", "search_web"]);
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(lookup_error_to_tool_error(LookupError::Timeout(10)).code, "TIMEOUT");
        assert_eq!(
            lookup_error_to_tool_error(LookupError::UnsupportedRegistry {
                protocol: "RDAP".into(),
                tld: "zz".into()
            })
            .code,
            "NOT_FOUND"
        );
        assert_eq!(
            lookup_error_to_tool_error(LookupError::Transport("reset".into())).code,
            "EXECUTION_FAILED"
        );
    }
}
