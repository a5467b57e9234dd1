//! Ordering ledger for a single planning run

use super::capability::{Capability, CapabilityInput, CapabilityOutput};
use super::value_objects::ToolError;
use crate::registrar::RegistrarRecord;
use crate::search::SearchResult;

/// What the planner has attempted so far.
///
/// Enforces the two ordering rules every planner shares: a web search needs
/// a prior registrar lookup attempt, and a final answer needs a prior search
/// attempt. Attempts count whether they succeeded or not.
#[derive(Debug, Clone, Default)]
pub struct ToolLedger {
    lookups_attempted: usize,
    searches_attempted: usize,
    registrar: Option<RegistrarRecord>,
    searches: Vec<SearchResult>,
}

impl ToolLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `input` may run now
    pub fn admit(&self, input: &CapabilityInput) -> Result<(), ToolError> {
        match input.capability() {
            Capability::ResolveRegistrar => Ok(()),
            Capability::SearchWeb if self.lookups_attempted == 0 => {
                Err(ToolError::failed_precondition(format!(
                    "Call {} before {}: the registrar must be looked up first",
                    Capability::ResolveRegistrar,
                    Capability::SearchWeb
                )))
            }
            Capability::SearchWeb => Ok(()),
        }
    }

    /// Record an admitted invocation and its outcome
    pub fn record(&mut self, capability: Capability, outcome: Result<&CapabilityOutput, &ToolError>) {
        match capability {
            Capability::ResolveRegistrar => self.lookups_attempted += 1,
            Capability::SearchWeb => self.searches_attempted += 1,
        }
        match outcome {
            Ok(CapabilityOutput::Registrar(record)) if record.registrar_name.is_some() => {
                self.registrar = Some(record.clone());
            }
            Ok(CapabilityOutput::Search(result)) => self.searches.push(result.clone()),
            _ => {}
        }
    }

    /// A final answer is acceptable once a search has been attempted
    pub fn ready_to_answer(&self) -> bool {
        self.searches_attempted > 0
    }

    pub fn lookups_attempted(&self) -> usize {
        self.lookups_attempted
    }

    pub fn searches_attempted(&self) -> usize {
        self.searches_attempted
    }

    /// Most recent successful registrar lookup
    pub fn registrar(&self) -> Option<&RegistrarRecord> {
        self.registrar.as_ref()
    }

    pub fn searches(&self) -> &[SearchResult] {
        &self.searches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::LookupProtocol;

    fn search() -> CapabilityInput {
        CapabilityInput::SearchWeb {
            query: "x".to_string(),
        }
    }

    #[test]
    fn test_search_before_lookup_is_refused() {
        let ledger = ToolLedger::new();
        let err = ledger.admit(&search()).unwrap_err();
        assert_eq!(err.code, "FAILED_PRECONDITION");
        assert!(!ledger.ready_to_answer());
    }

    #[test]
    fn test_failed_lookup_still_unlocks_search() {
        let mut ledger = ToolLedger::new();
        let err = ToolError::not_found("registrar");
        ledger.record(Capability::ResolveRegistrar, Err(&err));

        assert!(ledger.admit(&search()).is_ok());
        assert!(ledger.registrar().is_none());
        assert_eq!(ledger.lookups_attempted(), 1);
    }

    #[test]
    fn test_search_unlocks_answer() {
        let mut ledger = ToolLedger::new();
        let record = RegistrarRecord::new("example.com", LookupProtocol::Whois).with_registrar("R");
        ledger.record(
            Capability::ResolveRegistrar,
            Ok(&CapabilityOutput::Registrar(record)),
        );
        ledger.record(
            Capability::SearchWeb,
            Ok(&CapabilityOutput::Search(SearchResult::empty("q"))),
        );

        assert!(ledger.ready_to_answer());
        assert_eq!(ledger.registrar().unwrap().registrar_name.as_deref(), Some("R"));
        assert_eq!(ledger.searches().len(), 1);
    }
}
