//! Rule-based planner.
//!
//! Always runs the same three steps: resolve the registrar, search for its
//! contact, then hand the facts to a [`DraftComposer`]. Missing facts degrade
//! to `[not found]` instead of failing the run.

use crate::ports::draft_composer::DraftComposer;
use crate::ports::progress::TakedownProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::draft_takedown::TakedownError;
use crate::use_cases::planner::TakedownPlanner;
use crate::use_cases::tool_helpers::run_capability;
use async_trait::async_trait;
use std::sync::Arc;
use takedown_domain::{
    CapabilityInput, CapabilityOutput, DraftFacts, TakedownDraft, TakedownPromptTemplate,
    TakedownRequest, ToolLedger,
};
use tracing::{debug, info};

/// Deterministic planner: resolve → search → extract → compose
pub struct ScriptedPlanner<T: ToolExecutorPort> {
    tools: Arc<T>,
    composer: Arc<dyn DraftComposer>,
}

impl<T: ToolExecutorPort> ScriptedPlanner<T> {
    pub fn new(tools: Arc<T>, composer: Arc<dyn DraftComposer>) -> Self {
        Self { tools, composer }
    }
}

#[async_trait]
impl<T: ToolExecutorPort + 'static> TakedownPlanner for ScriptedPlanner<T> {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    async fn plan(
        &self,
        request: &TakedownRequest,
        progress: &dyn TakedownProgressNotifier,
    ) -> Result<TakedownDraft, TakedownError> {
        let mut ledger = ToolLedger::new();
        let domain = request.domain.registrable();

        progress.on_stage("Looking up registrar");
        let lookup = CapabilityInput::ResolveRegistrar {
            domain: domain.to_string(),
        };
        // Lookup failures are already recorded in the ledger
        let _ = run_capability(self.tools.as_ref(), &mut ledger, &lookup, progress).await;

        let registrar = ledger.registrar().cloned();
        let registrar_name = registrar.as_ref().and_then(|r| r.registrar_name.clone());

        progress.on_stage("Searching for takedown contact");
        let query = match &registrar_name {
            Some(name) => TakedownPromptTemplate::contact_query(name),
            None => TakedownPromptTemplate::contact_query(&format!("{} registrar", domain)),
        };
        let search = CapabilityInput::SearchWeb { query };
        let found_in_search = match run_capability(self.tools.as_ref(), &mut ledger, &search, progress).await {
            Ok(CapabilityOutput::Search(result)) => result.contact_email(),
            _ => None,
        };

        // The registry's own abuse address beats anything scraped from the web
        let registrar_email = registrar
            .as_ref()
            .and_then(|r| r.abuse_email.clone())
            .or(found_in_search);

        info!(
            registrar = registrar_name.as_deref().unwrap_or("[not found]"),
            email = registrar_email.as_deref().unwrap_or("[not found]"),
            "Facts gathered"
        );

        progress.on_stage("Composing draft");
        let facts = DraftFacts {
            request,
            registrar_name: registrar_name.as_deref(),
            registrar_email: registrar_email.as_deref(),
        };
        let email = self.composer.compose(&facts).await?;
        debug!(subject = %email.subject, "Draft composed");

        Ok(TakedownDraft::new(
            registrar_name,
            registrar_email,
            email.subject,
            email.body,
        ))
    }
}
