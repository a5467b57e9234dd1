//! Draft composers
//!
//! - [`TemplateDraftComposer`]: fixed wording, no network
//! - [`LlmDraftComposer`]: asks a hosted model for the subject and body

use crate::ports::draft_composer::{ComposedEmail, DraftComposer};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::draft_takedown::TakedownError;
use async_trait::async_trait;
use std::sync::Arc;
use takedown_domain::{DraftFacts, Model, TakedownDraft, TakedownPromptTemplate};
use tracing::debug;

/// Composer with fixed wording
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDraftComposer;

#[async_trait]
impl DraftComposer for TemplateDraftComposer {
    async fn compose(&self, facts: &DraftFacts<'_>) -> Result<ComposedEmail, TakedownError> {
        let request = facts.request;
        let domain = request.domain.registrable();
        let reason = request.reason.label();

        let (greeting, opening) = match facts.registrar_name {
            Some(name) => (
                format!("Dear {} Abuse Team,", name),
                format!(
                    "I am writing to request the takedown of the domain {domain}, which is registered through your service."
                ),
            ),
            None => (
                "Dear Abuse Team,".to_string(),
                format!(
                    "I am writing to request the takedown of the domain {domain}. I could not confirm its registrar; please forward this request if the domain is not registered through your service."
                ),
            ),
        };

        let mut body = format!("{greeting}\n\n{opening}\n\nReason for this request: {reason}.");
        if !request.additional_info.is_empty() {
            body.push_str(&format!(
                "\n\nAdditional information: {}",
                request.additional_info
            ));
        }
        body.push_str(
            "\n\nPlease investigate this matter and take appropriate action under your abuse policy, \
             including suspension of the domain where warranted. I would appreciate confirmation \
             once this request has been reviewed.\n\n\
             Kind regards,\n[Your name]\n[Your contact information]",
        );

        Ok(ComposedEmail {
            subject: format!("Takedown request for {}: {}", domain, reason),
            body,
        })
    }
}

/// Composer that asks a hosted model to write the email
pub struct LlmDraftComposer<G: LlmGateway> {
    gateway: Arc<G>,
    model: Model,
}

impl<G: LlmGateway> LlmDraftComposer<G> {
    pub fn new(gateway: Arc<G>, model: Model) -> Self {
        Self { gateway, model }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> DraftComposer for LlmDraftComposer<G> {
    async fn compose(&self, facts: &DraftFacts<'_>) -> Result<ComposedEmail, TakedownError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, TakedownPromptTemplate::system())
            .await?;
        let reply = session.send(&TakedownPromptTemplate::compose(facts)).await?;
        debug!(chars = reply.len(), "Model composed draft");

        // Registrar and address come from the facts, never from the model
        let draft = TakedownDraft::parse(&reply).map_err(|e| {
            TakedownError::Orchestration(format!("the model's email was not in draft format ({})", e))
        })?;

        Ok(ComposedEmail {
            subject: draft.email_subject().to_string(),
            body: draft.email_body().to_string(),
        })
    }
}
