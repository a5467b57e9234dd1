//! Model-driven planner.
//!
//! Runs a native tool-use loop against a hosted chat model. The model is
//! offered the two capabilities as tools; every call it makes is resolved
//! through the tool spec, checked against the [`ToolLedger`], executed and
//! answered with a tool result. Errors of any kind go back to the model as
//! error results instead of aborting the run.

use crate::config::ExecutionParams;
use crate::ports::llm_gateway::{LlmGateway, LlmSession, ToolResultMessage};
use crate::ports::progress::TakedownProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::draft_takedown::TakedownError;
use crate::use_cases::planner::TakedownPlanner;
use crate::use_cases::tool_helpers::{run_capability, tool_args_preview};
use async_trait::async_trait;
use std::sync::Arc;
use takedown_domain::{
    LlmResponse, Model, TakedownDraft, TakedownPromptTemplate, TakedownRequest, ToolCall,
    ToolLedger,
};
use tracing::{debug, info, warn};

/// Planner backed by a hosted model with native tool calling
pub struct ModelPlanner<G: LlmGateway, T: ToolExecutorPort> {
    gateway: Arc<G>,
    tools: Arc<T>,
    schema: Arc<dyn ToolSchemaPort>,
    model: Model,
    params: ExecutionParams,
}

impl<G: LlmGateway, T: ToolExecutorPort> ModelPlanner<G, T> {
    pub fn new(
        gateway: Arc<G>,
        tools: Arc<T>,
        schema: Arc<dyn ToolSchemaPort>,
        model: Model,
    ) -> Self {
        Self {
            gateway,
            tools,
            schema,
            model,
            params: ExecutionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Execute one round of tool calls and build the result messages
    async fn run_tool_calls(
        &self,
        calls: &[ToolCall],
        ledger: &mut ToolLedger,
        progress: &dyn TakedownProgressNotifier,
    ) -> Vec<ToolResultMessage> {
        let mut messages = Vec::with_capacity(calls.len());

        for call in calls {
            let outcome = match self.tools.resolve_call(call) {
                Ok(input) => run_capability(self.tools.as_ref(), ledger, &input, progress).await,
                Err(e) => {
                    warn!(tool = %call.tool_name, error = %e, "Rejected tool call");
                    progress.on_tool_refused(&call.tool_name, &e.message);
                    Err(e)
                }
            };

            let (output, is_error) = match outcome {
                Ok(output) => (output.render(), false),
                Err(e) => (e.for_model(), true),
            };

            debug!(
                tool = %call.tool_name,
                args = %tool_args_preview(call),
                is_error,
                "Tool call answered"
            );

            match &call.native_id {
                Some(id) => messages.push(ToolResultMessage {
                    tool_use_id: id.clone(),
                    tool_name: call.tool_name.clone(),
                    output,
                    is_error,
                }),
                None => warn!(
                    "Missing native_id for tool call '{}'; skipping result.",
                    call.tool_name
                ),
            }
        }

        messages
    }

    /// The main loop. Returns the parsed draft or an orchestration failure.
    async fn drive(
        &self,
        session: &dyn LlmSession,
        request: &TakedownRequest,
        progress: &dyn TakedownProgressNotifier,
    ) -> Result<TakedownDraft, TakedownError> {
        let tools = self.schema.all_tools_schema(self.tools.tool_spec());
        let mut ledger = ToolLedger::new();
        let mut turns = 0;
        let mut format_retries = 0;

        progress.on_stage("Asking the model to plan the request");
        let mut response: LlmResponse = session
            .send_with_tools(&TakedownPromptTemplate::task(request), &tools)
            .await?;

        loop {
            let calls = response.tool_calls();

            if !calls.is_empty() {
                turns += 1;
                if turns > self.params.max_tool_turns {
                    warn!(
                        "Tool use loop exceeded max_tool_turns ({})",
                        self.params.max_tool_turns
                    );
                    return Err(TakedownError::Orchestration(format!(
                        "the model did not finish within {} tool turns",
                        self.params.max_tool_turns
                    )));
                }

                let results = self.run_tool_calls(&calls, &mut ledger, progress).await;
                response = session.send_tool_results(&results).await?;
                continue;
            }

            // No tool calls: the model is answering
            let text = response.text_content();
            if response.is_truncated() {
                warn!("Model answer hit the token cap and may be cut short");
            }

            if !ledger.ready_to_answer() {
                turns += 1;
                if turns > self.params.max_tool_turns {
                    return Err(TakedownError::Orchestration(
                        "the model answered without searching for a contact address".to_string(),
                    ));
                }
                info!("Model answered before searching; asking it to search first");
                progress.on_answer_rejected("answered before searching for a contact");
                response = session
                    .send_with_tools(&TakedownPromptTemplate::search_first_reminder(), &tools)
                    .await?;
                continue;
            }

            match TakedownDraft::parse(&text) {
                Ok(draft) if ledger.registrar().is_none() => {
                    // No lookup succeeded, so any registrar name is unverified
                    return Ok(draft.without_registrar());
                }
                Ok(draft) => return Ok(draft),
                Err(e) => {
                    format_retries += 1;
                    if format_retries > self.params.max_format_retries {
                        return Err(TakedownError::Orchestration(format!(
                            "the model's answer did not follow the draft format ({})",
                            e
                        )));
                    }
                    info!(error = %e, "Final answer malformed; requesting correction");
                    progress.on_answer_rejected(&e.to_string());
                    response = session
                        .send_with_tools(&TakedownPromptTemplate::format_correction(&e), &tools)
                        .await?;
                }
            }
        }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> TakedownPlanner for ModelPlanner<G, T> {
    fn name(&self) -> &'static str {
        "model"
    }

    fn requires_api_key(&self) -> bool {
        true
    }

    async fn plan(
        &self,
        request: &TakedownRequest,
        progress: &dyn TakedownProgressNotifier,
    ) -> Result<TakedownDraft, TakedownError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, TakedownPromptTemplate::system())
            .await?;

        debug!(model = %self.model, "Created planning session");
        self.drive(session.as_ref(), request, progress).await
    }
}
