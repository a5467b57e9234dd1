//! OpenAI-compatible gateway
//!
//! Creates [`OpenAiSession`]s that share one HTTP transport. Works with any
//! server exposing `/chat/completions` with function tools.

use super::session::{OpenAiSession, SamplingParams};
use super::transport::{ChatTransport, ReqwestChatTransport};
use crate::config::{FileModelConfig, FileOpenAiConfig};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use takedown_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use takedown_domain::Model;
use tracing::info;

pub struct OpenAiGateway {
    transport: Arc<dyn ChatTransport>,
    sampling: SamplingParams,
}

impl OpenAiGateway {
    pub fn new(transport: Arc<dyn ChatTransport>, sampling: SamplingParams) -> Self {
        Self {
            transport,
            sampling,
        }
    }

    /// Build a gateway from the `[providers.openai]` and `[model]` sections.
    ///
    /// The key is not checked here; requests without one fail with
    /// `Unauthorized` from the server.
    pub fn from_config(
        provider: &FileOpenAiConfig,
        model: &FileModelConfig,
        api_key: &str,
    ) -> Result<Self, GatewayError> {
        let transport = ReqwestChatTransport::new(
            &provider.base_url,
            api_key,
            Duration::from_secs(provider.timeout_secs),
        )?;
        info!(base_url = %provider.base_url, "OpenAI gateway initialized");
        Ok(Self::new(
            Arc::new(transport),
            SamplingParams {
                temperature: model.parse_temperature().0,
                max_tokens: model.max_tokens,
            },
        ))
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession::new(
            self.transport.clone(),
            model.clone(),
            system_prompt,
            self.sampling,
        )))
    }
}
