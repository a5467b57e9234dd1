//! HTTP transport for the Chat Completions endpoint

use super::types;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use takedown_application::ports::llm_gateway::GatewayError;

/// Posts a request body to `/chat/completions` and returns the response body.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(&self, body: &Value) -> Result<Value, GatewayError>;
}

/// [`ChatTransport`] over `reqwest` with bearer authentication.
pub struct ReqwestChatTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ReqwestChatTransport {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl ChatTransport for ReqwestChatTransport {
    async fn complete(&self, body: &Value) -> Result<Value, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(types::convert_http_error(status.as_u16(), &text));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Invalid completion body: {}", e)))
    }
}
