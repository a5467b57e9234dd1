//! OpenAI chat session implementation
//!
//! Wraps the Chat Completions API to implement the `LlmSession` trait.
//! Manages conversation history locally since the API is stateless.

use super::transport::ChatTransport;
use super::types;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use takedown_application::ports::llm_gateway::{GatewayError, LlmSession, ToolResultMessage};
use takedown_domain::{LlmResponse, Message, Model};
use tokio::sync::Mutex;
use tracing::debug;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

pub struct OpenAiSession {
    transport: Arc<dyn ChatTransport>,
    model: Model,
    sampling: SamplingParams,
    /// Conversation history (stateless API requires full history each call)
    messages: Mutex<Vec<Value>>,
    /// OpenAI function tools (set when send_with_tools is first called)
    tools: Mutex<Vec<Value>>,
}

impl OpenAiSession {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        model: Model,
        system_prompt: &str,
        sampling: SamplingParams,
    ) -> Self {
        let mut history = Vec::new();
        if !system_prompt.is_empty() {
            history.push(json!(Message::system(system_prompt)));
        }
        Self {
            transport,
            model,
            sampling,
            messages: Mutex::new(history),
            tools: Mutex::new(Vec::new()),
        }
    }

    fn request_body(&self, messages: &[Value], tools: &[Value]) -> Value {
        let mut body = json!({
            "model": self.model.as_str(),
            "messages": messages,
            "temperature": self.sampling.temperature,
        });
        if let Some(max_tokens) = self.sampling.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if !tools.is_empty() {
            body["tools"] = json!(tools);
        }
        body
    }

    /// Append messages, call the API, and record the assistant reply.
    async fn exchange(&self, new_messages: Vec<Value>) -> Result<LlmResponse, GatewayError> {
        let tools = self.tools.lock().await.clone();
        let mut messages = self.messages.lock().await;
        let rollback = messages.len();
        messages.extend(new_messages);

        debug!(
            model = %self.model,
            messages = messages.len(),
            tools = tools.len(),
            "Calling chat completions"
        );

        let body = self.request_body(&messages, &tools);
        let response = match self.transport.complete(&body).await {
            Ok(raw) => types::convert_completion(&raw),
            Err(e) => Err(e),
        };

        match response {
            Ok(response) => {
                messages.push(types::assistant_message(&response));
                Ok(response)
            }
            Err(e) => {
                messages.truncate(rollback);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let response = self.exchange(vec![json!(Message::user(content))]).await?;
        Ok(response.text_content())
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[Value],
    ) -> Result<LlmResponse, GatewayError> {
        let converted: Vec<Value> = tools.iter().filter_map(types::convert_tool_schema).collect();
        if !converted.is_empty() {
            *self.tools.lock().await = converted;
        }
        self.exchange(vec![json!(Message::user(content))]).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        self.exchange(results.iter().map(types::tool_result_message).collect())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    /// Replays canned response bodies and records every request body.
    struct ScriptedTransport {
        replies: StdMutex<VecDeque<Result<Value, GatewayError>>>,
        requests: StdMutex<Vec<Value>>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<Result<Value, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: StdMutex::new(replies.into()),
                requests: StdMutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ChatTransport for ScriptedTransport {
        async fn complete(&self, body: &Value) -> Result<Value, GatewayError> {
            self.requests.lock().unwrap().push(body.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("no scripted reply".into())))
        }
    }

    fn tool_call_reply() -> Value {
        json!({"choices": [{"finish_reason": "tool_calls", "message": {
            "role": "assistant", "content": null,
            "tool_calls": [{"id": "call_1", "type": "function",
                "function": {"name": "resolve_registrar", "arguments": "{\"domain\":\"example.com\"}"}}]
        }}]})
    }

    fn text_reply(text: &str) -> Value {
        json!({"choices": [{"finish_reason": "stop", "message": {"role": "assistant", "content": text}}]})
    }

    fn schema() -> Value {
        json!({"name": "resolve_registrar", "description": "d", "input_schema": {"type": "object"}})
    }

    #[tokio::test]
    async fn test_tool_round_trip_history() {
        let transport = ScriptedTransport::new(vec![Ok(tool_call_reply()), Ok(text_reply("done"))]);
        let session = OpenAiSession::new(
            transport.clone(),
            Model::Gpt4o,
            "You are helpful.",
            SamplingParams::default(),
        );

        let response = session.send_with_tools("Find the registrar", &[schema()]).await.unwrap();
        assert!(response.has_tool_calls());

        let final_response = session
            .send_tool_results(&[ToolResultMessage {
                tool_use_id: "call_1".into(),
                tool_name: "resolve_registrar".into(),
                output: "Registrar: Example Registrar LLC".into(),
                is_error: false,
            }])
            .await
            .unwrap();
        assert_eq!(final_response.text_content(), "done");

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0]["model"], "gpt-4o");
        assert_eq!(requests[0]["temperature"], json!(0.7f32));
        assert_eq!(requests[0]["tools"][0]["function"]["name"], "resolve_registrar");

        let history = requests[1]["messages"].as_array().unwrap();
        let roles: Vec<&str> = history.iter().map(|m| m["role"].as_str().unwrap()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "tool"]);
        assert_eq!(history[3]["tool_call_id"], "call_1");
        assert_eq!(requests[1]["tools"][0]["type"], "function");
    }

    #[tokio::test]
    async fn test_failed_call_leaves_history_untouched() {
        let transport = ScriptedTransport::new(vec![
            Err(GatewayError::Timeout),
            Ok(text_reply("hello")),
        ]);
        let session = OpenAiSession::new(transport.clone(), Model::Gpt35Turbo, "", SamplingParams::default());

        assert!(session.send("first").await.is_err());
        assert_eq!(session.send("second").await.unwrap(), "hello");

        let requests = transport.requests.lock().unwrap();
        let history = requests[1]["messages"].as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["content"], "second");
        assert!(requests[1].get("tools").is_none());
    }

    #[tokio::test]
    async fn test_max_tokens_sent_when_configured() {
        let transport = ScriptedTransport::new(vec![Ok(text_reply("ok"))]);
        let session = OpenAiSession::new(
            transport.clone(),
            Model::Gpt35Turbo,
            "sys",
            SamplingParams {
                temperature: 0.2,
                max_tokens: Some(512),
            },
        );
        session.send("hi").await.unwrap();
        assert_eq!(transport.requests.lock().unwrap()[0]["max_tokens"], 512);
    }
}
