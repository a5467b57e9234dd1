//! Structured model replies.
//!
//! A reply from a tool-calling model is a list of blocks: prose, requests
//! to run a capability, or both. Provider adapters normalize their wire
//! format into [`LlmResponse`] so the planner never sees provider JSON.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One block of a model reply.
#[derive(Debug, Clone)]
pub enum ContentBlock {
    Text(String),
    /// Request to run a capability. `id` is assigned by the provider and must
    /// be echoed back with the result.
    ToolUse {
        id: String,
        name: String,
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            ContentBlock::ToolUse { .. } => None,
        }
    }

    /// `(id, name, input)` of a tool request.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            ContentBlock::Text(_) => None,
        }
    }
}

/// Why the model stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    ToolUse,
    /// Output hit the token cap; text may be cut mid-line.
    MaxTokens,
    Other(String),
}

/// A model reply, possibly carrying tool requests.
///
/// ```
/// use takedown_domain::session::response::{ContentBlock, LlmResponse, StopReason};
///
/// let reply = LlmResponse {
///     content: vec![ContentBlock::ToolUse {
///         id: "call_1".to_string(),
///         name: "resolve_registrar".to_string(),
///         input: [("domain".to_string(), serde_json::json!("example.com"))]
///             .into_iter()
///             .collect(),
///     }],
///     stop_reason: Some(StopReason::ToolUse),
///     model: None,
/// };
/// assert_eq!(reply.tool_calls()[0].get_string("domain"), Some("example.com"));
/// ```
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    /// Model id echoed by the provider, if any.
    pub model: Option<String>,
}

impl LlmResponse {
    /// A plain prose reply that ended normally.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// All prose blocks joined in order.
    pub fn text_content(&self) -> String {
        self.content.iter().filter_map(ContentBlock::as_text).collect()
    }

    /// Tool requests, in the order the model issued them.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(ContentBlock::as_tool_use)
            .map(|(id, name, input)| ToolCall::from_native(id, name, input.clone()))
            .collect()
    }

    pub fn has_tool_calls(&self) -> bool {
        self.content.iter().any(|b| b.as_tool_use().is_some())
    }

    /// True when the provider cut the reply at the token cap.
    pub fn is_truncated(&self) -> bool {
        self.stop_reason == Some(StopReason::MaxTokens)
    }
}
