//! Type conversions between the OpenAI Chat Completions wire format and domain types
//!
//! Converts `/chat/completions` responses to domain `LlmResponse`, and domain
//! tool types to OpenAI request messages.

use serde_json::{Value, json};
use std::collections::HashMap;
use takedown_application::ports::llm_gateway::{GatewayError, ToolResultMessage};
use takedown_domain::{ContentBlock, LlmResponse, StopReason};
use tracing::warn;

// ─── OpenAI → Domain ─────────────────────────────────────────────

/// Convert an OpenAI `finish_reason` to domain StopReason.
pub fn convert_finish_reason(reason: &str) -> StopReason {
    match reason {
        "stop" => StopReason::EndTurn,
        "tool_calls" | "function_call" => StopReason::ToolUse,
        "length" => StopReason::MaxTokens,
        other => StopReason::Other(other.to_string()),
    }
}

/// Convert one entry of `message.tool_calls` to a ToolUse block.
///
/// `function.arguments` is a JSON string; unparseable arguments become an
/// empty map so argument validation reports them back to the model.
pub fn convert_tool_call(call: &Value) -> Option<ContentBlock> {
    let id = call.get("id")?.as_str()?;
    let function = call.get("function")?;
    let name = function.get("name")?.as_str()?;
    let raw = function
        .get("arguments")
        .and_then(Value::as_str)
        .unwrap_or("{}");

    let input = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map.into_iter().collect::<HashMap<String, Value>>(),
        _ => {
            warn!(tool = %name, arguments = %raw, "Tool call arguments are not a JSON object");
            HashMap::new()
        }
    };

    Some(ContentBlock::ToolUse {
        id: id.to_string(),
        name: name.to_string(),
        input,
    })
}

/// Convert a `/chat/completions` response body to a domain LlmResponse.
pub fn convert_completion(body: &Value) -> Result<LlmResponse, GatewayError> {
    let choice = body
        .get("choices")
        .and_then(|c| c.get(0))
        .ok_or_else(|| GatewayError::RequestFailed("No choices in completion response".into()))?;
    let message = choice
        .get("message")
        .ok_or_else(|| GatewayError::RequestFailed("No message in completion choice".into()))?;

    let mut content = Vec::new();
    if let Some(text) = message.get("content").and_then(Value::as_str)
        && !text.is_empty()
    {
        content.push(ContentBlock::Text(text.to_string()));
    }
    if let Some(calls) = message.get("tool_calls").and_then(Value::as_array) {
        content.extend(calls.iter().filter_map(convert_tool_call));
    }

    Ok(LlmResponse {
        content,
        stop_reason: choice
            .get("finish_reason")
            .and_then(Value::as_str)
            .map(convert_finish_reason),
        model: body.get("model").and_then(Value::as_str).map(str::to_string),
    })
}

/// Convert a non-success HTTP status and body into a GatewayError.
pub fn convert_http_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        401 | 403 => GatewayError::Unauthorized(message),
        404 => GatewayError::ModelNotAvailable(message),
        408 | 504 => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
    }
}

// ─── Domain → OpenAI ─────────────────────────────────────────────

/// Convert a provider-neutral tool schema (from ToolSchemaPort) to an OpenAI function tool.
pub fn convert_tool_schema(schema: &Value) -> Option<Value> {
    let name = schema.get("name")?.as_str()?;
    let description = schema
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let parameters = schema
        .get("input_schema")
        .cloned()
        .unwrap_or_else(|| json!({"type": "object", "properties": {}}));

    Some(json!({
        "type": "function",
        "function": {
            "name": name,
            "description": description,
            "parameters": parameters,
        }
    }))
}

/// Re-encode an assistant response for the conversation history.
pub fn assistant_message(response: &LlmResponse) -> Value {
    let text = response.text_content();
    let tool_calls: Vec<Value> = response
        .content
        .iter()
        .filter_map(ContentBlock::as_tool_use)
        .map(|(id, name, input)| {
            json!({
                "id": id,
                "type": "function",
                "function": {
                    "name": name,
                    "arguments": Value::Object(input.clone().into_iter().collect()).to_string(),
                }
            })
        })
        .collect();

    let content = if text.is_empty() {
        Value::Null
    } else {
        Value::String(text)
    };
    let mut message = json!({ "role": "assistant", "content": content });
    if !tool_calls.is_empty() {
        message["tool_calls"] = Value::Array(tool_calls);
    }
    message
}

/// Convert a domain ToolResultMessage to a `role: tool` message.
pub fn tool_result_message(result: &ToolResultMessage) -> Value {
    json!({
        "role": "tool",
        "tool_call_id": result.tool_use_id,
        "content": result.output,
    })
}
