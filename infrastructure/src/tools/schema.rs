//! Tool definitions as JSON Schema.
//!
//! The output is provider-neutral (`name`, `description`, `input_schema`);
//! the OpenAI session rewraps it as a `function` tool.

use serde_json::{Map, Value, json};
use takedown_application::ports::tool_schema::ToolSchemaPort;
use takedown_domain::tool::entities::ToolDefinition;

/// Closed-object schemas: `additionalProperties` is always `false`, matching
/// the validator's rejection of unknown arguments.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let properties: Map<String, Value> = tool
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    json!({ "type": p.param_type, "description": p.description }),
                )
            })
            .collect();
        let required: Vec<&str> = tool
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            }
        })
    }
}
