//! Argument checking for tool calls.

use super::entities::{ToolCall, ToolDefinition};

/// Checks a call's arguments against a definition. Pure; no I/O.
pub trait ToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Requires every required parameter and rejects any argument the
/// definition does not name, so a misspelled key reaches the model as an
/// error instead of being silently dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        if let Some(missing) = definition
            .parameters
            .iter()
            .find(|p| p.required && !call.arguments.contains_key(&p.name))
        {
            return Err(format!(
                "Missing required parameter '{}' for tool '{}'",
                missing.name, definition.name
            ));
        }

        let mut unknown: Vec<&str> = call
            .arguments
            .keys()
            .map(String::as_str)
            .filter(|key| !definition.parameters.iter().any(|p| p.name == *key))
            .collect();
        if unknown.is_empty() {
            return Ok(());
        }
        unknown.sort_unstable();
        Err(format!(
            "Unknown parameter '{}' for tool '{}'",
            unknown.join("', '"),
            definition.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;

    fn search_web() -> ToolDefinition {
        ToolDefinition::new("search_web", "Search the web")
            .with_parameter(ToolParameter::new("query", "Search query", true))
    }

    #[test]
    fn test_missing_required() {
        let err = DefaultToolValidator
            .validate(&ToolCall::new("search_web"), &search_web())
            .unwrap_err();
        assert_eq!(err, "Missing required parameter 'query' for tool 'search_web'");
    }

    #[test]
    fn test_unknown_parameters_are_listed() {
        let call = ToolCall::new("search_web")
            .with_arg("query", "abuse contact")
            .with_arg("engine", "bing")
            .with_arg("limit", 3);
        let err = DefaultToolValidator.validate(&call, &search_web()).unwrap_err();
        assert_eq!(err, "Unknown parameter 'engine', 'limit' for tool 'search_web'");
    }

    #[test]
    fn test_valid_call() {
        let call = ToolCall::new("search_web").with_arg("query", "Example Registrar abuse email");
        assert!(DefaultToolValidator.validate(&call, &search_web()).is_ok());
    }
}
