//! Tool contracts offered to the planner.
//!
//! A [`ToolSpec`] is the catalogue the model sees: canonical names with
//! typed parameters, plus aliases the model sometimes invents
//! (`whois_lookup`, `web_search`) mapped back onto canonical names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One tool as advertised to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }
}

/// A named tool argument. Every capability argument is a string today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// JSON schema type name
    pub param_type: String,
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }
}

/// Tool catalogue with alias resolution.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
    aliases: HashMap<String, String>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn register_aliases(
        mut self,
        mappings: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        self.aliases
            .extend(mappings.into_iter().map(|(a, c)| (a.into(), c.into())));
        self
    }

    /// Canonical name for `name`. A registered tool name wins over an alias
    /// spelled the same way.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.tools.contains_key(name) {
            return Some(name);
        }
        self.aliases.get(name).map(String::as_str)
    }

    /// Definition for a canonical name or an alias.
    pub fn get_resolved(&self, name: &str) -> Option<&ToolDefinition> {
        self.resolve(name).and_then(|canonical| self.tools.get(canonical))
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Definitions ordered by name so request payloads are reproducible.
    pub fn sorted(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<_> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }
}

/// A tool request from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name as the model spelled it; may be an alias.
    pub tool_name: String,
    pub arguments: HashMap<String, serde_json::Value>,
    /// Provider call id, echoed back with the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_id: Option<String>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
            native_id: None,
        }
    }

    pub fn from_native(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            tool_name: name.into(),
            arguments,
            native_id: Some(id.into()),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Trimmed string argument; missing, non-string and blank values are errors.
    pub fn require_non_empty(&self, key: &str) -> Result<&str, String> {
        let value = self
            .get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))?
            .trim();
        if value.is_empty() {
            return Err(format!("Argument '{}' must not be empty", key));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ToolSpec {
        ToolSpec::new()
            .register(
                ToolDefinition::new("resolve_registrar", "Find the registrar")
                    .with_parameter(ToolParameter::new("domain", "Domain name", true)),
            )
            .register(ToolDefinition::new("search_web", "Search the web"))
            .register_aliases([("whois_lookup", "resolve_registrar"), ("web_search", "search_web")])
    }

    #[test]
    fn test_resolve_canonical_and_alias() {
        let spec = spec();
        assert_eq!(spec.resolve("search_web"), Some("search_web"));
        assert_eq!(spec.resolve("whois_lookup"), Some("resolve_registrar"));
        assert_eq!(spec.resolve("send_email"), None);
        assert_eq!(spec.get_resolved("web_search").unwrap().name, "search_web");
        assert!(spec.get("web_search").is_none());
    }

    #[test]
    fn test_canonical_name_beats_alias() {
        let spec = spec().register_aliases([("search_web", "resolve_registrar")]);
        assert_eq!(spec.resolve("search_web"), Some("search_web"));
    }

    #[test]
    fn test_sorted_by_name() {
        let spec = spec();
        let names: Vec<_> = spec.sorted().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["resolve_registrar", "search_web"]);
    }

    #[test]
    fn test_parameters_default_to_string() {
        let spec = spec();
        let tool = spec.get("resolve_registrar").unwrap();
        assert_eq!(tool.parameters[0].param_type, "string");
        assert!(tool.parameters[0].required);
    }

    #[test]
    fn test_require_non_empty() {
        let call = ToolCall::new("search_web")
            .with_arg("query", "  ")
            .with_arg("limit", 3);
        assert!(call.require_non_empty("query").is_err());
        assert!(call.require_non_empty("limit").is_err());
        assert!(call.require_non_empty("missing").is_err());

        let call = ToolCall::from_native(
            "call_1",
            "resolve_registrar",
            [("domain".to_string(), serde_json::json!(" example.com "))]
                .into_iter()
                .collect(),
        );
        assert_eq!(call.native_id.as_deref(), Some("call_1"));
        assert_eq!(call.require_non_empty("domain"), Ok("example.com"));
    }
}
