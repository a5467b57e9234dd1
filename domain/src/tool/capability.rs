//! The closed capability set offered to planners

use super::entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
use super::traits::{DefaultToolValidator, ToolValidator};
use super::value_objects::ToolError;
use crate::registrar::RegistrarRecord;
use crate::request::LookupProtocol;
use crate::search::SearchResult;

/// One of the two things a planner can do besides answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ResolveRegistrar,
    SearchWeb,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::ResolveRegistrar, Capability::SearchWeb];

    /// Canonical tool name
    pub fn name(&self) -> &'static str {
        match self {
            Capability::ResolveRegistrar => "resolve_registrar",
            Capability::SearchWeb => "search_web",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Tool definition advertised to the model
    pub fn definition(&self, protocol: LookupProtocol) -> ToolDefinition {
        match self {
            Capability::ResolveRegistrar => ToolDefinition::new(
                self.name(),
                format!(
                    "Find the registrar of a domain name using a {} lookup. \
                     Returns the registrar name and, when the registry publishes one, \
                     the registrar's abuse contact email.",
                    protocol.display_name()
                ),
            )
            .with_parameter(ToolParameter::new(
                "domain",
                "Domain name to look up, e.g. example.com",
                true,
            )),
            Capability::SearchWeb => ToolDefinition::new(
                self.name(),
                "Search the web and return result titles, URLs and snippets. \
                 Use it to find a registrar's abuse or takedown contact email.",
            )
            .with_parameter(ToolParameter::new(
                "query",
                "Search query, e.g. \"Example Registrar abuse takedown contact email\"",
                true,
            )),
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tool spec for a takedown run: both capabilities plus the names models
/// commonly use for them.
pub fn takedown_tool_spec(protocol: LookupProtocol) -> ToolSpec {
    let registrar = Capability::ResolveRegistrar.name();
    let search = Capability::SearchWeb.name();

    Capability::ALL
        .into_iter()
        .fold(ToolSpec::new(), |spec, c| spec.register(c.definition(protocol)))
        .register_aliases([
            (LookupProtocol::Whois.tool_alias(), registrar),
            (LookupProtocol::Rdap.tool_alias(), registrar),
            ("whois_lookup", registrar),
            ("whois", registrar),
            ("rdap", registrar),
            ("Search", search),
            ("search", search),
            ("web_search", search),
        ])
}

/// Typed, validated arguments for a capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityInput {
    ResolveRegistrar { domain: String },
    SearchWeb { query: String },
}

impl CapabilityInput {
    /// Resolve a raw model tool call into a typed input.
    ///
    /// Unknown tool names yield `NOT_FOUND`; missing or extra arguments yield
    /// `INVALID_ARGUMENT`.
    pub fn from_call(call: &ToolCall, spec: &ToolSpec) -> Result<Self, ToolError> {
        let definition = spec.get_resolved(&call.tool_name).ok_or_else(|| {
            let known: Vec<_> = Capability::ALL.iter().map(|c| c.name()).collect();
            ToolError::not_found(format!("tool '{}'", call.tool_name))
                .with_details(format!("available tools: {}", known.join(", ")))
        })?;

        DefaultToolValidator
            .validate(call, definition)
            .map_err(ToolError::invalid_argument)?;

        match Capability::from_name(&definition.name) {
            Some(Capability::ResolveRegistrar) => Ok(CapabilityInput::ResolveRegistrar {
                domain: call
                    .require_non_empty("domain")
                    .map_err(ToolError::invalid_argument)?
                    .to_string(),
            }),
            Some(Capability::SearchWeb) => Ok(CapabilityInput::SearchWeb {
                query: call
                    .require_non_empty("query")
                    .map_err(ToolError::invalid_argument)?
                    .to_string(),
            }),
            None => Err(ToolError::not_found(format!("tool '{}'", definition.name))),
        }
    }

    pub fn capability(&self) -> Capability {
        match self {
            CapabilityInput::ResolveRegistrar { .. } => Capability::ResolveRegistrar,
            CapabilityInput::SearchWeb { .. } => Capability::SearchWeb,
        }
    }

    /// Short human-readable argument summary for progress output
    pub fn summary(&self) -> &str {
        match self {
            CapabilityInput::ResolveRegistrar { domain } => domain,
            CapabilityInput::SearchWeb { query } => query,
        }
    }
}

/// Successful capability output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityOutput {
    Registrar(RegistrarRecord),
    Search(SearchResult),
}

impl CapabilityOutput {
    pub fn render(&self) -> String {
        match self {
            CapabilityOutput::Registrar(record) => record.render(),
            CapabilityOutput::Search(result) => result.render(),
        }
    }
}
