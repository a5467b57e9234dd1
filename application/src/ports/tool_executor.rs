//! Tool Executor port
//!
//! Defines the interface for invoking the closed capability set.

use async_trait::async_trait;
use takedown_domain::tool::{
    CapabilityInput, CapabilityOutput,
    entities::{ToolCall, ToolSpec},
    value_objects::ToolError,
};

/// Port for capability execution
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools (with aliases)
    fn tool_spec(&self) -> &ToolSpec;

    /// Get names of all available tools
    fn available_tools(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tool_spec().names().collect();
        names.sort_unstable();
        names
    }

    /// Turn a raw model tool call into a typed capability input
    fn resolve_call(&self, call: &ToolCall) -> Result<CapabilityInput, ToolError> {
        CapabilityInput::from_call(call, self.tool_spec())
    }

    /// Invoke a capability
    async fn invoke(&self, input: &CapabilityInput) -> Result<CapabilityOutput, ToolError>;
}
