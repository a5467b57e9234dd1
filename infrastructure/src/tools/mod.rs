//! Capability adapters exposed to the planners

pub mod registry;
pub mod schema;

pub use registry::{CapabilityRegistry, lookup_error_to_tool_error};
pub use schema::JsonSchemaToolConverter;
