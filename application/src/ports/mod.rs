//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod contact_finder;
pub mod draft_composer;
pub mod llm_gateway;
pub mod progress;
pub mod registrar_lookup;
pub mod tool_executor;
pub mod tool_schema;
