//! Domain layer for takedown
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Request**: a validated domain, a reason and a lookup protocol
//! - **Registrar record**: who registered the domain, found over WHOIS or RDAP
//! - **Capabilities**: the closed tool set (`resolve_registrar`, `search_web`)
//!   a planner may call
//! - **Draft**: the four-line takedown email contract and its sentinel gate

pub mod core;
pub mod draft;
pub mod prompt;
pub mod registrar;
pub mod request;
pub mod search;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use draft::{
    DraftParseError, NOT_FOUND, NOT_FOUND_SENTINEL, TakedownDraft, contains_not_found_sentinel,
    export_filename, is_safe_export_name,
};
pub use prompt::{DraftFacts, TakedownPromptTemplate};
pub use registrar::{LookupError, RegistrarRecord};
pub use request::{DomainName, LookupProtocol, TakedownReason, TakedownRequest, TakedownRequestInput};
pub use search::{SearchResult, Snippet, extract_emails};
pub use session::{
    entities::{Message, Role},
    response::{ContentBlock, LlmResponse, StopReason},
};
pub use tool::{
    Capability, CapabilityInput, CapabilityOutput, ToolLedger, takedown_tool_spec,
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::ToolError,
};
