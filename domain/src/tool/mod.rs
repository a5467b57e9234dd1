//! Tool domain module
//!
//! Defines how the planner reaches the outside world. The set of tools is
//! closed: exactly two [`Capability`] values exist, `resolve_registrar` and
//! `search_web`.
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌─────────────────┐
//! │ ToolSpec     │───▶│ ToolCall       │───▶│ CapabilityInput │
//! │ (registry)   │    │ (model output) │    │ (typed, closed) │
//! └──────┬───────┘    └────────────────┘    └────────┬────────┘
//!        │                                           ▼
//!        ├─ aliases: "whois_lookup" → "resolve_registrar"  CapabilityOutput
//!        └─ tools:   "search_web" → ToolDefinition
//! ```
//!
//! # Tool Name Alias System
//!
//! Models often ask for a tool by a near-miss name (`whois_lookup`,
//! `web_search`). [`ToolSpec::resolve`] maps those onto the canonical
//! capability before dispatch so no extra round-trip is needed.
//!
//! # Ordering
//!
//! [`ToolLedger`] records what has been attempted so far and refuses a web
//! search before any registrar lookup, and a final answer before any search.

pub mod capability;
pub mod entities;
pub mod ledger;
pub mod traits;
pub mod value_objects;

pub use capability::{Capability, CapabilityInput, CapabilityOutput, takedown_tool_spec};
pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use ledger::ToolLedger;
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::ToolError;
