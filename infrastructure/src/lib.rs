//! Infrastructure layer for takedown
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: WHOIS/RDAP lookup, DuckDuckGo search,
//! the OpenAI chat provider, and configuration file loading.

pub mod config;
pub mod lookup;
pub mod providers;
pub mod search;
pub mod tools;

// Re-export commonly used types
pub use config::{ComposerKind, ConfigIssue, ConfigLoader, FileConfig, PlannerKind, Severity};
pub use lookup::{LookupStrategy, RdapResolver, WhoisResolver};
pub use providers::OpenAiGateway;
pub use search::DuckDuckGoSearch;
pub use tools::{CapabilityRegistry, JsonSchemaToolConverter};
