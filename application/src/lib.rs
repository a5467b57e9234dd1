//! Application layer for takedown
//!
//! This crate contains use cases, planners, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    contact_finder::ContactFinderPort,
    draft_composer::{ComposedEmail, DraftComposer},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage},
    progress::{NoProgress, TakedownProgressNotifier},
    registrar_lookup::RegistrarLookupPort,
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::composers::{LlmDraftComposer, TemplateDraftComposer};
pub use use_cases::draft_takedown::{
    DraftTakedownInput, DraftTakedownOutput, DraftTakedownUseCase, TakedownError,
};
pub use use_cases::model_planner::ModelPlanner;
pub use use_cases::planner::TakedownPlanner;
pub use use_cases::scripted_planner::ScriptedPlanner;
