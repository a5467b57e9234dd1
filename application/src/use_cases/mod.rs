//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod composers;
pub mod draft_takedown;
pub mod model_planner;
pub mod planner;
pub mod scripted_planner;
pub(crate) mod tool_helpers;
