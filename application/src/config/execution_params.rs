//! Execution parameters: planning loop control.
//!
//! [`ExecutionParams`] groups the static budgets that bound the model-driven
//! planning loop in [`ModelPlanner`](crate::use_cases::model_planner::ModelPlanner).

use serde::{Deserialize, Serialize};

/// Planning loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum model turns that request tools (or are refused) before giving up.
    pub max_tool_turns: usize,
    /// Maximum correction prompts when the final answer is not in draft format.
    pub max_format_retries: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_tool_turns: 10,
            max_format_retries: 1,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }

    pub fn with_max_format_retries(mut self, max: usize) -> Self {
        self.max_format_retries = max;
        self
    }
}
