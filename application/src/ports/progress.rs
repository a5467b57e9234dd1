//! Progress notification port
//!
//! Defines the interface for reporting progress while a takedown request is
//! being prepared.

use takedown_domain::Capability;

/// Callback for progress updates during a planning run
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default so tests only override what they observe.
pub trait TakedownProgressNotifier: Send + Sync {
    /// Called when the pipeline enters a new stage (e.g. "Looking up registrar")
    fn on_stage(&self, _stage: &str) {}

    /// Called before a capability is invoked
    fn on_tool_call(&self, _capability: Capability, _argument: &str) {}

    /// Called after a capability returns
    fn on_tool_result(&self, _capability: Capability, _success: bool, _detail: &str) {}

    /// Called when a tool call is refused before execution (unknown tool,
    /// bad arguments or out of order)
    fn on_tool_refused(&self, _tool_name: &str, _reason: &str) {}

    /// Called when the model's answer is sent back for another attempt
    fn on_answer_rejected(&self, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TakedownProgressNotifier for NoProgress {}
