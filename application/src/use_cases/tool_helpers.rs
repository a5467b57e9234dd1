//! Shared helpers for the planners.

use crate::ports::progress::TakedownProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use takedown_domain::core::string::preview;
use takedown_domain::tool::entities::ToolCall;
use takedown_domain::{CapabilityInput, CapabilityOutput, ToolError, ToolLedger};
use tracing::{debug, warn};

/// Run one capability through the ledger.
///
/// Refuses out-of-order calls without invoking anything, otherwise invokes the
/// capability and records the outcome.
pub(crate) async fn run_capability<T: ToolExecutorPort + ?Sized>(
    tools: &T,
    ledger: &mut ToolLedger,
    input: &CapabilityInput,
    progress: &dyn TakedownProgressNotifier,
) -> Result<CapabilityOutput, ToolError> {
    let capability = input.capability();

    if let Err(e) = ledger.admit(input) {
        warn!(tool = %capability, "Refusing out-of-order tool call");
        progress.on_tool_refused(capability.name(), &e.message);
        return Err(e);
    }

    progress.on_tool_call(capability, input.summary());
    let outcome = tools.invoke(input).await;
    ledger.record(capability, outcome.as_ref());

    match &outcome {
        Ok(output) => {
            debug!(tool = %capability, "Tool succeeded");
            progress.on_tool_result(capability, true, &output_detail(output));
        }
        Err(e) => {
            debug!(tool = %capability, error = %e, "Tool failed");
            progress.on_tool_result(capability, false, &e.message);
        }
    }
    outcome
}

/// One-line summary of a capability output for progress display
fn output_detail(output: &CapabilityOutput) -> String {
    match output {
        CapabilityOutput::Registrar(record) => record
            .registrar_name
            .clone()
            .unwrap_or_else(|| "no registrar".to_string()),
        CapabilityOutput::Search(result) => format!("{} results", result.len()),
    }
}

/// Extract a short preview string from tool call arguments.
///
/// Looks for the capability keys (`domain`, `query`) first, then falls back
/// to the first string value found.
pub(crate) fn tool_args_preview(call: &ToolCall) -> String {
    for key in ["domain", "query"] {
        if let Some(serde_json::Value::String(s)) = call.arguments.get(key) {
            return preview(s, 50);
        }
    }
    call.arguments
        .values()
        .find_map(|v| v.as_str())
        .map(|s| preview(s, 50))
        .unwrap_or_default()
}
