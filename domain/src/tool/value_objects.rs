//! Capability failure reported back to the planner.
//!
//! A failed capability never aborts the request. The model planner sends the
//! error text back as the tool result; the scripted planner records it in the
//! ledger and moves on.
//!
//! | Code | Raised when |
//! |------|-------------|
//! | `INVALID_ARGUMENT` | missing, blank or unknown arguments; bad domain |
//! | `NOT_FOUND` | unknown tool, no registrar record, unsupported TLD |
//! | `FAILED_PRECONDITION` | search before lookup |
//! | `EXECUTION_FAILED` | transport or protocol failure |
//! | `TIMEOUT` | WHOIS or RDAP deadline passed |

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub const INVALID_ARGUMENT: &'static str = "INVALID_ARGUMENT";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const FAILED_PRECONDITION: &'static str = "FAILED_PRECONDITION";
    pub const EXECUTION_FAILED: &'static str = "EXECUTION_FAILED";
    pub const TIMEOUT: &'static str = "TIMEOUT";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(Self::NOT_FOUND, format!("Not found: {}", what.into()))
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(Self::FAILED_PRECONDITION, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_ARGUMENT, message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(Self::EXECUTION_FAILED, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(Self::TIMEOUT, message)
    }

    /// Text handed to the model as the tool result.
    pub fn for_model(&self) -> String {
        format!("Error: {}", self)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}
