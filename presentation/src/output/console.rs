//! Console output formatter for takedown drafts

use colored::Colorize;
use std::path::Path;
use takedown_application::{DraftTakedownOutput, TakedownError};

/// Prefix of the one-line banner shown for unexpected failures
pub const GENERIC_ERROR_PREFIX: &str = "An error occurred while processing your request:";

/// Formats drafts and errors for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a finished draft. The draft text itself is printed unmodified.
    pub fn format_draft(output: &DraftTakedownOutput) -> String {
        let mut out = String::new();
        out.push_str(&Self::header("Takedown Request Draft"));
        out.push_str("\n\n");
        out.push_str(&output.text);
        out.push('\n');
        out.push_str(&Self::footer());
        out
    }

    /// The user-facing line for a failed request.
    ///
    /// Input problems and the missing-contact case keep their own wording;
    /// everything else gets the generic prefix.
    pub fn error_message(err: &TakedownError) -> String {
        match err {
            TakedownError::InputValidation(_) | TakedownError::EmailNotFound { .. } => {
                err.to_string()
            }
            other => Self::generic_error(other),
        }
    }

    /// `An error occurred while processing your request: <detail>`
    pub fn generic_error(detail: &dyn std::fmt::Display) -> String {
        format!("{} {}", GENERIC_ERROR_PREFIX, detail)
    }

    /// Red one-line banner for stderr
    pub fn error_banner(message: &str) -> String {
        format!("{} {}", "error:".red().bold(), message.red())
    }

    pub fn saved_notice(path: &Path) -> String {
        format!("{} {}", "Draft saved to".green(), path.display())
    }

    pub fn incomplete_notice(path: &Path) -> String {
        format!(
            "{} {}",
            "Incomplete draft (no takedown contact) saved to".yellow(),
            path.display()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        "=".repeat(60).cyan().to_string()
    }
}
