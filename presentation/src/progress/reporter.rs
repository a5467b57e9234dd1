//! Progress reporting for takedown runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use takedown_application::TakedownProgressNotifier;
use takedown_domain::Capability;

/// Spinner with one line per tool call, drawn on stderr
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self::with_bar(spinner)
    }

    fn with_bar(spinner: ProgressBar) -> Self {
        spinner.set_style(Self::spinner_style());
        spinner.set_message("Starting...");
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop the spinner and remove it from the terminal
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    pub(crate) fn capability_label(capability: Capability) -> &'static str {
        match capability {
            Capability::ResolveRegistrar => "Registrar lookup",
            Capability::SearchWeb => "Web search",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TakedownProgressNotifier for ProgressReporter {
    fn on_stage(&self, stage: &str) {
        self.spinner.set_message(stage.to_string());
    }

    fn on_tool_call(&self, capability: Capability, argument: &str) {
        let label = Self::capability_label(capability);
        self.spinner.set_message(format!("{}: {}", label, argument));
    }

    fn on_tool_result(&self, capability: Capability, success: bool, detail: &str) {
        let mark = if success { "v".green() } else { "x".red() };
        self.spinner.println(format!(
            "  {} {} {}",
            mark,
            Self::capability_label(capability).bold(),
            detail.dimmed()
        ));
    }

    fn on_tool_refused(&self, tool_name: &str, reason: &str) {
        self.spinner.println(format!(
            "  {} {} {}",
            "!".yellow(),
            tool_name.bold(),
            reason.dimmed()
        ));
    }

    fn on_answer_rejected(&self, reason: &str) {
        self.spinner
            .println(format!("  {} {}", "!".yellow(), reason.dimmed()));
    }
}

/// Simple text-based progress (no fancy UI), for non-terminal stderr
pub struct SimpleProgress;

impl TakedownProgressNotifier for SimpleProgress {
    fn on_stage(&self, stage: &str) {
        eprintln!("{} {}", "->".cyan(), stage.bold());
    }

    fn on_tool_result(&self, capability: Capability, success: bool, detail: &str) {
        let mark = if success { "v" } else { "x" };
        eprintln!(
            "  {} {} {}",
            mark,
            ProgressReporter::capability_label(capability),
            detail
        );
    }

    fn on_tool_refused(&self, tool_name: &str, reason: &str) {
        eprintln!("  ! {} {}", tool_name, reason);
    }
}
