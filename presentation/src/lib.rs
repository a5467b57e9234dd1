//! Presentation layer for takedown
//!
//! This crate contains CLI definitions, output formatters, draft export,
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, PlannerArg, ProtocolArg, ReasonArg};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::export::{ExportError, write_export};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
