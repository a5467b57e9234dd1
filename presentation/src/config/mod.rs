//! Presentation-level configuration
//!
//! Configuration for output formatting and draft export.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show the spinner and tool progress lines
    pub show_progress: bool,
    /// Directory the draft file is written to (None: current directory)
    pub directory: Option<PathBuf>,
    /// Write the draft after a successful run
    pub save: bool,
    /// Also write drafts that have no takedown contact address
    pub save_incomplete: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
            directory: None,
            save: true,
            save_incomplete: false,
        }
    }
}

impl OutputConfig {
    /// Directory to export into
    pub fn export_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Whether a draft without a contact address is written; never when
    /// saving is off.
    pub fn exports_incomplete(&self) -> bool {
        self.save && self.save_incomplete
    }
}
