//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; string-valued choices are parsed into
//! domain types with the issues collected by [`FileConfig::validate`].

mod agent;
mod issue;
mod lookup;
mod models;
mod output;
mod providers;
mod search;

pub use agent::{ComposerKind, FileAgentConfig, PlannerKind};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use lookup::FileLookupConfig;
pub use models::FileModelConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use search::FileSearchConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat model settings
    pub model: FileModelConfig,
    /// Provider settings (API keys, base URLs)
    pub providers: FileProvidersConfig,
    /// Registrar lookup settings
    pub lookup: FileLookupConfig,
    /// Web search settings
    pub search: FileSearchConfig,
    /// Planner settings
    pub agent: FileAgentConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.parse_model().1);
        issues.extend(self.model.parse_temperature().1);
        issues.extend(self.lookup.validate());
        issues.extend(self.search.validate());
        issues.extend(self.agent.validate());
        issues
    }
}
