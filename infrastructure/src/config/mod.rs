//! Configuration file loading for takedown
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `TAKEDOWN_*` environment variables (`TAKEDOWN_LOOKUP__PROTOCOL=rdap`)
//! 3. Project root: `./takedown.toml` or `./.takedown.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/takedown/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ComposerKind, ConfigIssue, ConfigIssueCode, FileAgentConfig, FileConfig, FileLookupConfig,
    FileModelConfig, FileOpenAiConfig, FileOutputConfig, FileProvidersConfig, FileSearchConfig,
    PlannerKind, Severity,
};
pub use loader::ConfigLoader;
