//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API (can point at any OpenAI-compatible server).
    pub base_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve the API key: direct value first, then the configured env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "TAKEDOWN_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-direct"));
    }

    #[test]
    fn test_blank_key_is_none() {
        let config = FileOpenAiConfig {
            api_key: Some("  ".to_string()),
            api_key_env: "TAKEDOWN_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
