//! Web search configuration from TOML (`[search]` section)

use super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Raw search configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// DuckDuckGo HTML endpoint
    pub endpoint: String,
    /// Maximum snippets returned per query
    pub max_results: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://html.duckduckgo.com/html/".to_string(),
            max_results: 8,
            timeout_secs: 15,
            user_agent: concat!("takedown/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FileSearchConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_results == 0 {
            issues.push(ConfigIssue::out_of_range(
                "search.max_results",
                "search.max_results is 0, every search will come back empty",
            ));
        }
        if self.endpoint.trim().is_empty() {
            issues.push(ConfigIssue::empty("search.endpoint"));
        }
        issues
    }
}
