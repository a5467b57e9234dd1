//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Directory the draft file is written to (default: current directory)
    pub directory: Option<String>,
    /// Write `{domain}_takedown_request.txt` after a successful run
    pub save: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            directory: None,
            save: true,
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_output_deserialize() {
        let toml_str = r#"
[output]
color = false
directory = "drafts"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.output.directory.as_deref(), Some("drafts"));
        assert!(config.output.save);
    }
}
