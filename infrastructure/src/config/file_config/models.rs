//! Model configuration from TOML (`[model]` section)

use super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use takedown_domain::Model;

/// Raw model configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gpt-4o"          # "gpt-3.5-turbo", "gpt-4o", or any custom name
/// temperature = 0.7
/// max_tokens = 1024
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Chat model used for planning and composing
    pub name: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Optional response token cap
    pub max_tokens: Option<u32>,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

impl FileModelConfig {
    /// Parse the model name, reporting empty names.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        if self.name.trim().is_empty() {
            return (Model::default(), vec![ConfigIssue::empty("model.name")]);
        }
        (Model::from(self.name.trim()), vec![])
    }

    /// Temperature clamped to the API's accepted range, with a warning if clamped.
    pub fn parse_temperature(&self) -> (f32, Vec<ConfigIssue>) {
        if (0.0..=2.0).contains(&self.temperature) {
            (self.temperature, vec![])
        } else {
            let clamped = self.temperature.clamp(0.0, 2.0);
            (
                clamped,
                vec![ConfigIssue::out_of_range(
                    "model.temperature",
                    format!(
                        "model.temperature: {} is outside 0.0..=2.0, using {}",
                        self.temperature, clamped
                    ),
                )],
            )
        }
    }
}
