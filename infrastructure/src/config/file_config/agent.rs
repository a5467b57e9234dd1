//! Agent configuration from TOML (`[agent]` section)

use super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Which planner drives a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlannerKind {
    /// Hosted model with native tool calling
    #[default]
    Model,
    /// Fixed resolve → search → compose sequence
    Scripted,
}

impl std::str::FromStr for PlannerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "model" | "llm" => Ok(PlannerKind::Model),
            "scripted" | "script" | "rules" => Ok(PlannerKind::Scripted),
            other => Err(format!("unknown planner: {}", other)),
        }
    }
}

/// How the scripted planner writes subject and body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComposerKind {
    #[default]
    Template,
    Model,
}

impl std::str::FromStr for ComposerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(ComposerKind::Template),
            "model" | "llm" => Ok(ComposerKind::Model),
            other => Err(format!("unknown composer: {}", other)),
        }
    }
}

/// Raw agent configuration from TOML
///
/// # Example
///
/// ```toml
/// [agent]
/// planner = "model"          # "model" or "scripted"
/// composer = "template"      # scripted planner only: "template" or "model"
/// max_tool_turns = 10
/// max_format_retries = 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    pub planner: String,
    pub composer: String,
    /// Maximum model turns that request tools before the run fails
    pub max_tool_turns: usize,
    /// Correction prompts allowed when the answer is not in draft format
    pub max_format_retries: usize,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            planner: "model".to_string(),
            composer: "template".to_string(),
            max_tool_turns: 10,
            max_format_retries: 1,
        }
    }
}

impl FileAgentConfig {
    /// Parse planner string into PlannerKind, returning warnings on failure.
    pub fn parse_planner(&self) -> (PlannerKind, Vec<ConfigIssue>) {
        match self.planner.parse::<PlannerKind>() {
            Ok(kind) => (kind, vec![]),
            Err(_) => (
                PlannerKind::default(),
                vec![ConfigIssue::invalid_enum(
                    "agent.planner",
                    &self.planner,
                    &["model", "scripted"],
                    "model",
                )],
            ),
        }
    }

    /// Parse composer string into ComposerKind, returning warnings on failure.
    pub fn parse_composer(&self) -> (ComposerKind, Vec<ConfigIssue>) {
        match self.composer.parse::<ComposerKind>() {
            Ok(kind) => (kind, vec![]),
            Err(_) => (
                ComposerKind::default(),
                vec![ConfigIssue::invalid_enum(
                    "agent.composer",
                    &self.composer,
                    &["template", "model"],
                    "template",
                )],
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_planner().1;
        issues.extend(self.parse_composer().1);
        if self.max_tool_turns == 0 {
            issues.push(ConfigIssue::out_of_range(
                "agent.max_tool_turns",
                "agent.max_tool_turns is 0, the model planner cannot call any tool",
            ));
        }
        issues
    }
}
