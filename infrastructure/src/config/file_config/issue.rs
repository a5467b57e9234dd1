//! Configuration issues reported by [`FileConfig::validate`](super::FileConfig::validate)

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work as written.
    Error,
    /// A fallback value will be used.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    EmptyValue {
        field: String,
    },
    OutOfRange {
        field: String,
    },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub(crate) fn invalid_enum(field: &str, value: &str, valid: &[&str], fallback: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidEnumValue {
                field: field.to_string(),
                value: value.to_string(),
                valid_values: valid.iter().map(|s| s.to_string()).collect(),
            },
            message: format!(
                "{}: unknown value '{}', falling back to '{}'",
                field, value, fallback
            ),
        }
    }

    pub(crate) fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
            },
            message: message.into(),
        }
    }

    pub(crate) fn empty(field: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::EmptyValue {
                field: field.to_string(),
            },
            message: format!("{} cannot be empty", field),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
