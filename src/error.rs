//! Error types for simulation, configuration and export.

use thiserror::Error;

/// Root error type for all crate failures.
#[derive(Error, Debug)]
pub enum SimError {
    /// A parameter is non-finite, negative or otherwise out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Configuration file is structurally valid YAML but semantically wrong.
    #[error("config error: {0}")]
    Config(String),

    /// Two scenarios in one batch share a name.
    #[error("duplicate scenario name: {0}")]
    DuplicateScenario(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for errors raised by parameter validation.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type SimResult<T> = Result<T, SimError>;
