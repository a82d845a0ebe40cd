//! Centralized error types for emotion analysis.

use thiserror::Error;

/// Why an analysis produced no scores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    #[error("Invalid input text")]
    InvalidInput,

    #[error("Upstream service returned status {0}")]
    UpstreamStatus(u16),

    #[error("Failed to reach upstream service: {0}")]
    Transport(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl AnalysisFailure {
    /// True for failures caused by the caller's input rather than the upstream.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }
}

/// Invalid classifier configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Endpoint must be an http(s) URL: {0}")]
    InvalidEndpoint(String),

    #[error("Model id must not be empty")]
    EmptyModelId,

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
