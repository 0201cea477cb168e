pub mod config;
pub mod llm;
pub mod request;
pub mod reveal;
pub mod ui;

use thiserror::Error;

/// Fixed message shown to the user for any failed submission.
pub const FAILED_MESSAGE: &str = "Failed to fetch response. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenAiError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<std::io::Error> for GenAiError {
    fn from(e: std::io::Error) -> Self {
        GenAiError::RuntimeError(e.to_string())
    }
}

impl From<reqwest::Error> for GenAiError {
    fn from(e: reqwest::Error) -> Self {
        GenAiError::NetworkFailure(e.to_string())
    }
}

impl From<serde_json::Error> for GenAiError {
    fn from(e: serde_json::Error) -> Self {
        GenAiError::MalformedResponse(e.to_string())
    }
}

impl GenAiError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The user can simply submit again
            GenAiError::NetworkFailure(_) => true,
            GenAiError::MalformedResponse(_) => true,
            // Requires a restart with different settings
            GenAiError::ConfigError(_) => false,
            GenAiError::ChannelError(_) => false,
            GenAiError::RuntimeError(_) => false,
        }
    }

    /// Get a user-friendly description
    ///
    /// Submission failures all collapse to the same message; the specific
    /// cause only goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            GenAiError::NetworkFailure(_)
            | GenAiError::MalformedResponse(_)
            | GenAiError::ChannelError(_) => FAILED_MESSAGE.to_string(),
            GenAiError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            GenAiError::RuntimeError(_) => {
                "Internal error. Please restart the application.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenAiError>;
