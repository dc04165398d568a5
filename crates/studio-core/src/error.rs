//! Centralized error types for Content Studio.

use thiserror::Error;

use crate::messages;

/// Main error type for studio operations.
///
/// The `Display` output of every variant is what a page shows in its error
/// banner, so API errors render as the bare server-provided message.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("{}", messages::USER_ID_REQUIRED)]
    MissingUserId,

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid response from server: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for studio operations.
pub type StudioResult<T> = Result<T, StudioError>;

impl StudioError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Wrap a transport failure under an operation-specific message.
    pub fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// True for errors raised before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingUserId | Self::Validation(_))
    }
}
