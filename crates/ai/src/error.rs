//! AI composition error types.

use thiserror::Error;

use sentra_core::Error as CoreError;

#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// The generative endpoint is not configured.
    #[error("Missing API key for the generative endpoint")]
    MissingApiKey,

    /// Provider error (transport or API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Core error from sentra-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
