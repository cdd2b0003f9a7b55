// SPDX-License-Identifier: MIT

//! Typed error handling for screener-bridge

use thiserror::Error;

/// Top-level error type for screener-bridge
#[derive(Debug, Error)]
pub enum BridgeError {
    /// API errors from external services (ElevenLabs, etc.)
    #[error("API error from {provider}: {message}")]
    Api { provider: String, message: String },

    /// Configuration errors (missing env vars, invalid config)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// CSV parsing errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// HTTP request errors
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// URL parsing errors
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// Generic error wrapper for compatibility
    #[error("{0}")]
    Other(String),
}

impl BridgeError {
    /// Create an API error
    pub fn api(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<&str> for BridgeError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<String> for BridgeError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}
