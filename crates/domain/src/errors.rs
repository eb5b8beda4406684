//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::messages;

/// Main error type for Travelgate
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TravelgateError {
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// Client-side role check failed; carries the user-facing message.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Approval step invoked out of lifecycle order; carries the
    /// user-facing message.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TravelgateError {
    /// HTTP status code carried by this error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Localized message shown to the user for a failed mutation.
    ///
    /// HTTP failures map through [`messages::for_http_status`]. Role and
    /// lifecycle refusals surface their own fixed message. Everything else
    /// falls back to `default_message`.
    pub fn user_message(&self, default_message: &str) -> String {
        match self {
            Self::Http { status, .. } => messages::for_http_status(*status, default_message),
            Self::Forbidden(message) | Self::InvalidTransition(message) => message.clone(),
            _ => default_message.to_string(),
        }
    }
}

/// Result type alias for Travelgate operations
pub type Result<T> = std::result::Result<T, TravelgateError>;
