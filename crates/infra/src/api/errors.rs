//! API-specific error types
//!
//! Classifies backend failures by HTTP status so callers can pick a user
//! message without inspecting raw responses.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use travelgate_domain::TravelgateError;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401 and 403 answers
    Authentication,
    /// Other 4xx answers
    Client,
    /// 5xx answers
    Server,
    /// Connection failures and timeouts
    Network,
    /// Body could not be decoded into the expected shape
    Decode,
    /// Misconfigured client (bad base URL, unbuildable request)
    Config,
}

/// API operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Client error ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: StatusCode, url: &str, body: &str) -> Self {
        let code = status.as_u16();
        let message = if body.trim().is_empty() {
            format!("{url} answered {status}")
        } else {
            format!("{url} answered {status}: {}", body.trim())
        };

        match code {
            401 | 403 => Self::Auth { status: code, message },
            400..=499 => Self::Client { status: code, message },
            _ => Self::Server { status: code, message },
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth { .. } => ApiErrorCategory::Authentication,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Client { status, .. } | Self::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<TravelgateError> for ApiError {
    fn from(err: TravelgateError) -> Self {
        match err {
            TravelgateError::Network(msg) => Self::Network(msg),
            TravelgateError::Http { status, message } => match status {
                401 | 403 => Self::Auth { status, message },
                400..=499 => Self::Client { status, message },
                _ => Self::Server { status, message },
            },
            TravelgateError::Decode(msg) => Self::Decode(msg),
            other => Self::Config(other.to_string()),
        }
    }
}

impl From<ApiError> for TravelgateError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth { status, message }
            | ApiError::Client { status, message }
            | ApiError::Server { status, message } => TravelgateError::Http { status, message },
            ApiError::Network(msg) => TravelgateError::Network(msg),
            ApiError::Timeout(after) => {
                TravelgateError::Network(format!("request timed out after {after:?}"))
            }
            ApiError::Decode(msg) => TravelgateError::Decode(msg),
            ApiError::Config(msg) => TravelgateError::Config(msg),
        }
    }
}
