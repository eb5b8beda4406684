//! Access tokens for backend calls
//!
//! The client attaches `Authorization: Bearer <token>` only when a provider
//! yields a token. Nothing here refreshes tokens; an expired one surfaces as
//! a 401 from the backend.

use async_trait::async_trait;
use travelgate_core::SessionHandle;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with fixed tokens.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, `None` when signed out.
    async fn access_token(&self) -> Option<String>;
}

#[async_trait]
impl AccessTokenProvider for SessionHandle {
    async fn access_token(&self) -> Option<String> {
        self.token()
    }
}

/// A token fixed at construction, typically from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Provider that never yields a token.
    pub fn none() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for StaticToken {
    fn from(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.trim().is_empty()))
    }
}

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}
