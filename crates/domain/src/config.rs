//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MESSAGE_CLEAR_MS};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub identity: IdentityConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Backend REST API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash (e.g. `http://localhost:8081`).
    pub base_url: String,
    /// Per-request timeout; requests are sent once, never retried.
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,
}

/// Identity provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub url: String,
    pub realm: String,
    pub client_id: String,
    /// Where the provider sends the user back after logout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_redirect_uri: Option<String>,
    /// Pre-issued access token (service accounts, tests).
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

/// User-visible message configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Delay before a success/error message is cleared.
    pub clear_after_ms: u64,
}

/// Remote sync configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Re-fetch the full collection after each mutation.
    pub resync_after_mutation: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            realm: "stage-realm".to_string(),
            client_id: "stage-client".to_string(),
            logout_redirect_uri: Some("http://localhost:4200".to_string()),
            access_token: None,
        }
    }
}

impl IdentityConfig {
    /// Account management page of the realm.
    pub fn account_url(&self) -> String {
        format!("{}/realms/{}/account", self.url.trim_end_matches('/'), self.realm)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { clear_after_ms: DEFAULT_MESSAGE_CLEAR_MS }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { resync_after_mutation: true }
    }
}
