//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file from the working directory when one exists
//! 2. Attempts to load from environment variables
//! 3. If required variables are missing, falls back to loading from file
//! 4. Probes multiple paths for config files (JSON or TOML)
//!
//! ## Environment Variables
//! Required:
//! - `TRAVELGATE_API_BASE_URL`: Backend base URL
//! - `TRAVELGATE_IDENTITY_URL`: Identity provider URL
//! - `TRAVELGATE_IDENTITY_REALM`: Identity realm
//! - `TRAVELGATE_IDENTITY_CLIENT_ID`: Client id registered at the provider
//!
//! Optional:
//! - `TRAVELGATE_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `TRAVELGATE_IDENTITY_LOGOUT_REDIRECT`: Page shown after logout
//! - `TRAVELGATE_ACCESS_TOKEN`: Pre-issued access token
//! - `TRAVELGATE_MESSAGE_CLEAR_MS`: Delay before messages clear
//! - `TRAVELGATE_RESYNC_AFTER_MUTATION`: Re-fetch after mutations (true/false)
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `travelgate.{json,toml}` in the
//! working directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use travelgate_domain::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MESSAGE_CLEAR_MS};
use travelgate_domain::{
    ApiConfig, Config, IdentityConfig, NotificationConfig, Result, SyncConfig, TravelgateError,
};

const FILE_STEMS: [&str; 2] = ["config", "travelgate"];
const EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `TravelgateError::Config` if neither the environment nor any
/// config file yields a complete configuration.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `TravelgateError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let api = ApiConfig {
        base_url: env_var("TRAVELGATE_API_BASE_URL")?,
        timeout_seconds: env_parse("TRAVELGATE_API_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
    };

    let identity = IdentityConfig {
        url: env_var("TRAVELGATE_IDENTITY_URL")?,
        realm: env_var("TRAVELGATE_IDENTITY_REALM")?,
        client_id: env_var("TRAVELGATE_IDENTITY_CLIENT_ID")?,
        logout_redirect_uri: env_optional("TRAVELGATE_IDENTITY_LOGOUT_REDIRECT"),
        access_token: env_optional("TRAVELGATE_ACCESS_TOKEN"),
    };

    Ok(Config {
        api,
        identity,
        notifications: NotificationConfig {
            clear_after_ms: env_parse("TRAVELGATE_MESSAGE_CLEAR_MS", DEFAULT_MESSAGE_CLEAR_MS)?,
        },
        sync: SyncConfig {
            resync_after_mutation: env_bool("TRAVELGATE_RESYNC_AFTER_MUTATION", true),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `TravelgateError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TravelgateError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TravelgateError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TravelgateError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, choosing the format from the file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TravelgateError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TravelgateError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TravelgateError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.extend([exe_dir.clone(), exe_dir.join(".."), exe_dir.join("../..")]);
    }

    probe_in(&roots)
}

fn probe_in(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| {
            FILE_STEMS.iter().flat_map(move |stem| {
                EXTENSIONS.iter().map(move |ext| root.join(format!("{stem}.{ext}")))
            })
        })
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    env_optional(key).ok_or_else(|| {
        TravelgateError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Set and non-blank, trimmed.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_optional(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| TravelgateError::Config(format!("Invalid value for {}: {}", key, e))),
        None => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
