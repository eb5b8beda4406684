//! # Travelgate Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP client wrapper and the REST adapter for the request backend
//! - The Keycloak identity provider
//! - Configuration loading (environment, `.env`, JSON/TOML files)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `travelgate-core`
//! - Contains all "impure" code (network, files, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod identity;
pub mod observability;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, ApiClient, ApiError, InvoiceApi, MissionApi, PassportApi, ProjectApi,
    StaticToken, TravelApi, VisaApi,
};
pub use errors::InfraError;
pub use http::HttpClient;
pub use identity::KeycloakIdentity;
pub use observability::{init_tracing, LogFormat};
