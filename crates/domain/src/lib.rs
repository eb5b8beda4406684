//! # Travelgate Domain
//!
//! Business domain types for the travel and visa request workflow.
//!
//! This crate contains:
//! - Request entities (`TravelRequest`, `VisaRequest`) and their wire shape
//! - Reference records: projects, missions, passports and invoices
//! - The request lifecycle status and approval steps
//! - Identity roles recognized by the client
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (user-facing messages, default delays)
//!
//! ## Architecture
//! - No dependencies on other Travelgate crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
