//! REST adapter for the request backend
//!
//! [`ApiClient`] handles transport concerns (bearer token, status mapping,
//! payload decoding); [`TravelApi`] and [`VisaApi`] implement the core
//! `RequestSource`/`RequestStore` ports on top of it. Projects, missions and
//! passports go through [`RecordApi`], invoices through [`InvoiceApi`].

pub mod auth;
pub mod client;
pub mod errors;
pub mod invoice;
pub mod payload;
pub mod records;
pub mod travel;
pub mod visa;

pub use auth::{AccessTokenProvider, StaticToken};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use invoice::InvoiceApi;
pub use payload::Payload;
pub use records::{MissionApi, PassportApi, ProjectApi, RecordApi};
pub use travel::TravelApi;
pub use visa::VisaApi;
