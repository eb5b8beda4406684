//! # Travelgate Core
//!
//! Workflow logic for travel and visa requests - no transport code.
//!
//! This crate contains:
//! - The two-step approval rules and role gating
//! - The filter/facet engine shared by every request kind
//! - The remote sync service that keeps a local snapshot current
//! - Session context, message board and the per-screen request view
//! - CRUD catalogs for requests, projects, missions and passports, and the
//!   invoice desk
//! - Port interfaces (traits) implemented by infrastructure
//!
//! ## Architecture Principles
//! - Depends on `travelgate-domain` and `travelgate-common` only
//! - All backend and identity access goes through traits
//! - Pure, testable business logic

pub mod approval;
pub mod crud;
pub mod entity;
pub mod filter;
pub mod notify;
pub mod session;
pub mod sync;
pub mod view;

// Re-export specific items to avoid ambiguity
pub use approval::{transition, ApprovalService};
pub use crud::{
    check_passport, mission_counts, unique_clients, InvoiceDesk, MissionFilter, NewVisaRequest,
    ProjectFilter, RequestCatalog, StartWindow, Submission, WriteAction, WriteGate,
};
pub use entity::{CatalogMessages, Record, WorkflowEntity};
pub use filter::{
    apply_filters, apply_filters_with, derive_facets, DateField, DateFields, Facets, FilterField,
    FilterSet, Filterable,
};
pub use notify::{MessageBoard, MessageKind};
pub use session::{IdentityProvider, SessionContext, SessionHandle, SessionService};
pub use sync::{
    InvoiceStore, MissionStats, RequestSource, RequestStore, RequestSync, Resync, SyncOutcome,
};
pub use view::{RequestView, ViewOptions};
