//! Domain types and models

pub mod invoice;
pub mod passport;
pub mod project;
pub mod role;
pub mod status;
pub mod travel;
pub mod visa;

pub use invoice::Invoice;
pub use passport::Passport;
pub use project::{Mission, MissionPhase, Project};
pub use role::Role;
pub use status::{status_label, ApprovalStep, RequestStatus};
pub use travel::TravelRequest;
pub use visa::{TravelerType, VisaPriority, VisaRequest};

/// Request identifier assigned by the backend.
pub type RequestId = i64;
