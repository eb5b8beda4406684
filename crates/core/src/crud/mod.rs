//! Create, read, update and delete on the submission side

pub mod gate;
pub mod invoice;
pub mod mission;
pub mod project;
pub mod service;
pub mod submission;

pub use gate::{GateMessages, WriteAction, WriteGate};
pub use invoice::InvoiceDesk;
pub use mission::{MissionFilter, StartWindow};
pub use project::{mission_counts, unique_clients, ProjectFilter};
pub use service::RequestCatalog;
pub use submission::{check_passport, NewVisaRequest, Submission};
