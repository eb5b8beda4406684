//! Remote sync: fetch every status, merge, publish

pub mod ports;
pub mod service;

pub use ports::{InvoiceStore, MissionStats, RequestSource, RequestStore, Resync};
pub use service::{RequestSync, SyncOutcome};
