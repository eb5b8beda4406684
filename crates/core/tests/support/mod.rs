//! Shared test helpers for `travelgate-core` integration tests.
//!
//! In-memory backends stand in for the REST API so view and catalog
//! tests can focus on behaviour instead of transport.

#![allow(dead_code)]

pub mod backend;
pub mod records;

pub use backend::{Call, InMemoryBackend};
pub use records::{InvoiceLedger, RecordStore};
