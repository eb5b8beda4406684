//! Port interfaces for the remote request backend
//!
//! These traits define the boundary between the workflow logic and the
//! transport that talks to the backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use travelgate_domain::{ApprovalStep, Invoice, RequestId, RequestStatus, Result};

use crate::entity::{Record, WorkflowEntity};

/// Validation-side view of the backend: per-status listing and decisions.
#[async_trait]
pub trait RequestSource<E: WorkflowEntity>: Send + Sync {
    /// Requests currently in `status`.
    async fn fetch_by_status(&self, status: &RequestStatus) -> Result<Vec<E>>;

    /// Record an approval decision for `step`.
    async fn validate(&self, step: ApprovalStep, id: RequestId, approved: bool) -> Result<()>;

    /// Delete a request from the validation side.
    async fn delete(&self, id: RequestId) -> Result<()>;
}

/// Submission-side view of the backend, for any record kind.
///
/// `N` is what a creation needs; for most kinds it is the record itself.
#[async_trait]
pub trait RequestStore<E: Record, N = E>: Send + Sync
where
    N: Send + 'static,
{
    async fn list_all(&self) -> Result<Vec<E>>;

    /// `Ok(None)` when the backend knows no such request.
    async fn get(&self, id: RequestId) -> Result<Option<E>>;

    async fn create(&self, request: N) -> Result<E>;

    async fn update(&self, id: RequestId, request: E) -> Result<E>;

    async fn delete(&self, id: RequestId) -> Result<()>;
}

/// A snapshot that can be re-fetched after a mutation.
#[async_trait]
pub trait Resync: Send + Sync {
    async fn resync(&self);
}

/// Per-project mission totals.
#[async_trait]
pub trait MissionStats: Send + Sync {
    /// Project id to number of missions; projects without missions may be
    /// absent.
    async fn count_missions_by_project(&self) -> Result<BTreeMap<RequestId, i64>>;
}

/// Invoices generated from approved travel requests.
///
/// Invoices are never edited, so this is not a [`RequestStore`].
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Invoice>>;

    /// Generate the invoice of `travel_id` from the rates in `draft`.
    async fn generate(&self, travel_id: RequestId, draft: Invoice) -> Result<Invoice>;

    /// `Ok(None)` when the travel request has no invoice yet.
    async fn get_by_travel(&self, travel_id: RequestId) -> Result<Option<Invoice>>;

    async fn delete(&self, id: RequestId) -> Result<()>;
}
