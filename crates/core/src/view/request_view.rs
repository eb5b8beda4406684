//! Request view
//!
//! Composes the sync, the current filter set and the approval service for
//! one screen. Filtering and facets are always computed from the latest
//! published snapshot.

use std::sync::Arc;

use parking_lot::Mutex;
use travelgate_domain::constants::messages;
use travelgate_domain::{ApprovalStep, RequestId, Result};
use tracing::{debug, instrument, warn};

use super::ViewOptions;
use crate::approval::ApprovalService;
use crate::entity::{find_by_id, WorkflowEntity};
use crate::filter::{apply_filters_with, derive_facets, Facets, FilterSet, Filterable};
use crate::notify::MessageBoard;
use crate::session::SessionHandle;
use crate::sync::{RequestSource, RequestSync, SyncOutcome};

/// State behind one validation screen.
pub struct RequestView<E: Filterable> {
    sync: Arc<RequestSync<E>>,
    approvals: ApprovalService<E>,
    board: Arc<MessageBoard>,
    filters: Mutex<FilterSet>,
    options: ViewOptions,
}

impl<E: Filterable> RequestView<E> {
    pub fn new(
        source: Arc<dyn RequestSource<E>>,
        session: SessionHandle,
        board: Arc<MessageBoard>,
        options: ViewOptions,
    ) -> Self {
        let sync = Arc::new(RequestSync::with_statuses(Arc::clone(&source), options.statuses.clone()));
        Self {
            sync,
            approvals: ApprovalService::new(source, session),
            board,
            filters: Mutex::new(FilterSet::cleared(options.default_status.as_ref())),
            options,
        }
    }

    /// Underlying sync, e.g. to share with a catalog or subscribe.
    pub fn sync(&self) -> Arc<RequestSync<E>> {
        Arc::clone(&self.sync)
    }

    pub fn board(&self) -> &MessageBoard {
        &self.board
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Re-fetch the collection.
    pub async fn refresh(&self) -> SyncOutcome {
        self.sync.load_all().await
    }

    pub fn filters(&self) -> FilterSet {
        self.filters.lock().clone()
    }

    pub fn set_filters(&self, filters: FilterSet) {
        *self.filters.lock() = filters;
    }

    /// Reset every predicate, keeping the view's default status.
    pub fn clear_filters(&self) -> FilterSet {
        let cleared = FilterSet::cleared(self.options.default_status.as_ref());
        *self.filters.lock() = cleared.clone();
        cleared
    }

    /// Requests passing the current filters, in collection order.
    pub fn filtered(&self) -> Vec<E> {
        let filters = self.filters();
        apply_filters_with(&self.sync.snapshot(), &filters, self.options.date_fields)
    }

    /// Facets over the whole collection, not just the filtered part.
    pub fn facets(&self) -> Facets {
        derive_facets(&self.sync.snapshot())
    }

    pub fn total_count(&self) -> usize {
        self.sync.snapshot().len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// First-step decision; requires `ROLE_OFFICER`.
    pub async fn validate_step1(&self, id: RequestId, approved: bool) -> Result<()> {
        self.decide(ApprovalStep::Step1, id, approved).await
    }

    /// Second-step decision; requires `ROLE_HEAD_MARKET`.
    pub async fn validate_step2(&self, id: RequestId, approved: bool) -> Result<()> {
        self.decide(ApprovalStep::Step2, id, approved).await
    }

    #[instrument(skip(self), fields(kind = E::KIND))]
    async fn decide(&self, step: ApprovalStep, id: RequestId, approved: bool) -> Result<()> {
        let current = find_by_id(&self.sync.snapshot(), id).map(|r| WorkflowEntity::status(r).clone());

        match self.approvals.decide(step, id, approved, current.as_ref()).await {
            Ok(_) => {
                self.board.post_success(messages::VALIDATED);
                self.resync().await;
                Ok(())
            }
            Err(err) => {
                self.board.post_error(err.user_message(messages::VALIDATION_FAILED));
                Err(err)
            }
        }
    }

    /// Delete a request from the validation side.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn delete(&self, id: RequestId) -> Result<()> {
        if let Err(err) = self.sync.source().delete(id).await {
            warn!(error = %err, "delete failed");
            self.board.post_error(err.user_message(messages::DELETE_FAILED));
            return Err(err);
        }
        self.board.post_success(messages::DELETED);
        self.resync().await;
        Ok(())
    }

    async fn resync(&self) {
        if self.options.resync_after_mutation {
            let outcome = self.sync.load_all().await;
            debug!(?outcome, "resynced after mutation");
        }
    }
}

