//! Record catalog - CRUD with user feedback and resync

use std::sync::Arc;

use travelgate_domain::{RequestId, Result, TravelgateError};
use tracing::{error, info, instrument, warn};

use super::gate::{WriteAction, WriteGate};
use super::Submission;
use crate::entity::Record;
use crate::notify::MessageBoard;
use crate::sync::{RequestStore, Resync};

/// CRUD over one record kind.
///
/// Every successful mutation posts a confirmation and, when a sync is
/// attached, re-fetches the validation-side collection. A [`WriteGate`]
/// refuses writes before anything is sent.
pub struct RequestCatalog<E: Record, N: Submission = E> {
    store: Arc<dyn RequestStore<E, N>>,
    board: Arc<MessageBoard>,
    sync: Option<Arc<dyn Resync>>,
    gate: Option<WriteGate>,
}

impl<E: Record, N: Submission> RequestCatalog<E, N> {
    pub fn new(store: Arc<dyn RequestStore<E, N>>, board: Arc<MessageBoard>) -> Self {
        Self { store, board, sync: None, gate: None }
    }

    /// Resync `sync` after every successful mutation.
    pub fn with_sync(mut self, sync: Arc<dyn Resync>) -> Self {
        self.sync = Some(sync);
        self
    }

    /// Refuse create, update and delete unless `gate` allows them.
    pub fn with_gate(mut self, gate: WriteGate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn board(&self) -> &MessageBoard {
        &self.board
    }

    /// Check before opening a record for editing; posts the refusal.
    pub fn authorize_edit(&self) -> Result<()> {
        self.authorize(WriteAction::Edit)
    }

    pub async fn list_all(&self) -> Result<Vec<E>> {
        self.store.list_all().await.inspect_err(|err| self.report(err, E::MESSAGES.load_failed))
    }

    pub async fn get(&self, id: RequestId) -> Result<E> {
        match self.store.get(id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(TravelgateError::NotFound(format!("{} {id}", E::KIND))),
            Err(err) => {
                self.report(&err, E::MESSAGES.load_failed);
                Err(err)
            }
        }
    }

    #[instrument(skip_all, fields(kind = E::KIND))]
    pub async fn create(&self, request: N) -> Result<E> {
        self.authorize(WriteAction::Save)?;
        let messages = E::MESSAGES;
        let prepared =
            request.prepare().inspect_err(|err| self.report(err, messages.create_failed))?;
        let created = self
            .store
            .create(prepared)
            .await
            .inspect_err(|err| self.report(err, messages.create_failed))?;
        info!(id = ?created.id(), "record created");
        self.after_mutation(messages.created).await;
        Ok(created)
    }

    #[instrument(skip(self, record), fields(kind = E::KIND))]
    pub async fn update(&self, id: RequestId, record: E) -> Result<E> {
        self.authorize(WriteAction::Save)?;
        let updated = self
            .store
            .update(id, record.for_update())
            .await
            .inspect_err(|err| self.report(err, E::MESSAGES.update_failed))?;
        info!("record updated");
        self.after_mutation(E::MESSAGES.updated).await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn delete(&self, id: RequestId) -> Result<()> {
        self.authorize(WriteAction::Delete)?;
        self.store
            .delete(id)
            .await
            .inspect_err(|err| self.report(err, E::MESSAGES.delete_failed))?;
        info!("record deleted");
        self.after_mutation(E::MESSAGES.deleted).await;
        Ok(())
    }

    fn authorize(&self, action: WriteAction) -> Result<()> {
        let Some(gate) = &self.gate else { return Ok(()) };
        gate.authorize(action).inspect_err(|err| {
            warn!(kind = E::KIND, ?action, required = %gate.role(), "write refused");
            self.board.post_error(err.user_message(""));
        })
    }

    async fn after_mutation(&self, confirmation: &str) {
        self.board.post_success(confirmation);
        if let Some(sync) = &self.sync {
            sync.resync().await;
        }
    }

    fn report(&self, err: &TravelgateError, default_message: &str) {
        error!(kind = E::KIND, error = %err, "catalog operation failed");
        let text = match err {
            TravelgateError::InvalidInput(message) => message.clone(),
            other => other.user_message(default_message),
        };
        self.board.post_error(text);
    }
}
