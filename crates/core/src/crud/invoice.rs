//! Invoice desk - generate and manage invoices of approved travels

use std::sync::Arc;

use travelgate_domain::constants::messages;
use travelgate_domain::{Invoice, RequestId, RequestStatus, Result, TravelRequest, TravelgateError};
use tracing::{error, info, instrument};

use crate::notify::MessageBoard;
use crate::sync::{InvoiceStore, RequestSource};

/// Invoices can only be generated for approved travel requests, which are
/// read from the validation side.
pub struct InvoiceDesk {
    travels: Arc<dyn RequestSource<TravelRequest>>,
    store: Arc<dyn InvoiceStore>,
    board: Arc<MessageBoard>,
}

impl InvoiceDesk {
    pub fn new(
        travels: Arc<dyn RequestSource<TravelRequest>>,
        store: Arc<dyn InvoiceStore>,
        board: Arc<MessageBoard>,
    ) -> Self {
        Self { travels, store, board }
    }

    pub fn board(&self) -> &MessageBoard {
        &self.board
    }

    /// Travel requests an invoice can be generated for.
    pub async fn approved_travels(&self) -> Result<Vec<TravelRequest>> {
        self.travels
            .fetch_by_status(&RequestStatus::Approved)
            .await
            .inspect_err(|err| self.report(err, messages::APPROVED_TRAVELS_LOAD_FAILED))
    }

    pub async fn invoices(&self) -> Result<Vec<Invoice>> {
        self.store.list_all().await.inspect_err(|err| self.report(err, messages::INVOICE_LOAD_FAILED))
    }

    /// Invoice already issued for `travel_id`, if any.
    pub async fn invoice_for(&self, travel_id: RequestId) -> Result<Option<Invoice>> {
        self.store
            .get_by_travel(travel_id)
            .await
            .inspect_err(|err| self.report(err, messages::INVOICE_LOAD_FAILED))
    }

    /// Generate the invoice of the selected travel; nothing is sent until a
    /// travel is selected.
    #[instrument(skip(self, draft))]
    pub async fn generate(&self, travel_id: Option<RequestId>, draft: Invoice) -> Result<Invoice> {
        let Some(travel_id) = travel_id else {
            let err = TravelgateError::InvalidInput(messages::INVOICE_TRAVEL_REQUIRED.to_string());
            self.report(&err, messages::INVOICE_GENERATE_FAILED);
            return Err(err);
        };
        let invoice = self
            .store
            .generate(travel_id, draft)
            .await
            .inspect_err(|err| self.report(err, messages::INVOICE_GENERATE_FAILED))?;
        info!(id = ?invoice.id, "invoice generated");
        self.board.post_success(messages::INVOICE_GENERATED);
        Ok(invoice)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RequestId) -> Result<()> {
        self.store
            .delete(id)
            .await
            .inspect_err(|err| self.report(err, messages::INVOICE_DELETE_FAILED))?;
        info!("invoice deleted");
        self.board.post_success(messages::INVOICE_DELETED);
        Ok(())
    }

    fn report(&self, err: &TravelgateError, default_message: &str) {
        error!(error = %err, "invoice operation failed");
        let text = match err {
            TravelgateError::InvalidInput(message) => message.clone(),
            other => other.user_message(default_message),
        };
        self.board.post_error(text);
    }
}
