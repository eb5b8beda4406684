//! Invoice endpoints

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use travelgate_core::InvoiceStore;
use travelgate_domain::{Invoice, RequestId, Result};
use tracing::debug;

use super::client::ApiClient;

const INVOICES: &str = "/api/invoices";

/// Backend adapter for invoices.
#[derive(Clone)]
pub struct InvoiceApi {
    client: Arc<ApiClient>,
}

impl InvoiceApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvoiceStore for InvoiceApi {
    async fn list_all(&self) -> Result<Vec<Invoice>> {
        let rows = self.client.get_list(INVOICES).await?;
        debug!(count = rows.len(), "fetched invoices");
        Ok(rows)
    }

    async fn generate(&self, travel_id: RequestId, draft: Invoice) -> Result<Invoice> {
        let path = format!("{INVOICES}/generate/{travel_id}");
        let payload = self.client.send_json(Method::POST, &path, &[], &draft).await?;
        Ok(payload.decode()?)
    }

    async fn get_by_travel(&self, travel_id: RequestId) -> Result<Option<Invoice>> {
        Ok(self.client.get_optional(&format!("{INVOICES}/travel/{travel_id}")).await?)
    }

    async fn delete(&self, id: RequestId) -> Result<()> {
        self.client.delete(&format!("{INVOICES}/{id}")).await?;
        Ok(())
    }
}
