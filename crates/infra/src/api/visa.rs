//! Visa request endpoints

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use travelgate_core::{NewVisaRequest, RequestSource, RequestStore};
use travelgate_domain::{
    ApprovalStep, RequestId, RequestStatus, Result, TravelgateError, VisaRequest,
};
use tracing::debug;

use super::client::ApiClient;

const VALIDATION: &str = "/api/validation-visas";
const REQUESTS: &str = "/api/visa-requests";

/// Backend adapter for visa requests.
#[derive(Clone)]
pub struct VisaApi {
    client: Arc<ApiClient>,
}

impl VisaApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestSource<VisaRequest> for VisaApi {
    async fn fetch_by_status(&self, status: &RequestStatus) -> Result<Vec<VisaRequest>> {
        let rows = self.client.get_list(&format!("{VALIDATION}/status/{status}")).await?;
        debug!(%status, count = rows.len(), "fetched visa requests");
        Ok(rows)
    }

    async fn validate(&self, step: ApprovalStep, id: RequestId, approved: bool) -> Result<()> {
        let path = format!("{VALIDATION}/{}/{id}", step.path_segment());
        self.client.put_query(&path, &[("approved", approved.to_string())]).await?;
        Ok(())
    }

    async fn delete(&self, id: RequestId) -> Result<()> {
        self.client.delete(&format!("{VALIDATION}/{id}")).await?;
        Ok(())
    }
}

#[async_trait]
impl RequestStore<VisaRequest, NewVisaRequest> for VisaApi {
    async fn list_all(&self) -> Result<Vec<VisaRequest>> {
        Ok(self.client.get_list(&format!("{REQUESTS}/all")).await?)
    }

    async fn get(&self, id: RequestId) -> Result<Option<VisaRequest>> {
        Ok(self.client.get_optional(&format!("{REQUESTS}/{id}")).await?)
    }

    async fn create(&self, submission: NewVisaRequest) -> Result<VisaRequest> {
        let passport_id = submission.passport_id.ok_or_else(|| {
            TravelgateError::InvalidInput("visa request has no passport".to_string())
        })?;
        let query = [("passportId", passport_id.to_string())];
        let payload = self
            .client
            .send_json(Method::POST, &format!("{REQUESTS}/create"), &query, &submission.request)
            .await?;
        Ok(payload.decode_or(submission.request)?)
    }

    async fn update(&self, id: RequestId, request: VisaRequest) -> Result<VisaRequest> {
        let path = format!("{REQUESTS}/update/{id}");
        let payload = self.client.send_json(Method::PUT, &path, &[], &request).await?;
        Ok(payload.decode_or(VisaRequest { id: Some(id), ..request })?)
    }

    async fn delete(&self, id: RequestId) -> Result<()> {
        self.client.delete(&format!("{REQUESTS}/delete/{id}")).await?;
        Ok(())
    }
}
