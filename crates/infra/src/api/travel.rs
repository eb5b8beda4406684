//! Travel request endpoints

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use travelgate_core::{RequestSource, RequestStore};
use travelgate_domain::{ApprovalStep, RequestId, RequestStatus, Result, TravelRequest};
use tracing::debug;

use super::client::ApiClient;

const VALIDATION: &str = "/api/validation-travels";
const REQUESTS: &str = "/api/travel-requests";

/// Backend adapter for travel requests.
#[derive(Clone)]
pub struct TravelApi {
    client: Arc<ApiClient>,
}

impl TravelApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestSource<TravelRequest> for TravelApi {
    async fn fetch_by_status(&self, status: &RequestStatus) -> Result<Vec<TravelRequest>> {
        let rows = self.client.get_list(&format!("{VALIDATION}/status/{status}")).await?;
        debug!(%status, count = rows.len(), "fetched travel requests");
        Ok(rows)
    }

    async fn validate(&self, step: ApprovalStep, id: RequestId, approved: bool) -> Result<()> {
        let path = format!("{VALIDATION}/{}/{id}", step.path_segment());
        self.client.put_query(&path, &[("approved", approved.to_string())]).await?;
        Ok(())
    }

    async fn delete(&self, id: RequestId) -> Result<()> {
        self.client.delete(&format!("{VALIDATION}/validation/{id}")).await?;
        Ok(())
    }
}

#[async_trait]
impl RequestStore<TravelRequest> for TravelApi {
    async fn list_all(&self) -> Result<Vec<TravelRequest>> {
        Ok(self.client.get_list(&format!("{REQUESTS}/all")).await?)
    }

    async fn get(&self, id: RequestId) -> Result<Option<TravelRequest>> {
        Ok(self.client.get_optional(&format!("{REQUESTS}/get/{id}")).await?)
    }

    async fn create(&self, request: TravelRequest) -> Result<TravelRequest> {
        let payload =
            self.client.send_json(Method::POST, &format!("{REQUESTS}/create"), &[], &request).await?;
        Ok(payload.decode_or(request)?)
    }

    async fn update(&self, id: RequestId, request: TravelRequest) -> Result<TravelRequest> {
        let path = format!("{REQUESTS}/update/{id}");
        let payload = self.client.send_json(Method::PUT, &path, &[], &request).await?;
        Ok(payload.decode_or(TravelRequest { id: Some(id), ..request })?)
    }

    async fn delete(&self, id: RequestId) -> Result<()> {
        self.client.delete(&format!("{REQUESTS}/delete/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::{ApiClientConfig, StaticToken};

    fn api_for(server: &MockServer) -> TravelApi {
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        let client = ApiClient::new(config, Arc::new(StaticToken::new("t"))).unwrap();
        TravelApi::new(Arc::new(client))
    }

    #[tokio::test]
    async fn fetches_by_wire_status_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/validation-travels/status/STEP1_APPROVED"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "destination": "Paris", "status": "STEP1_APPROVED"}
            ])))
            .mount(&server)
            .await;

        let rows = api_for(&server).fetch_by_status(&RequestStatus::Step1Approved).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].destination.as_deref(), Some("Paris"));
    }

    #[tokio::test]
    async fn validates_on_step_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/validation-travels/step2/12"))
            .and(query_param("approved", "true"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server).validate(ApprovalStep::Step2, 12, true).await.unwrap();
    }

    #[tokio::test]
    async fn deletes_on_both_sides() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/validation-travels/validation/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/travel-requests/delete/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        RequestSource::delete(&api, 5).await.unwrap();
        RequestStore::delete(&api, 5).await.unwrap();
    }

    #[tokio::test]
    async fn create_posts_body_and_returns_backend_copy() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/travel-requests/create"))
            .and(body_partial_json(json!({"destination": "Tunis", "status": "PENDING"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 77, "destination": "Tunis", "status": "PENDING"
            })))
            .mount(&server)
            .await;

        let request = TravelRequest { destination: Some("Tunis".into()), ..TravelRequest::default() };
        let created = api_for(&server).create(request).await.unwrap();
        assert_eq!(created.id, Some(77));
    }

    #[tokio::test]
    async fn update_without_body_keeps_submitted_copy() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/travel-requests/update/8"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let request = TravelRequest { objective: Some("Audit".into()), ..TravelRequest::default() };
        let updated = api_for(&server).update(8, request).await.unwrap();
        assert_eq!(updated.id, Some(8));
        assert_eq!(updated.objective.as_deref(), Some("Audit"));
    }

    #[tokio::test]
    async fn missing_request_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/travel-requests/get/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert_eq!(api_for(&server).get(404).await.unwrap(), None);
    }
}
