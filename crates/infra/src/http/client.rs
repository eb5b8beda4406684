use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use travelgate_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use travelgate_domain::{ApiConfig, TravelgateError};
use tracing::debug;

use crate::errors::InfraError;

/// Single-attempt HTTP client with a per-request timeout.
///
/// Non-success statuses are returned as responses; only transport failures
/// become errors.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    pub fn new() -> Result<Self, TravelgateError> {
        Self::builder().build()
    }

    /// Client configured from the `api` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, TravelgateError> {
        Self::builder().timeout(Duration::from_secs(config.timeout_seconds)).build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send once; connection, timeout and body errors map to
    /// [`TravelgateError::Network`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, TravelgateError> {
        let request = builder.build().map_err(to_domain)?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = self.client.execute(request).await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            to_domain(err)
        })?;
        debug!(%method, %url, status = %response.status(), "received HTTP response");
        Ok(response)
    }
}

fn to_domain(err: reqwest::Error) -> TravelgateError {
    TravelgateError::from(InfraError::from(err))
}

#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: concat!("travelgate/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient, TravelgateError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(to_domain)?;
        Ok(HttpClient { client })
    }
}
