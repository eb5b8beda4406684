//! Project, mission and passport endpoints
//!
//! The three resources share update and delete routes and differ only in how
//! they are listed, read and created.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use travelgate_core::{MissionStats, Record, RequestStore};
use travelgate_domain::{Mission, Passport, Project, RequestId, Result};
use tracing::debug;

use super::client::ApiClient;

const PROJECTS: &str = "/api/projects";
const MISSIONS: &str = "/api/missions";
const PASSPORTS: &str = "/api/passports";

/// How a resource names its list, read and create routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Routes {
    /// `GET /all`, `GET /{id}`, `POST /create`.
    Verbs,
    /// `GET /`, `GET /{id}`, `POST /`.
    Plain,
}

/// Backend adapter for one record kind.
pub struct RecordApi<E> {
    client: Arc<ApiClient>,
    base: &'static str,
    routes: Routes,
    _record: PhantomData<fn() -> E>,
}

pub type ProjectApi = RecordApi<Project>;
pub type MissionApi = RecordApi<Mission>;
pub type PassportApi = RecordApi<Passport>;

impl<E> Clone for RecordApi<E> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            base: self.base,
            routes: self.routes,
            _record: PhantomData,
        }
    }
}

impl<E> RecordApi<E> {
    fn with_routes(client: Arc<ApiClient>, base: &'static str, routes: Routes) -> Self {
        Self { client, base, routes, _record: PhantomData }
    }

    fn list_path(&self) -> String {
        match self.routes {
            Routes::Verbs => format!("{}/all", self.base),
            Routes::Plain => self.base.to_string(),
        }
    }

    fn create_path(&self) -> String {
        match self.routes {
            Routes::Verbs => format!("{}/create", self.base),
            Routes::Plain => self.base.to_string(),
        }
    }
}

impl RecordApi<Project> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_routes(client, PROJECTS, Routes::Verbs)
    }
}

impl RecordApi<Mission> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_routes(client, MISSIONS, Routes::Verbs)
    }
}

impl RecordApi<Passport> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_routes(client, PASSPORTS, Routes::Plain)
    }
}

#[async_trait]
impl<E> RequestStore<E> for RecordApi<E>
where
    E: Record + Serialize + DeserializeOwned,
{
    async fn list_all(&self) -> Result<Vec<E>> {
        let rows = self.client.get_list(&self.list_path()).await?;
        debug!(kind = E::KIND, count = rows.len(), "fetched records");
        Ok(rows)
    }

    async fn get(&self, id: RequestId) -> Result<Option<E>> {
        Ok(self.client.get_optional(&format!("{}/{id}", self.base)).await?)
    }

    async fn create(&self, record: E) -> Result<E> {
        let payload =
            self.client.send_json(Method::POST, &self.create_path(), &[], &record).await?;
        Ok(payload.decode_or(record)?)
    }

    async fn update(&self, id: RequestId, record: E) -> Result<E> {
        let path = format!("{}/update/{id}", self.base);
        let payload = self.client.send_json(Method::PUT, &path, &[], &record).await?;
        Ok(payload.decode_or(record)?)
    }

    async fn delete(&self, id: RequestId) -> Result<()> {
        self.client.delete(&format!("{}/delete/{id}", self.base)).await?;
        Ok(())
    }
}

#[async_trait]
impl MissionStats for RecordApi<Project> {
    async fn count_missions_by_project(&self) -> Result<BTreeMap<RequestId, i64>> {
        let payload =
            self.client.execute(Method::GET, &format!("{PROJECTS}/stats/missions"), &[], None).await?;
        Ok(payload.decode_or(BTreeMap::new())?)
    }
}
