//! In-memory backend implementing the request ports

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use travelgate_core::{NewVisaRequest, RequestSource, RequestStore, WorkflowEntity};
use travelgate_domain::{
    ApprovalStep, RequestId, RequestStatus, Result as DomainResult, TravelRequest, TravelgateError,
    VisaRequest,
};

/// Port call recorded by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(RequestStatus),
    Validate(ApprovalStep, RequestId, bool),
    Delete(RequestId),
    Create,
    Update(RequestId),
}

/// Rows the backend can mutate.
pub trait Row: WorkflowEntity {
    fn set_status(&mut self, status: RequestStatus);
    fn set_id(&mut self, id: RequestId);
}

impl Row for TravelRequest {
    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    fn set_id(&mut self, id: RequestId) {
        self.id = Some(id);
    }
}

impl Row for VisaRequest {
    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    fn set_id(&mut self, id: RequestId) {
        self.id = Some(id);
    }
}

/// Backend holding rows in memory, recording every call.
///
/// Statuses marked failing answer with HTTP 500; a failing mutation status
/// makes every mutation answer with that code.
pub struct InMemoryBackend<E> {
    rows: Mutex<Vec<E>>,
    failing_statuses: Mutex<HashSet<RequestStatus>>,
    mutation_failure: Mutex<Option<u16>>,
    calls: Mutex<Vec<Call>>,
    next_id: AtomicI64,
}

impl<E: Row> InMemoryBackend<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self {
            rows: Mutex::new(rows),
            failing_statuses: Mutex::default(),
            mutation_failure: Mutex::default(),
            calls: Mutex::default(),
            next_id: AtomicI64::new(100),
        }
    }

    pub fn fail_status(&self, status: RequestStatus) {
        self.failing_statuses.lock().unwrap().insert(status);
    }

    pub fn fail_mutations_with(&self, http_status: u16) {
        *self.mutation_failure.lock().unwrap() = Some(http_status);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    pub fn rows(&self) -> Vec<E> {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_mutation(&self) -> DomainResult<()> {
        match *self.mutation_failure.lock().unwrap() {
            Some(status) => Err(TravelgateError::Http { status, message: "rejected".into() }),
            None => Ok(()),
        }
    }

    fn insert(&self, mut request: E) -> E {
        request.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.rows.lock().unwrap().push(request.clone());
        request
    }
}

#[async_trait]
impl<E: Row> RequestSource<E> for InMemoryBackend<E> {
    async fn fetch_by_status(&self, status: &RequestStatus) -> DomainResult<Vec<E>> {
        self.record(Call::Fetch(status.clone()));
        if self.failing_statuses.lock().unwrap().contains(status) {
            return Err(TravelgateError::Http { status: 500, message: "boom".into() });
        }
        Ok(self.rows.lock().unwrap().iter().filter(|r| r.status() == status).cloned().collect())
    }

    async fn validate(&self, step: ApprovalStep, id: RequestId, approved: bool) -> DomainResult<()> {
        self.record(Call::Validate(step, id, approved));
        self.check_mutation()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| TravelgateError::Http { status: 404, message: "missing".into() })?;
        let next = row
            .status()
            .after(step, approved)
            .ok_or_else(|| TravelgateError::Http { status: 400, message: "bad step".into() })?;
        row.set_status(next);
        Ok(())
    }

    async fn delete(&self, id: RequestId) -> DomainResult<()> {
        self.record(Call::Delete(id));
        self.check_mutation()?;
        self.rows.lock().unwrap().retain(|r| r.id() != Some(id));
        Ok(())
    }
}

#[async_trait]
impl RequestStore<TravelRequest> for InMemoryBackend<TravelRequest> {
    async fn list_all(&self) -> DomainResult<Vec<TravelRequest>> {
        Ok(self.rows())
    }

    async fn get(&self, id: RequestId) -> DomainResult<Option<TravelRequest>> {
        Ok(self.rows().into_iter().find(|r| r.id == Some(id)))
    }

    async fn create(&self, request: TravelRequest) -> DomainResult<TravelRequest> {
        self.record(Call::Create);
        self.check_mutation()?;
        Ok(self.insert(request))
    }

    async fn update(&self, id: RequestId, request: TravelRequest) -> DomainResult<TravelRequest> {
        self.record(Call::Update(id));
        self.check_mutation()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| TravelgateError::Http { status: 404, message: "missing".into() })?;
        *row = TravelRequest { id: Some(id), ..request };
        Ok(row.clone())
    }

    async fn delete(&self, id: RequestId) -> DomainResult<()> {
        RequestSource::delete(self, id).await
    }
}

#[async_trait]
impl RequestStore<VisaRequest, NewVisaRequest> for InMemoryBackend<VisaRequest> {
    async fn list_all(&self) -> DomainResult<Vec<VisaRequest>> {
        Ok(self.rows())
    }

    async fn get(&self, id: RequestId) -> DomainResult<Option<VisaRequest>> {
        Ok(self.rows().into_iter().find(|r| r.id == Some(id)))
    }

    async fn create(&self, request: NewVisaRequest) -> DomainResult<VisaRequest> {
        self.record(Call::Create);
        self.check_mutation()?;
        Ok(self.insert(request.request))
    }

    async fn update(&self, id: RequestId, request: VisaRequest) -> DomainResult<VisaRequest> {
        self.record(Call::Update(id));
        self.check_mutation()?;
        Ok(VisaRequest { id: Some(id), ..request })
    }

    async fn delete(&self, id: RequestId) -> DomainResult<()> {
        RequestSource::delete(self, id).await
    }
}
