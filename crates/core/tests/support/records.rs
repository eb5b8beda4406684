//! In-memory stores for projects, missions, passports and invoices

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use travelgate_core::{InvoiceStore, MissionStats, Record, RequestStore};
use travelgate_domain::{
    Invoice, Mission, Passport, Project, RequestId, Result as DomainResult, TravelRequest,
    TravelgateError,
};

use super::Call;

/// Records whose id the store assigns.
pub trait Keyed: Record {
    fn set_id(&mut self, id: RequestId);
}

impl Keyed for Project {
    fn set_id(&mut self, id: RequestId) {
        self.id = Some(id);
    }
}

impl Keyed for Mission {
    fn set_id(&mut self, id: RequestId) {
        self.id = Some(id);
    }
}

impl Keyed for Passport {
    fn set_id(&mut self, id: RequestId) {
        self.id = Some(id);
    }
}

/// Keeps records in memory and records every mutation.
pub struct RecordStore<E> {
    rows: Mutex<Vec<E>>,
    calls: Mutex<Vec<Call>>,
    next_id: AtomicI64,
}

impl<E: Keyed> RecordStore<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self { rows: Mutex::new(rows), calls: Mutex::default(), next_id: AtomicI64::new(1) }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<E> {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<E: Keyed> RequestStore<E> for RecordStore<E> {
    async fn list_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.rows())
    }

    async fn get(&self, id: RequestId) -> DomainResult<Option<E>> {
        Ok(self.rows().into_iter().find(|r| r.id() == Some(id)))
    }

    async fn create(&self, mut record: E) -> DomainResult<E> {
        self.record(Call::Create);
        record.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: RequestId, mut record: E) -> DomainResult<E> {
        self.record(Call::Update(id));
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| TravelgateError::Http { status: 404, message: "missing".into() })?;
        record.set_id(id);
        *row = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: RequestId) -> DomainResult<()> {
        self.record(Call::Delete(id));
        self.rows.lock().unwrap().retain(|r| r.id() != Some(id));
        Ok(())
    }
}

#[async_trait]
impl MissionStats for RecordStore<Mission> {
    async fn count_missions_by_project(&self) -> DomainResult<BTreeMap<RequestId, i64>> {
        let mut counts = BTreeMap::new();
        for project_id in self.rows().iter().filter_map(|m| m.project.as_ref()?.id) {
            *counts.entry(project_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// Invoice store that prices drafts the way the backend does.
#[derive(Default)]
pub struct InvoiceLedger {
    invoices: Mutex<Vec<Invoice>>,
    generated: Mutex<Vec<RequestId>>,
}

impl InvoiceLedger {
    /// Travel ids an invoice was generated for, in order.
    pub fn generated(&self) -> Vec<RequestId> {
        self.generated.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvoiceStore for InvoiceLedger {
    async fn list_all(&self) -> DomainResult<Vec<Invoice>> {
        Ok(self.invoices.lock().unwrap().clone())
    }

    async fn generate(&self, travel_id: RequestId, draft: Invoice) -> DomainResult<Invoice> {
        let mut generated = self.generated.lock().unwrap();
        generated.push(travel_id);
        let hotel = draft.price_per_night.unwrap_or(0.0) * f64::from(draft.nights.unwrap_or(0));
        let per_diem =
            draft.per_diem_rate.unwrap_or(0.0) * f64::from(draft.travel_days.unwrap_or(0));
        let invoice = Invoice {
            id: Some(generated.len() as RequestId),
            travel_request: Some(TravelRequest { id: Some(travel_id), ..TravelRequest::default() }),
            hotel_total: Some(hotel),
            per_diem_total: Some(per_diem),
            total_amount: Some(draft.ticket_amount.unwrap_or(0.0) + hotel + per_diem),
            ..draft
        };
        self.invoices.lock().unwrap().push(invoice.clone());
        Ok(invoice)
    }

    async fn get_by_travel(&self, travel_id: RequestId) -> DomainResult<Option<Invoice>> {
        Ok(self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .find(|invoice| invoice.travel_request_id() == Some(travel_id))
            .cloned())
    }

    async fn delete(&self, id: RequestId) -> DomainResult<()> {
        self.invoices.lock().unwrap().retain(|invoice| invoice.id != Some(id));
        Ok(())
    }
}
