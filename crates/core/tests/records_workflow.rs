//! Project, mission, passport and invoice workflows over in-memory stores.

mod support;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Months, NaiveDate, Utc};
use support::{Call, InMemoryBackend, InvoiceLedger, RecordStore};
use travelgate_core::{
    mission_counts, InvoiceDesk, MessageBoard, RequestCatalog, RequestSource, SessionContext,
    SessionHandle, WriteGate,
};
use travelgate_domain::constants::messages;
use travelgate_domain::{
    ApprovalStep, Invoice, Mission, Passport, Project, RequestId, RequestStatus,
    Result as DomainResult, TravelRequest, TravelgateError,
};

fn session(roles: &[&str]) -> SessionHandle {
    SessionHandle::new(SessionContext::new("token", roles.iter().copied()))
}

fn project_ref(id: i64) -> Option<Box<Project>> {
    Some(Box::new(Project { id: Some(id), ..Project::default() }))
}

fn mission_catalog(
    store: &Arc<RecordStore<Mission>>,
    board: &Arc<MessageBoard>,
    roles: &[&str],
) -> RequestCatalog<Mission> {
    RequestCatalog::new(Arc::clone(store) as _, Arc::clone(board))
        .with_gate(WriteGate::missions(session(roles)))
}

#[tokio::test]
async fn non_officer_mission_writes_never_reach_the_backend() {
    let store = Arc::new(RecordStore::new(vec![Mission {
        id: Some(7),
        name: Some("Audit".into()),
        ..Mission::default()
    }]));
    let board = Arc::new(MessageBoard::default());
    let catalog = mission_catalog(&store, &board, &["ROLE_PMANAGER"]);

    let err = catalog.create(Mission::default()).await.unwrap_err();
    assert_eq!(err, TravelgateError::Forbidden(messages::FORBIDDEN_MISSION_SAVE.into()));
    assert_eq!(board.error().as_deref(), Some(messages::FORBIDDEN_MISSION_SAVE));

    catalog.delete(7).await.unwrap_err();
    assert_eq!(board.error().as_deref(), Some(messages::FORBIDDEN_MISSION_DELETE));

    catalog.authorize_edit().unwrap_err();
    assert_eq!(board.error().as_deref(), Some(messages::FORBIDDEN_MISSION_EDIT));

    assert!(store.calls().is_empty());
    assert_eq!(catalog.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn officer_manages_missions_and_totals_follow() {
    let store = Arc::new(RecordStore::<Mission>::new(Vec::new()));
    let board = Arc::new(MessageBoard::default());
    let catalog = mission_catalog(&store, &board, &["ROLE_OFFICER"]);

    let kickoff = catalog
        .create(Mission { name: Some("Kickoff".into()), project: project_ref(1), ..Mission::default() })
        .await
        .unwrap();
    catalog
        .create(Mission { name: Some("Audit".into()), project: project_ref(1), ..Mission::default() })
        .await
        .unwrap();
    assert_eq!(board.success().as_deref(), Some(messages::MISSION_CREATED));

    let id = kickoff.id.unwrap();
    let moved = Mission { project: project_ref(2), ..kickoff };
    catalog.update(id, moved).await.unwrap();
    assert_eq!(board.success().as_deref(), Some(messages::MISSION_UPDATED));

    let totals = mission_counts(store.as_ref()).await;
    assert_eq!(totals.get(&1), Some(&1));
    assert_eq!(totals.get(&2), Some(&1));
    assert_eq!(store.calls(), vec![Call::Create, Call::Create, Call::Update(id)]);
}

#[tokio::test]
async fn project_catalog_is_ungated() {
    let store = Arc::new(RecordStore::<Project>::new(Vec::new()));
    let board = Arc::new(MessageBoard::default());
    let catalog: RequestCatalog<Project> = RequestCatalog::new(Arc::clone(&store) as _, Arc::clone(&board));

    let created = catalog
        .create(Project { name: Some("Atlas".into()), code: Some("ATL".into()), ..Project::default() })
        .await
        .unwrap();
    catalog.delete(created.id.unwrap()).await.unwrap();

    assert_eq!(board.success().as_deref(), Some(messages::PROJECT_DELETED));
    assert!(store.rows().is_empty());
    let missing = catalog.get(created.id.unwrap()).await.unwrap_err();
    assert!(matches!(missing, TravelgateError::NotFound(_)));
}

fn passport(expiry: NaiveDate) -> Passport {
    let today = Utc::now().date_naive();
    Passport {
        first_name: Some(" Amira ".into()),
        last_name: Some("Ben Salah".into()),
        address: Some("12 rue de Carthage".into()),
        nationality: Some("Tunisienne".into()),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
        place_of_birth: Some("Sfax".into()),
        sex: Some("F".into()),
        issuing_authority: Some("Ministère".into()),
        date_of_issue: today.checked_sub_months(Months::new(12)),
        date_of_expiry: Some(expiry),
        passport_number: Some(1234567),
        ..Passport::default()
    }
}

#[tokio::test]
async fn passport_catalog_checks_then_trims() {
    let store = Arc::new(RecordStore::<Passport>::new(Vec::new()));
    let board = Arc::new(MessageBoard::default());
    let catalog: RequestCatalog<Passport> = RequestCatalog::new(Arc::clone(&store) as _, Arc::clone(&board));
    let today = Utc::now().date_naive();

    let expiring = passport(today.checked_add_months(Months::new(2)).unwrap());
    catalog.create(expiring).await.unwrap_err();
    assert_eq!(
        board.error().as_deref(),
        Some("ATTENTION: Ce passeport expire dans moins de 6 mois !")
    );
    assert!(store.calls().is_empty());

    let created = catalog
        .create(passport(today.checked_add_months(Months::new(60)).unwrap()))
        .await
        .unwrap();
    assert_eq!(created.first_name.as_deref(), Some("Amira"));

    let edited = Passport { last_name: Some(" Trabelsi  ".into()), ..created.clone() };
    let updated = catalog.update(created.id.unwrap(), edited).await.unwrap();
    assert_eq!(updated.last_name.as_deref(), Some("Trabelsi"));
    assert_eq!(board.success().as_deref(), Some(messages::PASSPORT_UPDATED));
}

fn approved_travel(id: i64) -> TravelRequest {
    TravelRequest { id: Some(id), status: RequestStatus::Approved, ..TravelRequest::default() }
}

#[tokio::test]
async fn invoice_desk_requires_a_selected_travel() {
    let travels = Arc::new(InMemoryBackend::new(vec![
        approved_travel(4),
        TravelRequest { id: Some(5), status: RequestStatus::Pending, ..TravelRequest::default() },
    ]));
    let ledger = Arc::new(InvoiceLedger::default());
    let board = Arc::new(MessageBoard::default());
    let desk = InvoiceDesk::new(Arc::clone(&travels) as _, Arc::clone(&ledger) as _, Arc::clone(&board));

    let approved = desk.approved_travels().await.unwrap();
    assert_eq!(approved.iter().map(|t| t.id).collect::<Vec<_>>(), [Some(4)]);

    let err = desk.generate(None, Invoice::default()).await.unwrap_err();
    assert_eq!(err, TravelgateError::InvalidInput(messages::INVOICE_TRAVEL_REQUIRED.into()));
    assert_eq!(board.error().as_deref(), Some(messages::INVOICE_TRAVEL_REQUIRED));
    assert!(ledger.generated().is_empty());

    let draft = Invoice {
        ticket_amount: Some(800.0),
        price_per_night: Some(100.0),
        nights: Some(3),
        per_diem_rate: Some(50.0),
        travel_days: Some(4),
        ..Invoice::default()
    };
    let invoice = desk.generate(Some(4), draft).await.unwrap();
    assert_eq!(invoice.total_amount, Some(1300.0));
    assert_eq!(board.success().as_deref(), Some(messages::INVOICE_GENERATED));
    assert_eq!(desk.invoice_for(4).await.unwrap(), Some(invoice.clone()));

    desk.delete(invoice.id.unwrap()).await.unwrap();
    assert!(desk.invoices().await.unwrap().is_empty());
    assert_eq!(board.success().as_deref(), Some(messages::INVOICE_DELETED));
}

struct Offline;

#[async_trait]
impl RequestSource<TravelRequest> for Offline {
    async fn fetch_by_status(&self, _: &RequestStatus) -> DomainResult<Vec<TravelRequest>> {
        Err(TravelgateError::Network("connection refused".into()))
    }

    async fn validate(&self, _: ApprovalStep, _: RequestId, _: bool) -> DomainResult<()> {
        Ok(())
    }

    async fn delete(&self, _: RequestId) -> DomainResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn approved_travel_failure_is_reported() {
    let board = Arc::new(MessageBoard::default());
    let desk =
        InvoiceDesk::new(Arc::new(Offline), Arc::new(InvoiceLedger::default()), Arc::clone(&board));

    assert!(desk.approved_travels().await.is_err());
    assert_eq!(board.error().as_deref(), Some(messages::APPROVED_TRAVELS_LOAD_FAILED));
}
