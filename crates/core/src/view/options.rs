//! Per-view configuration

use travelgate_domain::{RequestStatus, SyncConfig};

use crate::filter::{DateField, DateFields, Filterable};

/// What a view queries and how it filters by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Statuses fetched by the sync, in merge order.
    pub statuses: Vec<RequestStatus>,
    /// Status filter restored by `clear_filters`.
    pub default_status: Option<RequestStatus>,
    pub date_fields: DateFields,
    pub resync_after_mutation: bool,
}

impl ViewOptions {
    /// Every status, no default status filter.
    pub fn all<E: Filterable>() -> Self {
        Self {
            statuses: RequestStatus::KNOWN.to_vec(),
            default_status: None,
            date_fields: DateFields::single(E::DEFAULT_DATE_FIELD),
            resync_after_mutation: true,
        }
    }

    /// First-step screen: every status, pending requests shown first.
    pub fn step1<E: Filterable>() -> Self {
        Self { default_status: Some(RequestStatus::Pending), ..Self::all::<E>() }
    }

    /// Second-step screen: only requests that passed step 1.
    ///
    /// Travel requests bound the end of a date range on their return date.
    pub fn step2<E: Filterable>() -> Self {
        let date_fields = match E::DEFAULT_DATE_FIELD {
            DateField::Departure => DateFields::travel_span(),
            other => DateFields::single(other),
        };
        Self {
            statuses: RequestStatus::STEP2_SCOPE.to_vec(),
            default_status: Some(RequestStatus::Step1Approved),
            date_fields,
            resync_after_mutation: true,
        }
    }

    pub fn with_sync_config(mut self, config: &SyncConfig) -> Self {
        self.resync_after_mutation = config.resync_after_mutation;
        self
    }

    pub fn with_date_fields(mut self, date_fields: DateFields) -> Self {
        self.date_fields = date_fields;
        self
    }

    pub fn with_default_status(mut self, status: Option<RequestStatus>) -> Self {
        self.default_status = status;
        self
    }
}
