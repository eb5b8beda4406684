//! Invoice issued for an approved travel request
//!
//! Amounts are computed by the backend from the submitted rates; the client
//! only sends the inputs (ticket, hotel and per-diem rates).

use serde::{Deserialize, Serialize};

use super::{RequestId, TravelRequest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    /// Set by the backend from the travel request the invoice is generated
    /// for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_request: Option<TravelRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveler_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveler_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveler_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_total: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_diem_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_diem_total: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

impl Invoice {
    /// `"First Last"`, skipping missing parts.
    pub fn traveler_name(&self) -> String {
        [self.traveler_first_name.as_deref(), self.traveler_last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Id of the invoiced travel request, when the backend included it.
    pub fn travel_request_id(&self) -> Option<RequestId> {
        self.travel_request.as_ref().and_then(|travel| travel.id)
    }
}
