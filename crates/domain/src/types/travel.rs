//! Travel request entity
//!
//! Mirrors the backend JSON shape (camelCase, ISO `yyyy-MM-dd` dates).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Mission, Project, RequestId, RequestStatus};

/// A travel request going through the two-step approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    /// Kind of trip.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub travel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Optional stopover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_destination: Option<String>,
    /// Purpose of the trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_required: Option<bool>,
    /// `null` or absent on the wire reads as [`RequestStatus::missing`].
    #[serde(default = "RequestStatus::missing")]
    pub status: RequestStatus,
    /// Trip length in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<Mission>,
}

impl TravelRequest {
    /// Prepare a request for submission; new and edited requests always go
    /// back to `PENDING`.
    pub fn into_submission(mut self) -> Self {
        self.status = RequestStatus::Pending;
        self
    }

    /// Duration in days, with a missing duration counted as zero.
    pub fn duration_days(&self) -> i64 {
        i64::from(self.duration.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let json = r#"{
            "id": 7,
            "type": "MISSION",
            "destination": "Tunis",
            "secondaryDestination": "Rome",
            "objective": "Audit client",
            "departureDate": "2025-01-10",
            "returnDate": "2025-01-20",
            "visaRequired": true,
            "status": "STEP1_APPROVED",
            "duration": 10,
            "version": 2,
            "requester": {"id": 3, "email": "a@b.c"},
            "project": {"id": 1, "name": "Atlas", "code": "ATL", "clientname": "ACME", "missions": []},
            "mission": {"id": 4, "name": "Kickoff", "startDate": "2025-01-09"}
        }"#;

        let travel: TravelRequest = serde_json::from_str(json).unwrap();
        assert_eq!(travel.id, Some(7));
        assert_eq!(travel.travel_type.as_deref(), Some("MISSION"));
        assert_eq!(travel.departure_date, NaiveDate::from_ymd_opt(2025, 1, 10));
        assert_eq!(travel.status, RequestStatus::Step1Approved);
        assert_eq!(travel.project.unwrap().client_name.as_deref(), Some("ACME"));
        assert_eq!(travel.mission.unwrap().start_date, NaiveDate::from_ymd_opt(2025, 1, 9));
    }

    #[test]
    fn missing_status_is_not_pending() {
        let travel: TravelRequest = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(travel.status.is_missing());
        assert_ne!(travel.status, RequestStatus::Pending);
        assert_eq!(travel.duration_days(), 0);

        // a locally built request still starts out pending
        assert_eq!(TravelRequest::default().status, RequestStatus::Pending);
    }

    #[test]
    fn submission_resets_status_and_skips_empty_fields() {
        let travel = TravelRequest {
            destination: Some("Paris".into()),
            status: RequestStatus::Rejected,
            ..Default::default()
        }
        .into_submission();

        let json = serde_json::to_value(&travel).unwrap();
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["destination"], "Paris");
        assert!(json.get("returnDate").is_none());
    }
}
