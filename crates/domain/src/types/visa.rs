//! Visa request entity

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RequestId, RequestStatus};
use crate::constants::{VISA_HIGH_PRIORITY_DAYS, VISA_URGENT_DAYS};

/// Category of traveler a visa is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelerType {
    Member,
    Mission,
    Formation,
    Personnel,
    Urgence,
}

crate::impl_wire_conversions!(TravelerType {
    Member => "MEMBER",
    Mission => "MISSION",
    Formation => "FORMATION",
    Personnel => "PERSONNEL",
    Urgence => "URGENCE",
});

impl TravelerType {
    pub const ALL: [Self; 5] =
        [Self::Member, Self::Mission, Self::Formation, Self::Personnel, Self::Urgence];

    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "Membre",
            Self::Mission => "Mission",
            Self::Formation => "Formation",
            Self::Personnel => "Personnel",
            Self::Urgence => "Urgence",
        }
    }

    /// Label for a raw wire value, falling back to the value itself.
    pub fn label_for(raw: &str) -> String {
        raw.parse::<Self>().map_or_else(|_| raw.to_string(), |t| t.label().to_string())
    }
}

/// A visa request going through the two-step approval.
///
/// Passport details are copied onto the request so the visa history stays
/// intact if the passport is later edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisaRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_purpose: Option<String>,
    /// Date of the first trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_mission: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_first_mission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_issuing_visa: Option<String>,
    /// Raw traveler type; see [`TravelerType`] for the known values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveler_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<String>,
    /// `null` or absent on the wire reads as [`RequestStatus::missing`].
    #[serde(default = "RequestStatus::missing")]
    pub status: RequestStatus,
}

/// Urgency of a visa request relative to its mission date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaPriority {
    /// Mission date is today or already past.
    Started,
    Urgent { days: i64 },
    High { days: i64 },
    Normal { days: i64 },
}

impl VisaPriority {
    /// Classify the number of days left before the mission.
    pub fn from_days(days: i64) -> Self {
        if days <= 0 {
            Self::Started
        } else if days <= VISA_URGENT_DAYS {
            Self::Urgent { days }
        } else if days <= VISA_HIGH_PRIORITY_DAYS {
            Self::High { days }
        } else {
            Self::Normal { days }
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Started => "Mission commencée".to_string(),
            Self::Urgent { days } => format!("Urgent - {days} jour(s)"),
            Self::High { days } => format!("Priorité haute - {days} jours"),
            Self::Normal { days } => format!("{days} jours restants"),
        }
    }

    /// Started missions are as pressing as urgent ones.
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::Started | Self::Urgent { .. })
    }
}

impl VisaRequest {
    /// Prepare a request for submission; the backend expects `PENDING`.
    pub fn into_submission(mut self) -> Self {
        self.status = RequestStatus::Pending;
        self
    }

    /// Priority relative to `today`, or `None` without a mission date.
    pub fn priority(&self, today: NaiveDate) -> Option<VisaPriority> {
        self.date_of_mission.map(|date| VisaPriority::from_days((date - today).num_days()))
    }

    /// Required-field check run before submitting the creation form.
    ///
    /// Returns field name → message; an empty map means the form is valid.
    pub fn validation_errors(&self) -> BTreeMap<&'static str, &'static str> {
        fn blank(value: Option<&String>) -> bool {
            value.map_or(true, |v| v.trim().is_empty())
        }

        let mut errors = BTreeMap::new();
        if blank(self.mission_purpose.as_ref()) {
            errors.insert("missionPurpose", "Objet obligatoire");
        }
        if self.date_of_mission.is_none() {
            errors.insert("dateOfMission", "Date obligatoire");
        }
        if blank(self.traveler_type.as_ref()) {
            errors.insert("travelerType", "Type obligatoire");
        }
        if blank(self.passport_number.as_ref()) {
            errors.insert("passportNumber", "Numéro passeport obligatoire");
        }
        if self.issue_date.is_none() {
            errors.insert("issueDate", "Date de délivrance obligatoire");
        }
        if self.expiry_date.is_none() {
            errors.insert("expiryDate", "Date expiration obligatoire");
        }
        if blank(self.issuing_country.as_ref()) {
            errors.insert("issuingCountry", "Pays obligatoire");
        }
        if blank(self.issued_by.as_ref()) {
            errors.insert("issuedBy", "Autorité obligatoire");
        }
        errors
    }
}
