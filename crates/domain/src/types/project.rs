//! Projects and their missions
//!
//! A project groups missions for one client; travel requests point at both.
//! The backend serializes a project with its missions nested, and a mission
//! with its project flattened into `projectName`/`projectCode`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RequestId;

/// Client project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, rename = "clientname", skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missions: Vec<Mission>,
}

/// Mission within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Objective of the mission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Owning project; only sent when creating or re-assigning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Box<Project>>,
    /// Read-only, derived by the backend.
    #[serde(default, skip_serializing)]
    pub project_name: Option<String>,
    /// Read-only, derived by the backend.
    #[serde(default, skip_serializing)]
    pub project_code: Option<String>,
}

/// Where a mission stands relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionPhase {
    Upcoming,
    InProgress,
    Finished,
    /// Start or end date missing.
    Undefined,
}

crate::impl_wire_conversions!(MissionPhase {
    Upcoming => "A_VENIR",
    InProgress => "EN_COURS",
    Finished => "TERMINE",
    Undefined => "NON_DEFINI",
});

impl MissionPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "À venir",
            Self::InProgress => "En cours",
            Self::Finished => "Terminé",
            Self::Undefined => "Non défini",
        }
    }
}

impl Mission {
    /// Phase on `today`; both bounds are inclusive.
    pub fn phase(&self, today: NaiveDate) -> MissionPhase {
        match (self.start_date, self.end_date) {
            (Some(start), _) if today < start => MissionPhase::Upcoming,
            (Some(_), Some(end)) if today > end => MissionPhase::Finished,
            (Some(_), Some(_)) => MissionPhase::InProgress,
            _ => MissionPhase::Undefined,
        }
    }

    /// Name of the owning project, from the nested project or the derived
    /// field.
    pub fn project_label(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|project| project.name.as_deref())
            .or(self.project_name.as_deref())
    }

    /// Human-readable length: days under a month, then months, then years.
    pub fn duration_label(&self) -> String {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return "Non définie".to_string();
        };
        let days = (end - start).num_days().abs();
        match days {
            1 => "1 jour".to_string(),
            d if d < 30 => format!("{d} jours"),
            d if d < 365 => format!("{} mois", (d as f64 / 30.0).round() as i64),
            d => format!("{} an(s)", (d as f64 / 365.0).round() as i64),
        }
    }
}
