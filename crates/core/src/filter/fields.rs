//! Filterable fields and how they match

use serde::{Deserialize, Serialize};

/// How a filter value is compared to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive equality.
    Exact,
    /// Case-insensitive substring.
    Contains,
}

/// A text field a filter can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Destination,
    SecondaryDestination,
    #[serde(rename = "type")]
    TravelType,
    Objective,
    MissionPurpose,
    CountryOfFirstMission,
    CountryIssuingVisa,
    IssuingCountry,
    TravelerType,
    PassportNumber,
    /// Search over both the first-mission and the visa-issuing country.
    Country,
}

impl FilterField {
    pub fn match_mode(self) -> MatchMode {
        match self {
            Self::Objective | Self::MissionPurpose | Self::PassportNumber | Self::Country => {
                MatchMode::Contains
            }
            Self::Destination
            | Self::SecondaryDestination
            | Self::TravelType
            | Self::CountryOfFirstMission
            | Self::CountryIssuingVisa
            | Self::IssuingCountry
            | Self::TravelerType => MatchMode::Exact,
        }
    }
}

/// A date a range filter can bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    Departure,
    Return,
    Mission,
}

/// Which date each end of a date range is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub from: DateField,
    pub to: DateField,
}

impl DateFields {
    /// Both bounds on the same date.
    pub fn single(field: DateField) -> Self {
        Self { from: field, to: field }
    }

    /// Departure on or after `from`, return on or before `to`.
    pub fn travel_span() -> Self {
        Self { from: DateField::Departure, to: DateField::Return }
    }
}
