//! Filter capability for request kinds

use chrono::NaiveDate;
use travelgate_domain::{TravelRequest, VisaRequest};

use super::{DateField, FilterField};
use crate::entity::WorkflowEntity;

/// What the filter engine needs to know about a request.
pub trait Filterable: WorkflowEntity {
    /// Fields offered as facets, in display order.
    const FACET_FIELDS: &'static [FilterField];

    /// Date checked by both bounds unless a view says otherwise.
    const DEFAULT_DATE_FIELD: DateField;

    /// Values of `field`; empty when unset or not applicable.
    fn field_values(&self, field: FilterField) -> Vec<&str>;

    fn date(&self, field: DateField) -> Option<NaiveDate>;

    /// Duration in days; kinds without one report zero.
    fn filter_duration(&self) -> i64 {
        0
    }
}

impl Filterable for TravelRequest {
    const FACET_FIELDS: &'static [FilterField] = &[
        FilterField::Destination,
        FilterField::SecondaryDestination,
        FilterField::TravelType,
        FilterField::Objective,
    ];

    const DEFAULT_DATE_FIELD: DateField = DateField::Departure;

    fn field_values(&self, field: FilterField) -> Vec<&str> {
        let value = match field {
            FilterField::Destination => self.destination.as_deref(),
            FilterField::SecondaryDestination => self.secondary_destination.as_deref(),
            FilterField::TravelType => self.travel_type.as_deref(),
            FilterField::Objective => self.objective.as_deref(),
            _ => None,
        };
        value.into_iter().collect()
    }

    fn date(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::Departure => self.departure_date,
            DateField::Return => self.return_date,
            DateField::Mission => None,
        }
    }

    fn filter_duration(&self) -> i64 {
        self.duration_days()
    }
}

impl Filterable for VisaRequest {
    const FACET_FIELDS: &'static [FilterField] = &[
        FilterField::CountryOfFirstMission,
        FilterField::CountryIssuingVisa,
        FilterField::IssuingCountry,
        FilterField::TravelerType,
        FilterField::MissionPurpose,
        FilterField::Country,
    ];

    const DEFAULT_DATE_FIELD: DateField = DateField::Mission;

    fn field_values(&self, field: FilterField) -> Vec<&str> {
        let values = match field {
            FilterField::CountryOfFirstMission => vec![self.country_of_first_mission.as_deref()],
            FilterField::CountryIssuingVisa => vec![self.country_issuing_visa.as_deref()],
            FilterField::IssuingCountry => vec![self.issuing_country.as_deref()],
            FilterField::TravelerType => vec![self.traveler_type.as_deref()],
            FilterField::MissionPurpose => vec![self.mission_purpose.as_deref()],
            FilterField::PassportNumber => vec![self.passport_number.as_deref()],
            FilterField::Country => vec![
                self.country_of_first_mission.as_deref(),
                self.country_issuing_visa.as_deref(),
            ],
            _ => Vec::new(),
        };
        values.into_iter().flatten().collect()
    }

    fn date(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::Mission => self.date_of_mission,
            DateField::Departure | DateField::Return => None,
        }
    }
}
