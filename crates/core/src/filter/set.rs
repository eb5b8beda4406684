//! Filter set: the user's current constraints

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use travelgate_domain::RequestStatus;

use super::FilterField;

/// Field → predicate; anything absent or blank is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<FilterField, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    /// Zero or negative means unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<i64>,
    /// Zero or negative means unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<i64>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every predicate reset; the status keeps the view's default.
    pub fn cleared(default_status: Option<&RequestStatus>) -> Self {
        Self { status: default_status.map(ToString::to_string), ..Self::default() }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_field(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn with_duration_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.duration_min = min;
        self.duration_max = max;
        self
    }

    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn remove_field(&mut self, field: FilterField) {
        self.fields.remove(&field);
    }

    /// Effective lower duration bound.
    pub fn min_duration(&self) -> Option<i64> {
        self.duration_min.filter(|d| *d > 0)
    }

    /// Effective upper duration bound.
    pub fn max_duration(&self) -> Option<i64> {
        self.duration_max.filter(|d| *d > 0)
    }

    /// Whether no predicate constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        use travelgate_common::text::is_blank;

        is_blank(self.status.as_deref())
            && self.fields.values().all(|v| is_blank(Some(v)))
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.min_duration().is_none()
            && self.max_duration().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_keeps_default_status_only() {
        let busy = FilterSet::new()
            .with_status("APPROVED")
            .with_field(FilterField::Destination, "Paris")
            .with_duration_range(Some(2), None);
        assert!(!busy.is_unconstrained());

        let cleared = FilterSet::cleared(Some(&RequestStatus::Pending));
        assert_eq!(cleared.status.as_deref(), Some("PENDING"));
        assert!(cleared.fields.is_empty());
        assert!(FilterSet::cleared(None).is_unconstrained());
    }

    #[test]
    fn non_positive_duration_bounds_are_unset() {
        let set = FilterSet::new().with_duration_range(Some(0), Some(-3));
        assert_eq!(set.min_duration(), None);
        assert_eq!(set.max_duration(), None);
        assert!(set.is_unconstrained());
    }

    #[test]
    fn deserializes_from_form_json() {
        let json = r#"{"status":"PENDING","fields":{"destination":"Paris","type":"Mission"},"dateFrom":"2024-03-01"}"#;
        let set: FilterSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.fields.get(&FilterField::TravelType).map(String::as_str), Some("Mission"));
        assert_eq!(set.date_from, NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
