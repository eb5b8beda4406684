//! Facet derivation and predicate filtering

use std::collections::{BTreeMap, BTreeSet};

use travelgate_common::text::{contains_ignore_case, eq_ignore_case, non_blank};

use super::{DateFields, FilterField, FilterSet, Filterable, MatchMode};
use crate::entity::WorkflowEntity;

/// Facet field → sorted distinct non-blank values.
pub type Facets = BTreeMap<FilterField, Vec<String>>;

/// Distinct values of every facet field over the whole collection.
///
/// Blank values are dropped and values are trimmed; every facet field of the
/// kind is present, with an empty list when nothing qualifies.
pub fn derive_facets<E: Filterable>(collection: &[E]) -> Facets {
    E::FACET_FIELDS
        .iter()
        .map(|&field| {
            let values: BTreeSet<String> = collection
                .iter()
                .flat_map(|entity| entity.field_values(field))
                .filter_map(|value| non_blank(Some(value)))
                .map(str::to_string)
                .collect();
            (field, values.into_iter().collect())
        })
        .collect()
}

/// Requests matching every predicate, in their original order.
pub fn apply_filters<E: Filterable>(collection: &[E], filters: &FilterSet) -> Vec<E> {
    apply_filters_with(collection, filters, DateFields::single(E::DEFAULT_DATE_FIELD))
}

/// [`apply_filters`] with explicit date fields for the range bounds.
pub fn apply_filters_with<E: Filterable>(
    collection: &[E],
    filters: &FilterSet,
    dates: DateFields,
) -> Vec<E> {
    collection.iter().filter(|entity| matches(*entity, filters, dates)).cloned().collect()
}

/// Whether one request passes every predicate of `filters`.
pub fn matches<E: Filterable>(entity: &E, filters: &FilterSet, dates: DateFields) -> bool {
    if let Some(wanted) = non_blank(filters.status.as_deref()) {
        if !WorkflowEntity::status(entity).matches(wanted) {
            return false;
        }
    }

    for (field, value) in &filters.fields {
        let Some(wanted) = non_blank(Some(value)) else { continue };
        let values = entity.field_values(*field);
        let hit = match field.match_mode() {
            MatchMode::Exact => values.iter().any(|v| eq_ignore_case(v, wanted)),
            MatchMode::Contains => values.iter().any(|v| contains_ignore_case(v, wanted)),
        };
        if !hit {
            return false;
        }
    }

    if let Some(from) = filters.date_from {
        match entity.date(dates.from) {
            Some(date) if date >= from => {}
            _ => return false,
        }
    }
    if let Some(to) = filters.date_to {
        match entity.date(dates.to) {
            Some(date) if date <= to => {}
            _ => return false,
        }
    }

    let duration = entity.filter_duration();
    if filters.min_duration().is_some_and(|min| duration < min) {
        return false;
    }
    if filters.max_duration().is_some_and(|max| duration > max) {
        return false;
    }

    true
}
