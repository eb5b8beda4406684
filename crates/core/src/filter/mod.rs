//! Filter and facet engine
//!
//! One generic engine over the [`Filterable`] capability; travel and visa
//! requests only describe which values each field exposes.

pub mod engine;
pub mod fields;
pub mod filterable;
pub mod set;

pub use engine::{apply_filters, apply_filters_with, derive_facets, matches, Facets};
pub use fields::{DateField, DateFields, FilterField, MatchMode};
pub use filterable::Filterable;
pub use set::FilterSet;
