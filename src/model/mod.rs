// src/model/mod.rs
//! Data contracts for the genealogy snapshot. No behavior beyond accessors.

mod family;
mod media;
mod person;
mod relationship;

pub use family::{Family, FamilyStatistics};
pub use media::{media_for_person, MediaItem, MediaKind, MetadataValue, PersonMedia};
pub use person::{present, Person};
pub use relationship::{RelationKind, Relationship};

use std::collections::HashMap;

/// Group key for people with no surname.
pub const UNKNOWN_SURNAME: &str = "Unknown";

/// Id lookup over a person slice.
#[must_use]
pub fn people_by_id(people: &[Person]) -> HashMap<&str, &Person> {
    people.iter().map(|p| (p.id.as_str(), p)).collect()
}
