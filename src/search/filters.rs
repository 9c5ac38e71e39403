// src/search/filters.rs
//! Structured, conjunctive person filters.

use serde::{Deserialize, Serialize};

use crate::dates::extract_year;
use crate::model::Person;

/// Inclusive year bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<i32>,
}

impl YearRange {
    #[must_use]
    pub fn new(from: Option<i32>, to: Option<i32>) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// A missing date never passes. A date without a year passes only an
    /// unbounded range.
    #[must_use]
    pub fn admits(&self, date: Option<&str>) -> bool {
        let Some(date) = date else {
            return false;
        };
        if self.is_open() {
            return true;
        }
        let Some(year) = extract_year(Some(date)) else {
            return false;
        };
        self.from.map_or(true, |f| year >= f) && self.to.map_or(true, |t| year <= t)
    }
}

/// Every set field is one predicate; a person must pass all of them.
///
/// Text filters are case-insensitive substring checks and fail when the
/// person lacks the field. Blank text counts as unset.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<YearRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<YearRange>,
    #[serde(default)]
    pub has_photos: bool,
    #[serde(default)]
    pub has_documents: bool,
}

impl SearchFilters {
    /// Number of active predicates.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let texts = [
            &self.surname,
            &self.first_name,
            &self.birth_place,
            &self.death_place,
            &self.occupation,
        ];
        texts.iter().filter(|t| needle(t.as_deref()).is_some()).count()
            + usize::from(self.birth_year.is_some())
            + usize::from(self.death_year.is_some())
            + usize::from(self.has_photos)
            + usize::from(self.has_documents)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        contains(Some(person.last_name.as_str()), self.surname.as_deref())
            && contains(Some(person.first_name.as_str()), self.first_name.as_deref())
            && contains(person.birth_place.as_deref(), self.birth_place.as_deref())
            && contains(person.death_place.as_deref(), self.death_place.as_deref())
            && contains(person.occupation.as_deref(), self.occupation.as_deref())
            && self
                .birth_year
                .map_or(true, |r| r.admits(person.birth_date.as_deref()))
            && self
                .death_year
                .map_or(true, |r| r.admits(person.death_date.as_deref()))
            && (!self.has_photos || !person.photos.is_empty())
            && (!self.has_documents || !person.documents.is_empty())
    }
}

fn needle(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|f| !f.is_empty())
}

fn contains(haystack: Option<&str>, filter: Option<&str>) -> bool {
    let Some(wanted) = needle(filter) else {
        return true;
    };
    haystack.is_some_and(|h| h.to_lowercase().contains(&wanted.to_lowercase()))
}
