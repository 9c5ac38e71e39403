// src/model/person.rs
//! The person record as imported from the archive.

use serde::{Deserialize, Serialize};

/// One individual. Read-only after import.
///
/// Relationship id caches (`spouseIds`, `childrenIds`, ...) present in older
/// exports are ignored on load; [`crate::relations::RelationIndex`] rebuilds
/// them from the relationship list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_place: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Free text; paragraphs are separated by blank lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Media ids, in archive order.
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Person {
    #[must_use]
    pub fn new(id: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn born(mut self, date: impl Into<String>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn died(mut self, date: impl Into<String>) -> Self {
        self.death_date = Some(date.into());
        self
    }

    /// "First Last", as shown on cards and tree nodes.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn is_deceased(&self) -> bool {
        present(self.death_date.as_deref())
    }

    #[must_use]
    pub fn biography_len(&self) -> usize {
        self.biography.as_deref().map_or(0, |b| b.chars().count())
    }

    /// Biography split on blank lines, empty paragraphs removed.
    #[must_use]
    pub fn biography_paragraphs(&self) -> Vec<&str> {
        self.biography
            .as_deref()
            .map(|b| {
                b.split("\n\n")
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_occupation(&self) -> bool {
        present(self.occupation.as_deref())
    }

    /// Surname used as the family grouping key.
    #[must_use]
    pub fn surname_or_unknown(&self) -> &str {
        let trimmed = self.last_name.trim();
        if trimmed.is_empty() {
            crate::model::UNKNOWN_SURNAME
        } else {
            trimmed
        }
    }
}

/// True for `Some` non-blank text.
#[must_use]
pub fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
