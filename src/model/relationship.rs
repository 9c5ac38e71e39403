// src/model/relationship.rs
//! Typed edges between two people.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship type, stored from `person1`'s perspective toward `person2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// `person1` is the parent of `person2`.
    Parent,
    /// `person1` is the child of `person2`.
    Child,
    Spouse,
    Sibling,
    Partner,
    /// Any type string outside the known set. Kept so archival data loads.
    #[serde(other)]
    Unknown,
}

impl RelationKind {
    /// The same edge seen from `person2`'s side.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            other => other,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Spouse => "spouse",
            Self::Sibling => "sibling",
            Self::Partner => "partner",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub person1_id: String,
    pub person2_id: String,
    #[serde(rename = "type")]
    pub kind: RelationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divorce_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divorce_place: Option<String>,

    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Relationship {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        person1_id: impl Into<String>,
        kind: RelationKind,
        person2_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            person1_id: person1_id.into(),
            person2_id: person2_id.into(),
            kind,
            start_date: None,
            end_date: None,
            marriage_date: None,
            marriage_place: None,
            divorce_date: None,
            divorce_place: None,
            verified: false,
            source: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn touches(&self, person_id: &str) -> bool {
        self.person1_id == person_id || self.person2_id == person_id
    }

    /// The id on the other end from `person_id`.
    #[must_use]
    pub fn counterpart(&self, person_id: &str) -> &str {
        if self.person1_id == person_id {
            &self.person2_id
        } else {
            &self.person1_id
        }
    }

    /// Type as seen by `person_id`, inverting when it sits on the `person2` side.
    #[must_use]
    pub fn kind_from(&self, person_id: &str) -> RelationKind {
        if self.person1_id == person_id {
            self.kind
        } else {
            self.kind.inverse()
        }
    }
}
