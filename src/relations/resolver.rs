// src/relations/resolver.rs
//! Classifies a person's incident edges from their own perspective.

use serde::Serialize;
use std::collections::HashMap;

use crate::model::{Person, RelationKind, Relationship};

/// A relative together with the edge that links them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Relative<'a> {
    pub person: &'a Person,
    pub relationship: &'a Relationship,
    /// The subject's role toward `person`: `Parent` means the subject is
    /// `person`'s parent.
    pub kind: RelationKind,
}

/// A person's relatives, bucketed by the relative's role: `children` holds the
/// people the subject is a parent of.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Relatives<'a> {
    pub spouses: Vec<Relative<'a>>,
    pub children: Vec<Relative<'a>>,
    pub parents: Vec<Relative<'a>>,
    pub siblings: Vec<Relative<'a>>,
}

impl<'a> Relatives<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spouses.is_empty()
            && self.children.is_empty()
            && self.parents.is_empty()
            && self.siblings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spouses.len() + self.children.len() + self.parents.len() + self.siblings.len()
    }

    fn push(&mut self, relative: Relative<'a>) {
        match relative.kind {
            RelationKind::Spouse => self.spouses.push(relative),
            RelationKind::Parent => self.children.push(relative),
            RelationKind::Child => self.parents.push(relative),
            RelationKind::Sibling => self.siblings.push(relative),
            RelationKind::Partner | RelationKind::Unknown => {}
        }
    }
}

/// Edges touching `person_id`, classified from that person's side.
///
/// An edge whose counterpart is not in `people_by_id` is dropped. Partner and
/// unrecognised types resolve to themselves and fall outside the four buckets.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn resolve_relationships<'a, R>(
    person_id: &str,
    relationships: R,
    people_by_id: &HashMap<&str, &'a Person>,
) -> Relatives<'a>
where
    R: IntoIterator<Item = &'a Relationship>,
{
    let mut out = Relatives::default();
    for rel in relationships.into_iter().filter(|r| r.touches(person_id)) {
        let Some(person) = people_by_id.get(rel.counterpart(person_id)).copied() else {
            tracing::debug!(relationship = %rel.id, "counterpart not found, dropping");
            continue;
        };
        out.push(Relative {
            person,
            relationship: rel,
            kind: rel.kind_from(person_id),
        });
    }
    out
}
