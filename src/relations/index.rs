// src/relations/index.rs
//! Load-time adjacency index over the relationship list.

use std::collections::HashMap;

use crate::model::{Person, RelationKind, Relationship};
use crate::relations::resolver::{resolve_relationships, Relatives};

/// Person id -> positions of incident edges in the relationship list.
///
/// Built once per snapshot. The relationship list stays the only source of
/// truth; per-person id lists are derived from it on request.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    incident: HashMap<String, Vec<usize>>,
}

impl RelationIndex {
    #[must_use]
    pub fn build(relationships: &[Relationship]) -> Self {
        let mut incident: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, rel) in relationships.iter().enumerate() {
            incident.entry(rel.person1_id.clone()).or_default().push(i);
            if rel.person2_id != rel.person1_id {
                incident.entry(rel.person2_id.clone()).or_default().push(i);
            }
        }
        Self { incident }
    }

    /// Edges touching `person_id`, in list order.
    pub fn edges_of<'a>(
        &'a self,
        person_id: &str,
        relationships: &'a [Relationship],
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.incident
            .get(person_id)
            .into_iter()
            .flatten()
            .filter_map(move |&i| relationships.get(i))
    }

    /// Same result as [`resolve_relationships`], without scanning every edge.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn resolve<'a>(
        &'a self,
        person_id: &str,
        relationships: &'a [Relationship],
        people_by_id: &HashMap<&str, &'a Person>,
    ) -> Relatives<'a> {
        resolve_relationships(person_id, self.edges_of(person_id, relationships), people_by_id)
    }

    /// Counterpart ids where `person_id` holds role `kind` toward them.
    #[must_use]
    pub fn related_ids(
        &self,
        person_id: &str,
        kind: RelationKind,
        relationships: &[Relationship],
    ) -> Vec<String> {
        self.edges_of(person_id, relationships)
            .filter(|r| r.kind_from(person_id) == kind)
            .map(|r| r.counterpart(person_id).to_string())
            .collect()
    }

    #[must_use]
    pub fn spouse_ids(&self, person_id: &str, relationships: &[Relationship]) -> Vec<String> {
        self.related_ids(person_id, RelationKind::Spouse, relationships)
    }

    #[must_use]
    pub fn children_ids(&self, person_id: &str, relationships: &[Relationship]) -> Vec<String> {
        self.related_ids(person_id, RelationKind::Parent, relationships)
    }

    #[must_use]
    pub fn parent_ids(&self, person_id: &str, relationships: &[Relationship]) -> Vec<String> {
        self.related_ids(person_id, RelationKind::Child, relationships)
    }

    #[must_use]
    pub fn sibling_ids(&self, person_id: &str, relationships: &[Relationship]) -> Vec<String> {
        self.related_ids(person_id, RelationKind::Sibling, relationships)
    }

    #[must_use]
    pub fn degree(&self, person_id: &str) -> usize {
        self.incident.get(person_id).map_or(0, Vec::len)
    }
}
