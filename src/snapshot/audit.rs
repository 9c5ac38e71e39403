// src/snapshot/audit.rs
//! Integrity report over a loaded snapshot.
//!
//! Nothing here rejects data. Derived views already drop what they cannot
//! resolve; the audit only says what was dropped and why.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::Snapshot;
use crate::model::{RelationKind, Relationship};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FindingKind {
    DuplicatePersonId {
        person_id: String,
    },
    DanglingEndpoint {
        relationship_id: String,
        person_id: String,
    },
    SelfRelationship {
        relationship_id: String,
        person_id: String,
    },
    DuplicateEdge {
        relationship_id: String,
        duplicate_of: String,
    },
    /// Both people claim to be the other's parent.
    ContradictoryEdge {
        relationship_id: String,
        conflicts_with: String,
    },
    UnknownMediaPerson {
        media_id: String,
        person_id: String,
    },
}

impl FindingKind {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateEdge { .. } | Self::UnknownMediaPerson { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePersonId { person_id } => {
                write!(f, "person id {person_id} appears more than once")
            }
            Self::DanglingEndpoint {
                relationship_id,
                person_id,
            } => write!(f, "relationship {relationship_id} references unknown person {person_id}"),
            Self::SelfRelationship {
                relationship_id,
                person_id,
            } => write!(f, "relationship {relationship_id} links {person_id} to themselves"),
            Self::DuplicateEdge {
                relationship_id,
                duplicate_of,
            } => write!(f, "relationship {relationship_id} duplicates {duplicate_of}"),
            Self::ContradictoryEdge {
                relationship_id,
                conflicts_with,
            } => write!(f, "relationship {relationship_id} contradicts {conflicts_with}"),
            Self::UnknownMediaPerson {
                media_id,
                person_id,
            } => write!(f, "media {media_id} references unknown person {person_id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: FindingKind,
    pub message: String,
}

impl From<FindingKind> for Finding {
    fn from(kind: FindingKind) -> Self {
        Self {
            severity: kind.severity(),
            message: kind.to_string(),
            kind,
        }
    }
}

/// Every finding, people first, then relationships in list order, then media.
#[must_use]
pub fn audit(snapshot: &Snapshot) -> Vec<Finding> {
    let mut kinds = Vec::new();
    let known = check_people(snapshot, &mut kinds);
    check_relationships(snapshot.relationships(), &known, &mut kinds);

    for item in snapshot.media() {
        for person_id in item.people_ids.iter().filter(|id| !known.contains(id.as_str())) {
            kinds.push(FindingKind::UnknownMediaPerson {
                media_id: item.id.clone(),
                person_id: person_id.clone(),
            });
        }
    }

    let findings: Vec<Finding> = kinds.into_iter().map(Finding::from).collect();
    for f in findings.iter().filter(|f| f.severity == Severity::Warning) {
        tracing::warn!("{}", f.message);
    }
    findings
}

fn check_people<'a>(snapshot: &'a Snapshot, out: &mut Vec<FindingKind>) -> HashSet<&'a str> {
    let mut known = HashSet::new();
    for person in snapshot.people() {
        if !known.insert(person.id.as_str()) {
            out.push(FindingKind::DuplicatePersonId {
                person_id: person.id.clone(),
            });
        }
    }
    known
}

/// Edge key with the lower id first, so A->B parent and B->A child coincide.
type EdgeKey<'a> = (&'a str, &'a str, RelationKind);

fn edge_key(rel: &Relationship) -> EdgeKey<'_> {
    let (a, b) = (rel.person1_id.as_str(), rel.person2_id.as_str());
    if a <= b {
        (a, b, rel.kind)
    } else {
        (b, a, rel.kind.inverse())
    }
}

fn check_relationships(relationships: &[Relationship], known: &HashSet<&str>, out: &mut Vec<FindingKind>) {
    let mut seen: HashMap<EdgeKey<'_>, &str> = HashMap::new();

    for rel in relationships {
        for end in [&rel.person1_id, &rel.person2_id] {
            if !known.contains(end.as_str()) {
                out.push(FindingKind::DanglingEndpoint {
                    relationship_id: rel.id.clone(),
                    person_id: end.clone(),
                });
            }
        }
        if rel.person1_id == rel.person2_id {
            out.push(FindingKind::SelfRelationship {
                relationship_id: rel.id.clone(),
                person_id: rel.person1_id.clone(),
            });
            continue;
        }

        let key = edge_key(rel);
        if let Some(first) = seen.get(&key) {
            out.push(FindingKind::DuplicateEdge {
                relationship_id: rel.id.clone(),
                duplicate_of: (*first).to_string(),
            });
            continue;
        }
        if matches!(key.2, RelationKind::Parent | RelationKind::Child) {
            if let Some(other) = seen.get(&(key.0, key.1, key.2.inverse())) {
                out.push(FindingKind::ContradictoryEdge {
                    relationship_id: rel.id.clone(),
                    conflicts_with: (*other).to_string(),
                });
            }
        }
        seen.insert(key, rel.id.as_str());
    }
}
