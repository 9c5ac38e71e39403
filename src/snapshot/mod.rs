// src/snapshot/mod.rs
//! The in-memory genealogy snapshot and its loaders.
//!
//! A [`Snapshot`] is read-only once built. Derived views (families, relation
//! index) are computed at construction; everything else is computed on demand
//! by the `family`, `search`, `relations` and `layout` modules.

pub mod audit;
pub mod cache;
pub mod load;

pub use audit::{audit, Finding, FindingKind, Severity};
pub use cache::SnapshotCache;
pub use load::{fingerprint, load_dir, load_file, load_path, SNAPSHOT_FILE};

use serde::{Deserialize, Serialize};

use crate::family::aggregate_families;
use crate::model::{media_for_person, people_by_id, Family, MediaItem, Person, PersonMedia, Relationship};
use crate::relations::{RelationIndex, Relatives};

/// On-disk shape of `snapshot.json`. Every collection may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub families: Vec<Family>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    people: Vec<Person>,
    relationships: Vec<Relationship>,
    families: Vec<Family>,
    media: Vec<MediaItem>,
    index: RelationIndex,
}

impl Snapshot {
    /// Builds the snapshot. Families are recomputed from `people` when the
    /// data carries none.
    #[must_use]
    pub fn new(data: SnapshotData) -> Self {
        let SnapshotData {
            people,
            relationships,
            mut families,
            media,
        } = data;
        if families.is_empty() && !people.is_empty() {
            families = aggregate_families(&people);
        }
        let index = RelationIndex::build(&relationships);
        tracing::debug!(
            people = people.len(),
            relationships = relationships.len(),
            families = families.len(),
            media = media.len(),
            "snapshot built"
        );
        Self {
            people,
            relationships,
            families,
            media,
            index,
        }
    }

    #[must_use]
    pub fn from_parts(people: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self::new(SnapshotData {
            people,
            relationships,
            ..SnapshotData::default()
        })
    }

    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    #[must_use]
    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    #[must_use]
    pub fn relation_index(&self) -> &RelationIndex {
        &self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Resolved relatives of `person_id`, via the load-time index.
    #[must_use]
    pub fn relatives(&self, person_id: &str) -> Relatives<'_> {
        let by_id = people_by_id(&self.people);
        self.index.resolve(person_id, &self.relationships, &by_id)
    }

    #[must_use]
    pub fn media_for(&self, person_id: &str) -> PersonMedia<'_> {
        media_for_person(&self.media, person_id)
    }

    /// Back to the serializable shape.
    #[must_use]
    pub fn to_data(&self) -> SnapshotData {
        SnapshotData {
            people: self.people.clone(),
            relationships: self.relationships.clone(),
            families: self.families.clone(),
            media: self.media.clone(),
        }
    }
}

impl From<SnapshotData> for Snapshot {
    fn from(data: SnapshotData) -> Self {
        Self::new(data)
    }
}
