// src/model/media.rs
//! Photo and document records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Document,
}

/// Open metadata value.
///
/// Keys are free-form. Importers use `width`/`height` (numbers) for photos and
/// `pages` (number) for documents; everything else is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    /// Stored name under the media directory.
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub people_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl MediaItem {
    #[must_use]
    pub fn depicts(&self, person_id: &str) -> bool {
        self.people_ids.iter().any(|id| id == person_id)
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        match (self.metadata.get("width"), self.metadata.get("height")) {
            (Some(MetadataValue::Number(w)), Some(MetadataValue::Number(h))) => Some((*w, *h)),
            _ => None,
        }
    }
}

/// A person's media, split the way the detail page shows it.
#[derive(Debug, Clone, Default)]
pub struct PersonMedia<'a> {
    pub photos: Vec<&'a MediaItem>,
    pub documents: Vec<&'a MediaItem>,
}

/// Media items that list `person_id` among their people.
#[must_use]
pub fn media_for_person<'a>(media: &'a [MediaItem], person_id: &str) -> PersonMedia<'a> {
    let mut out = PersonMedia::default();
    for item in media.iter().filter(|m| m.depicts(person_id)) {
        match item.kind {
            MediaKind::Photo => out.photos.push(item),
            MediaKind::Document => out.documents.push(item),
        }
    }
    out
}
