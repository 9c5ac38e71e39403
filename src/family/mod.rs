// src/family/mod.rs
//! Family aggregation and the per-family derived views.

pub mod aggregate;
pub mod generations;
pub mod notable;
pub mod stats;
pub mod timeline;

pub use aggregate::{aggregate_families, family_members, find_family};
pub use generations::{generation_label, group_by_generation};
pub use notable::{notability_score, notable_members};
pub use stats::{family_relationships, family_stats, FamilyDetailStats, Tally};
pub use timeline::{group_by_decade, timeline_events, EventKind, TimelineEvent};

use serde::Serialize;

use crate::model::{Person, Relationship};

/// Everything a family page shows, derived in one pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyView {
    pub surname: String,
    pub member_ids: Vec<String>,
    pub stats: FamilyDetailStats,
    pub notable_ids: Vec<String>,
    /// `(band, label, member ids)` ordered by band.
    pub generations: Vec<(i32, String, Vec<String>)>,
    pub timeline: Vec<TimelineEvent>,
}

/// `None` when no one carries `surname`.
#[must_use]
pub fn family_view(
    people: &[Person],
    relationships: &[Relationship],
    surname: &str,
    reference_year: i32,
) -> Option<FamilyView> {
    let members = family_members(people, surname);
    let first = members.first()?;
    let rels = family_relationships(&members, relationships);

    let grouped = group_by_generation(members.iter().copied(), reference_year);
    let total = grouped.len();
    let generations = grouped
        .into_iter()
        .map(|(band, ps)| {
            let ids = ps.iter().map(|p| p.id.clone()).collect();
            (band, generation_label(band, total), ids)
        })
        .collect();

    Some(FamilyView {
        surname: first.surname_or_unknown().to_string(),
        member_ids: members.iter().map(|p| p.id.clone()).collect(),
        stats: family_stats(&members, &rels, reference_year),
        notable_ids: notable_members(members.iter().copied())
            .into_iter()
            .map(|p| p.id.clone())
            .collect(),
        generations,
        timeline: timeline_events(&members, &rels, reference_year),
    })
}
