// src/family/stats.rs
//! Detail statistics for one family page.

use serde::Serialize;
use std::collections::HashMap;

use crate::dates::{extract_year, generation_span, lifespan};
use crate::model::{present, Person, RelationKind, Relationship};

/// Years outside `(EARLIEST_PLAUSIBLE_YEAR, reference]` are treated as transcription noise.
const EARLIEST_PLAUSIBLE_YEAR: i32 = 1600;
const MAX_PLAUSIBLE_LIFESPAN: i32 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyDetailStats {
    pub living_members: usize,
    pub marriage_count: usize,
    pub earliest_birth: Option<i32>,
    pub latest_birth: Option<i32>,
    pub average_lifespan: Option<i64>,
    pub generations: usize,
    pub common_places: Vec<Tally>,
    pub common_occupations: Vec<Tally>,
    pub members_with_photos: usize,
    pub members_with_documents: usize,
}

#[must_use]
pub fn family_stats(
    members: &[&Person],
    relationships: &[&Relationship],
    reference_year: i32,
) -> FamilyDetailStats {
    let plausible = |y: &i32| *y > EARLIEST_PLAUSIBLE_YEAR && *y <= reference_year;
    let birth_years: Vec<i32> = members
        .iter()
        .filter_map(|p| extract_year(p.birth_date.as_deref()))
        .filter(plausible)
        .collect();

    FamilyDetailStats {
        living_members: members.iter().filter(|p| !p.is_deceased()).count(),
        marriage_count: relationships
            .iter()
            .filter(|r| r.kind == RelationKind::Spouse)
            .count(),
        earliest_birth: birth_years.iter().min().copied(),
        latest_birth: birth_years.iter().max().copied(),
        average_lifespan: average_lifespan(members),
        generations: generation_span(&birth_years),
        common_places: tally(members.iter().flat_map(|p| {
            [p.birth_place.as_deref(), p.death_place.as_deref()]
        })),
        common_occupations: tally(members.iter().map(|p| p.occupation.as_deref())),
        members_with_photos: members.iter().filter(|p| !p.photos.is_empty()).count(),
        members_with_documents: members.iter().filter(|p| !p.documents.is_empty()).count(),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn average_lifespan(members: &[&Person]) -> Option<i64> {
    let spans: Vec<i32> = members
        .iter()
        .filter_map(|p| lifespan(p.birth_date.as_deref(), p.death_date.as_deref()))
        .filter(|l| *l > 0 && *l < MAX_PLAUSIBLE_LIFESPAN)
        .collect();
    if spans.is_empty() {
        return None;
    }
    let total: i64 = spans.iter().map(|s| i64::from(*s)).sum();
    Some((total as f64 / spans.len() as f64).round() as i64)
}

/// Counts non-blank values, most frequent first; ties keep first appearance.
fn tally<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<Tally> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.filter(|v| present(*v)).flatten() {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    let mut out: Vec<Tally> = order
        .into_iter()
        .map(|v| Tally {
            value: v.to_string(),
            count: counts.get(v).copied().unwrap_or(0),
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Relationships with both endpoints inside the member set.
#[must_use]
pub fn family_relationships<'a>(
    members: &[&Person],
    relationships: &'a [Relationship],
) -> Vec<&'a Relationship> {
    let ids: std::collections::HashSet<&str> = members.iter().map(|p| p.id.as_str()).collect();
    relationships
        .iter()
        .filter(|r| ids.contains(r.person1_id.as_str()) && ids.contains(r.person2_id.as_str()))
        .collect()
}
