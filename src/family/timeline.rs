// src/family/timeline.rs
//! Birth, death and marriage events for the family timeline.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::dates::{compute_age, extract_year};
use crate::model::{present, Person, RelationKind, Relationship};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Birth,
    Death,
    Marriage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub kind: EventKind,
    pub year: i32,
    pub date: String,
    pub person_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_person_id: Option<String>,
    pub description: String,
}

/// All dated events, sorted by year. Events without a year are skipped.
#[must_use]
pub fn timeline_events(
    people: &[&Person],
    relationships: &[&Relationship],
    reference_year: i32,
) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    for person in people {
        if let Some((date, year)) = dated(person.birth_date.as_deref()) {
            events.push(TimelineEvent {
                id: format!("birth-{}", person.id),
                kind: EventKind::Birth,
                year,
                date: date.to_string(),
                person_id: person.id.clone(),
                related_person_id: None,
                description: format!("Born{}", place_suffix(person.birth_place.as_deref())),
            });
        }
    }

    for person in people {
        if let Some((date, year)) = dated(person.death_date.as_deref()) {
            let age = compute_age(person.birth_date.as_deref(), Some(date), reference_year)
                .map(|a| format!(" at age {a}"))
                .unwrap_or_default();
            events.push(TimelineEvent {
                id: format!("death-{}", person.id),
                kind: EventKind::Death,
                year,
                date: date.to_string(),
                person_id: person.id.clone(),
                related_person_id: None,
                description: format!("Died{}{age}", place_suffix(person.death_place.as_deref())),
            });
        }
    }

    let known: HashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
    for rel in relationships.iter().filter(|r| r.kind == RelationKind::Spouse) {
        let Some((date, year)) = dated(rel.marriage_date.as_deref()) else {
            continue;
        };
        if !known.contains(rel.person1_id.as_str()) || !known.contains(rel.person2_id.as_str()) {
            continue;
        }
        events.push(TimelineEvent {
            id: format!("marriage-{}", rel.id),
            kind: EventKind::Marriage,
            year,
            date: date.to_string(),
            person_id: rel.person1_id.clone(),
            related_person_id: Some(rel.person2_id.clone()),
            description: format!("Married{}", place_suffix(rel.marriage_place.as_deref())),
        });
    }

    events.sort_by_key(|e| e.year);
    events
}

/// Events keyed by decade start (1950, 1960, ...).
#[must_use]
pub fn group_by_decade(events: &[TimelineEvent]) -> BTreeMap<i32, Vec<&TimelineEvent>> {
    let mut groups: BTreeMap<i32, Vec<&TimelineEvent>> = BTreeMap::new();
    for event in events {
        groups.entry(event.year.div_euclid(10) * 10).or_default().push(event);
    }
    groups
}

fn dated(date: Option<&str>) -> Option<(&str, i32)> {
    let date = date?;
    extract_year(Some(date)).filter(|y| *y > 0).map(|y| (date, y))
}

fn place_suffix(place: Option<&str>) -> String {
    match place {
        Some(p) if present(Some(p)) => format!(" in {p}"),
        _ => String::new(),
    }
}
