// src/family/aggregate.rs
//! Surname grouping into family records.

use std::collections::HashMap;

use crate::dates::{extract_year, generation_span};
use crate::model::{Family, FamilyStatistics, Person};

/// One family per distinct surname (case-insensitive), in first-seen order.
///
/// Every person lands in exactly one family; an empty surname groups under
/// `"Unknown"`. The first spelling seen becomes the family surname and the
/// rest are kept as alternates.
#[must_use]
pub fn aggregate_families(people: &[Person]) -> Vec<Family> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&Person>> = HashMap::new();

    for person in people {
        let key = person.surname_or_unknown().to_lowercase();
        let bucket = groups.entry(key.clone()).or_default();
        if bucket.is_empty() {
            order.push(key);
        }
        bucket.push(person);
    }

    let families: Vec<Family> = order
        .iter()
        .filter_map(|key| groups.get(key))
        .map(|members| build_family(members))
        .collect();

    tracing::debug!(people = people.len(), families = families.len(), "aggregated families");
    families
}

fn build_family(members: &[&Person]) -> Family {
    let surname = members
        .first()
        .map(|p| p.surname_or_unknown().to_string())
        .unwrap_or_default();

    let mut alternate_spellings: Vec<String> = Vec::new();
    for person in members {
        let spelling = person.surname_or_unknown();
        if spelling != surname && !alternate_spellings.iter().any(|s| s == spelling) {
            alternate_spellings.push(spelling.to_string());
        }
    }

    Family {
        surname,
        alternate_spellings,
        member_ids: members.iter().map(|p| p.id.clone()).collect(),
        statistics: statistics(members),
        ..Family::default()
    }
}

fn statistics(members: &[&Person]) -> FamilyStatistics {
    let dated: Vec<(i32, &Person)> = members
        .iter()
        .filter_map(|p| extract_year(p.birth_date.as_deref()).map(|y| (y, *p)))
        .collect();
    let years: Vec<i32> = dated.iter().map(|(y, _)| *y).collect();

    FamilyStatistics {
        total_members: members.len(),
        generations: generation_span(&years),
        oldest_member: first_by(&dated, |candidate, best| candidate < best),
        youngest_member: first_by(&dated, |candidate, best| candidate > best),
    }
}

/// Id of the first entry whose year beats every earlier one; ties keep the earlier.
fn first_by(dated: &[(i32, &Person)], beats: impl Fn(i32, i32) -> bool) -> Option<String> {
    let mut best: Option<(i32, &Person)> = None;
    for &(year, person) in dated {
        match best {
            Some((best_year, _)) if !beats(year, best_year) => {}
            _ => best = Some((year, person)),
        }
    }
    best.map(|(_, p)| p.id.clone())
}

/// Case-insensitive lookup of a family by surname.
#[must_use]
pub fn find_family<'a>(families: &'a [Family], surname: &str) -> Option<&'a Family> {
    families.iter().find(|f| f.matches_surname(surname))
}

/// People whose surname matches `surname`, case-insensitively, in input order.
#[must_use]
pub fn family_members<'a>(people: &'a [Person], surname: &str) -> Vec<&'a Person> {
    let wanted = surname.trim().to_lowercase();
    people
        .iter()
        .filter(|p| p.surname_or_unknown().to_lowercase() == wanted)
        .collect()
}
