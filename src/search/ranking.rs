// src/search/ranking.rs
//! Additive relevance scoring for the ranked-search API.

use serde::Serialize;

use crate::model::Person;

const FULL_NAME_HIT: u32 = 10;
const BIOGRAPHY_HIT: u32 = 5;
const EXACT_SURNAME: u32 = 15;
const EXACT_FIRST_NAME: u32 = 15;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredPerson<'a> {
    pub person: &'a Person,
    pub score: u32,
}

/// Additive score of `person` against a lowercased, trimmed query.
#[must_use]
pub fn relevance(person: &Person, query: &str) -> u32 {
    let mut score = 0;
    if person.display_name().to_lowercase().contains(query) {
        score += FULL_NAME_HIT;
    }
    if person
        .biography
        .as_deref()
        .is_some_and(|b| b.to_lowercase().contains(query))
    {
        score += BIOGRAPHY_HIT;
    }
    if person.last_name.to_lowercase() == query {
        score += EXACT_SURNAME;
    }
    if person.first_name.to_lowercase() == query {
        score += EXACT_FIRST_NAME;
    }
    score
}

/// People with a positive score, highest first. Ties keep input order.
#[must_use]
pub fn rank_people<'a>(people: &'a [Person], query: &str) -> Vec<ScoredPerson<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let mut scored: Vec<ScoredPerson> = people
        .iter()
        .map(|person| ScoredPerson {
            person,
            score: relevance(person, &query),
        })
        .filter(|s| s.score > 0)
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
