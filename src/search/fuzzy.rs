// src/search/fuzzy.rs
//! Weighted, typo-tolerant matching over the textual person fields.
//!
//! Each query token is scored against every field in `[0, 1]` (0 = exact) and
//! counts as a hit in a field when its score is within the threshold. A hit
//! contributes `score ^ (weight * norm)`, where `norm = 1 / sqrt(tokens)` so
//! long free text weighs less than a name. Every query token must hit some
//! field; the person's score is the product of each token's best hit, so
//! "John Smith" matches across first and last name. Lower is better.

use crate::config::{FieldWeights, SearchConfig};
use crate::model::Person;

/// Stand-in for an exact field hit so the product stays informative.
const EXACT: f64 = f64::EPSILON;
const PREFIX_SCORE: f64 = 0.05;
const SUBSTRING_SCORE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    MiddleName,
    MaidenName,
    Nickname,
    BirthPlace,
    DeathPlace,
    Occupation,
    Biography,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::MiddleName,
        Field::MaidenName,
        Field::Nickname,
        Field::BirthPlace,
        Field::DeathPlace,
        Field::Occupation,
        Field::Biography,
    ];

    fn text(self, p: &Person) -> Option<&str> {
        match self {
            Field::FirstName => Some(p.first_name.as_str()),
            Field::LastName => Some(p.last_name.as_str()),
            Field::MiddleName => p.middle_name.as_deref(),
            Field::MaidenName => p.maiden_name.as_deref(),
            Field::Nickname => p.nickname.as_deref(),
            Field::BirthPlace => p.birth_place.as_deref(),
            Field::DeathPlace => p.death_place.as_deref(),
            Field::Occupation => p.occupation.as_deref(),
            Field::Biography => p.biography.as_deref(),
        }
    }

    fn weight(self, w: &FieldWeights) -> f64 {
        match self {
            Field::FirstName => w.first_name,
            Field::LastName => w.last_name,
            Field::MiddleName => w.middle_name,
            Field::MaidenName => w.maiden_name,
            Field::Nickname => w.nickname,
            Field::BirthPlace => w.birth_place,
            Field::DeathPlace => w.death_place,
            Field::Occupation => w.occupation,
            Field::Biography => w.biography,
        }
    }
}

#[derive(Debug, Clone)]
struct IndexedField {
    field: Field,
    lower: String,
    tokens: Vec<String>,
    norm: f64,
}

#[derive(Debug, Clone)]
struct IndexedPerson {
    id: String,
    fields: Vec<IndexedField>,
}

/// A hit: position in the indexed slice, the person id, and the score.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub position: usize,
    pub id: String,
    pub score: f64,
}

/// Pre-tokenized view of a person list. Build once per snapshot.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    entries: Vec<IndexedPerson>,
    weights: Vec<(Field, f64)>,
    threshold: f64,
    min_token_len: usize,
}

impl FuzzyIndex {
    #[must_use]
    pub fn new(people: &[Person], config: &SearchConfig) -> Self {
        let total: f64 = Field::ALL.iter().map(|f| f.weight(&config.weights)).sum();
        let weights = Field::ALL
            .iter()
            .map(|f| {
                let w = f.weight(&config.weights);
                (*f, if total > 0.0 { w / total } else { 0.0 })
            })
            .collect();

        let entries = people.iter().map(index_person).collect();
        Self {
            entries,
            weights,
            threshold: config.threshold,
            min_token_len: config.min_token_len,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Query tokens that take part in matching.
    #[must_use]
    pub fn query_tokens(&self, query: &str) -> Vec<String> {
        tokenize(query)
            .into_iter()
            .filter(|t| t.chars().count() >= self.min_token_len)
            .collect()
    }

    /// Matches sorted best first; equal scores keep index order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<FuzzyMatch> {
        let tokens = self.query_tokens(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<FuzzyMatch> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                self.score_entry(entry, &tokens).map(|score| FuzzyMatch {
                    position,
                    id: entry.id.clone(),
                    score,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }

    fn score_entry(&self, entry: &IndexedPerson, tokens: &[String]) -> Option<f64> {
        tokens
            .iter()
            .try_fold(1.0, |total, q| self.best_hit(entry, q).map(|hit| total * hit))
    }

    /// Smallest weighted contribution of `q` over the person's fields, or
    /// `None` when no weighted field is within the threshold.
    fn best_hit(&self, entry: &IndexedPerson, q: &str) -> Option<f64> {
        entry
            .fields
            .iter()
            .filter_map(|field| {
                let weight = self.weight_of(field.field);
                if weight <= 0.0 {
                    return None;
                }
                let score = token_score(q, field);
                if score > self.threshold {
                    return None;
                }
                let base = if score <= 0.0 { EXACT } else { score };
                Some(base.powf(weight * field.norm))
            })
            .min_by(f64::total_cmp)
    }

    fn weight_of(&self, field: Field) -> f64 {
        self.weights
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(0.0, |(_, w)| *w)
    }
}

fn index_person(person: &Person) -> IndexedPerson {
    let fields = Field::ALL
        .iter()
        .filter_map(|f| {
            let text = f.text(person)?.trim();
            if text.is_empty() {
                return None;
            }
            let tokens = tokenize(text);
            #[allow(clippy::cast_precision_loss)]
            let norm = 1.0 / (tokens.len().max(1) as f64).sqrt();
            Some(IndexedField {
                field: *f,
                lower: text.to_lowercase(),
                tokens,
                norm,
            })
        })
        .collect();
    IndexedPerson {
        id: person.id.clone(),
        fields,
    }
}

/// Lowercased alphanumeric runs.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn token_score(q: &str, field: &IndexedField) -> f64 {
    if field.tokens.iter().any(|t| t == q) {
        return 0.0;
    }
    if field.tokens.iter().any(|t| t.starts_with(q)) {
        return PREFIX_SCORE;
    }
    if field.lower.contains(q) {
        return SUBSTRING_SCORE;
    }
    field
        .tokens
        .iter()
        .map(|t| {
            let whole = 1.0 - strsim::normalized_levenshtein(q, t);
            let prefix: String = t.chars().take(q.chars().count()).collect();
            let partial = 1.0 - strsim::normalized_levenshtein(q, &prefix);
            // A prefix hit is weaker evidence than a whole-token hit.
            whole.min(partial + SUBSTRING_SCORE)
        })
        .fold(1.0, f64::min)
}
