// src/search/mod.rs
//! Person search: structured filters AND an optional fuzzy text query.

pub mod filters;
pub mod fuzzy;
pub mod options;
pub mod ranking;

pub use filters::{SearchFilters, YearRange};
pub use fuzzy::{FuzzyIndex, FuzzyMatch};
pub use options::{export_index, filter_options, ExportedIndex, FilterOptions};
pub use ranking::{rank_people, relevance, ScoredPerson};

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::config::SearchConfig;
use crate::model::Person;

/// A person list paired with its fuzzy index.
///
/// The index is built once; reuse the engine for every query against the
/// same snapshot.
#[derive(Debug, Clone)]
pub struct SearchEngine<'a> {
    people: &'a [Person],
    index: FuzzyIndex,
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub fn new(people: &'a [Person], config: &SearchConfig) -> Self {
        Self {
            people,
            index: FuzzyIndex::new(people, config),
        }
    }

    /// Filtered people. With a non-blank query, only fuzzy hits remain, best
    /// match first; otherwise sorted by last name then first name.
    #[must_use]
    pub fn search(&self, filters: &SearchFilters, query: Option<&str>) -> Vec<&'a Person> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let mut seen: HashSet<&str> = HashSet::new();
        let mut results: Vec<&'a Person> = self
            .people
            .iter()
            .filter(|p| filters.matches(p))
            .filter(|p| seen.insert(p.id.as_str()))
            .collect();

        match query {
            Some(q) => {
                let scores: HashMap<String, f64> = self
                    .index
                    .search(q)
                    .into_iter()
                    .fold(HashMap::new(), |mut acc, m| {
                        acc.entry(m.id).or_insert(m.score);
                        acc
                    });
                results.retain(|p| scores.contains_key(&p.id));
                results.sort_by(|a, b| {
                    let sa = scores.get(&a.id).copied().unwrap_or(1.0);
                    let sb = scores.get(&b.id).copied().unwrap_or(1.0);
                    sa.total_cmp(&sb)
                });
            }
            None => results.sort_by(|a, b| by_name(a, b)),
        }

        tracing::debug!(
            filters = filters.active_count(),
            query = query.unwrap_or(""),
            results = results.len(),
            "search"
        );
        results
    }

    #[must_use]
    pub fn index(&self) -> &FuzzyIndex {
        &self.index
    }
}

/// One-shot search that builds a throwaway index.
#[must_use]
pub fn search<'a>(
    people: &'a [Person],
    filters: &SearchFilters,
    query: Option<&str>,
    config: &SearchConfig,
) -> Vec<&'a Person> {
    SearchEngine::new(people, config).search(filters, query)
}

/// Last name, then first name.
#[must_use]
pub fn by_name(a: &Person, b: &Person) -> Ordering {
    locale_cmp(&a.last_name, &b.last_name).then_with(|| locale_cmp(&a.first_name, &b.first_name))
}

/// Dictionary order: letters compare case-insensitively first, then lowercase
/// sorts before uppercase.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}
