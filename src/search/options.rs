// src/search/options.rs
//! Distinct values for populating filter controls, and the exported index.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::dates::extract_year;
use crate::model::{present, Person};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub surnames: Vec<String>,
    pub birth_places: Vec<String>,
    pub death_places: Vec<String>,
    pub occupations: Vec<String>,
    pub birth_years: Vec<i32>,
}

#[must_use]
pub fn filter_options(people: &[Person]) -> FilterOptions {
    fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
        values
            .filter(|v| present(*v))
            .flatten()
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    FilterOptions {
        surnames: distinct(people.iter().map(|p| Some(p.last_name.as_str()))),
        birth_places: distinct(people.iter().map(|p| p.birth_place.as_deref())),
        death_places: distinct(people.iter().map(|p| p.death_place.as_deref())),
        occupations: distinct(people.iter().map(|p| p.occupation.as_deref())),
        birth_years: people
            .iter()
            .filter_map(|p| extract_year(p.birth_date.as_deref()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
    }
}

/// Per-person row of the static search index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRow<'a> {
    pub id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_place: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<&'a str>,
}

/// The search index shipped with the static site.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedIndex<'a> {
    pub people: Vec<IndexRow<'a>>,
    #[serde(flatten)]
    pub options: FilterOptions,
}

#[must_use]
pub fn export_index(people: &[Person]) -> ExportedIndex<'_> {
    ExportedIndex {
        people: people
            .iter()
            .map(|p| IndexRow {
                id: &p.id,
                first_name: &p.first_name,
                last_name: &p.last_name,
                full_name: p.display_name(),
                birth_date: p.birth_date.as_deref(),
                birth_place: p.birth_place.as_deref(),
                death_date: p.death_date.as_deref(),
                death_place: p.death_place.as_deref(),
                occupation: p.occupation.as_deref(),
            })
            .collect(),
        options: filter_options(people),
    }
}
