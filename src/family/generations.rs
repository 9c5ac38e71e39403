// src/family/generations.rs
use std::collections::BTreeMap;

use crate::dates::{extract_year, generation_bucket};
use crate::model::Person;

/// People bucketed by 25-year band relative to `reference_year`.
///
/// A missing birth year counts as the reference year, putting the person in
/// band 0.
#[must_use]
pub fn group_by_generation<'a, I>(people: I, reference_year: i32) -> BTreeMap<i32, Vec<&'a Person>>
where
    I: IntoIterator<Item = &'a Person>,
{
    let mut groups: BTreeMap<i32, Vec<&Person>> = BTreeMap::new();
    for person in people {
        let born = extract_year(person.birth_date.as_deref()).unwrap_or(reference_year);
        groups
            .entry(generation_bucket(born, reference_year))
            .or_default()
            .push(person);
    }
    groups
}

/// Heading for a generation band, given how many bands the family has.
#[must_use]
pub fn generation_label(generation: i32, total_generations: usize) -> String {
    let last = i32::try_from(total_generations).unwrap_or(i32::MAX) - 1;
    match generation {
        0 => "Current Generation".to_string(),
        1 => "Previous Generation".to_string(),
        g if g == last => "Earliest Generation".to_string(),
        g => format!("{} Generations Ago", g + 1),
    }
}
