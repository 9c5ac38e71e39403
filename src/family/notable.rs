// src/family/notable.rs
use crate::model::Person;

/// Members surfaced on a family page.
pub const NOTABLE_LIMIT: usize = 5;

/// `biography length + 50 per photo + 25 if an occupation is recorded`.
#[must_use]
pub fn notability_score(person: &Person) -> usize {
    let occupation = if person.has_occupation() { 25 } else { 0 };
    person.biography_len() + 50 * person.photos.len() + occupation
}

/// Top five by [`notability_score`], descending. Equal scores keep input order.
#[must_use]
pub fn notable_members<'a, I>(people: I) -> Vec<&'a Person>
where
    I: IntoIterator<Item = &'a Person>,
{
    let mut scored: Vec<(usize, &Person)> =
        people.into_iter().map(|p| (notability_score(p), p)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(NOTABLE_LIMIT).map(|(_, p)| p).collect()
}
