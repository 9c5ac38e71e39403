// tests/unit_search.rs
use lineage_core::config::SearchConfig;
use lineage_core::model::Person;
use lineage_core::search::{
    export_index, filter_options, rank_people, search, SearchEngine, SearchFilters, YearRange,
};

fn people() -> Vec<Person> {
    let mut ann = Person::new("1", "Ann", "Smith").born("1901");
    ann.photos = vec!["ph1".into()];
    ann.birth_place = Some("Leeds, England".into());

    let mut bob = Person::new("2", "Bob", "Smith").born("1930");
    bob.occupation = Some("Blacksmith".into());

    let mut cara = Person::new("3", "Cara", "Jones").born("1955");
    cara.photos = vec!["ph2".into()];
    cara.biography = Some("Married into the Smithson family of Leeds.".into());

    let dan = Person::new("4", "dan", "smith");
    vec![ann, bob, cara, dan]
}

fn ids(results: &[&Person]) -> Vec<String> {
    results.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn test_no_query_sorts_by_name() {
    let people = people();
    let results = search(&people, &SearchFilters::default(), None, &SearchConfig::default());
    // Lowercase sorts ahead of the same name capitalized.
    assert_eq!(ids(&results), vec!["3", "4", "1", "2"]);
}

#[test]
fn test_filters_compose_conjunctively() {
    let people = people();
    let filters = SearchFilters {
        surname: Some("smith".into()),
        has_photos: true,
        ..SearchFilters::default()
    };
    let results = search(&people, &filters, None, &SearchConfig::default());
    let expected: Vec<String> = people
        .iter()
        .filter(|p| p.last_name.to_lowercase().contains("smith") && !p.photos.is_empty())
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(ids(&results), expected);
}

#[test]
fn test_missing_field_fails_text_filter() {
    let people = people();
    let filters = SearchFilters {
        occupation: Some("smith".into()),
        ..SearchFilters::default()
    };
    let results = search(&people, &filters, None, &SearchConfig::default());
    assert_eq!(ids(&results), vec!["2"]);
}

#[test]
fn test_blank_filter_is_unset() {
    let filters = SearchFilters {
        surname: Some("   ".into()),
        ..SearchFilters::default()
    };
    assert!(filters.is_empty());
    assert_eq!(search(&people(), &filters, None, &SearchConfig::default()).len(), 4);
}

#[test]
fn test_year_range_excludes_missing_dates() {
    let people = people();
    let filters = SearchFilters {
        birth_year: Some(YearRange::new(Some(1900), Some(1950))),
        ..SearchFilters::default()
    };
    let results = search(&people, &filters, None, &SearchConfig::default());
    assert_eq!(ids(&results), vec!["1", "2"]);

    let open = YearRange::default();
    assert!(open.admits(Some("circa")));
    assert!(!open.admits(None));
}

#[test]
fn test_exact_surname_outranks_biography() {
    let people = people();
    let engine = SearchEngine::new(&people, &SearchConfig::default());
    let results = engine.search(&SearchFilters::default(), Some("Jones"));
    assert_eq!(results.first().map(|p| p.id.as_str()), Some("3"));

    let results = engine.search(&SearchFilters::default(), Some("smith"));
    let pos = |id: &str| results.iter().position(|p| p.id == id);
    let ann = pos("1").expect("surname hit");
    let cara = pos("3").expect("biography prefix hit");
    assert!(ann < cara);
}

#[test]
fn test_multi_word_query_spans_fields() {
    let people = vec![Person::new("1", "John", "Smith"), Person::new("2", "Mary", "Jones")];
    let engine = SearchEngine::new(&people, &SearchConfig::default());
    let hits = |q: &str| ids(&engine.search(&SearchFilters::default(), Some(q)));
    assert_eq!(hits("John Smith"), vec!["1"]);
    assert_eq!(hits("Smith John"), vec!["1"]);
    assert_eq!(hits("jon smyth"), vec!["1"]);
    assert!(hits("John Jones").is_empty());
}

#[test]
fn test_query_and_filters_intersect() {
    let people = people();
    let engine = SearchEngine::new(&people, &SearchConfig::default());
    let filters = SearchFilters {
        has_photos: true,
        ..SearchFilters::default()
    };
    let results = engine.search(&filters, Some("ann"));
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_short_query_matches_nothing() {
    let people = people();
    let engine = SearchEngine::new(&people, &SearchConfig::default());
    assert!(engine.search(&SearchFilters::default(), Some("a")).is_empty());
    assert!(engine.index().search("x").is_empty());
}

#[test]
fn test_empty_people() {
    let results = search(&[], &SearchFilters::default(), Some("smith"), &SearchConfig::default());
    assert!(results.is_empty());
    assert!(rank_people(&[], "smith").is_empty());
}

#[test]
fn test_ranked_scores() {
    let people = people();
    let ranked = rank_people(&people, "Smith");
    let scores: Vec<(&str, u32)> = ranked.iter().map(|s| (s.person.id.as_str(), s.score)).collect();
    // full name + exact surname; biography only for Cara.
    assert_eq!(scores, vec![("1", 25), ("2", 25), ("4", 25), ("3", 5)]);
}

#[test]
fn test_filter_options_distinct_sorted() {
    let options = filter_options(&people());
    assert_eq!(options.surnames, vec!["Jones", "Smith", "smith"]);
    assert_eq!(options.birth_years, vec![1901, 1930, 1955]);
    assert_eq!(options.occupations, vec!["Blacksmith"]);
}

#[test]
fn test_export_index_rows() {
    let people = people();
    let index = export_index(&people);
    assert_eq!(index.people.len(), 4);
    assert_eq!(index.people[0].full_name, "Ann Smith");
    let json = serde_json::to_value(&index).unwrap();
    assert!(json.get("surnames").is_some());
    assert_eq!(json["people"][0]["firstName"], "Ann");
}
