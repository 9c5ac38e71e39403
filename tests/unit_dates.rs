// tests/unit_dates.rs
use lineage_core::dates::{compute_age, extract_year, generation_bucket, lifespan};

#[test]
fn test_extract_year_first_run_wins() {
    assert_eq!(extract_year(Some("abt. 1740, bapt. 1741")), Some(1740));
    assert_eq!(extract_year(Some("12/03/89")), None);
}

#[test]
fn test_extract_year_idempotent() {
    let date = Some("Born 12 March 1889");
    assert_eq!(extract_year(date), extract_year(date));
    assert_eq!(extract_year(None), extract_year(None));
}

#[test]
fn test_compute_age_defaults_to_reference_year() {
    assert_eq!(compute_age(Some("1950"), None, 2024), Some(74));
    assert_eq!(compute_age(Some("1950"), Some("June 2010"), 2024), Some(60));
}

#[test]
fn test_compute_age_needs_birth_year() {
    assert_eq!(compute_age(None, Some("2010"), 2024), None);
    assert_eq!(compute_age(Some("unknown"), None, 2024), None);
    assert_eq!(compute_age(Some("1950"), Some("unknown"), 2024), None);
}

#[test]
fn test_lifespan_requires_both_years() {
    assert_eq!(lifespan(Some("1900"), Some("1975")), Some(75));
    assert_eq!(lifespan(Some("1900"), None), None);
}

#[test]
fn test_generation_bucket_bands() {
    assert_eq!(generation_bucket(1975, 2000), 1);
    assert_eq!(generation_bucket(1976, 2000), 0);
    assert_eq!(generation_bucket(1900, 2000), 4);
}
