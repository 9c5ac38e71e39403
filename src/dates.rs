// src/dates.rs
//! Year extraction and the coarse age/generation arithmetic built on it.
//!
//! Archive dates are free text ("Born 12 March 1889", "abt. 1740", "1901-04-02").
//! Everything here works on the first four-digit run and never fails: a date
//! without one yields `None`, the only sentinel used across the crate.

use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Width of a generation band in years.
pub const GENERATION_YEARS: i32 = 25;

/// First run of four consecutive digits, as a year.
#[must_use]
pub fn extract_year(date: Option<&str>) -> Option<i32> {
    let m = YEAR_RE.find(date?)?;
    m.as_str().parse().ok()
}

/// `floor((reference - birth) / 25)`. Band 0 is the most recent 25 years.
///
/// This is a cohort approximation, not a pedigree generation count. Births
/// after the reference year land in negative bands.
#[must_use]
pub fn generation_bucket(birth_year: i32, reference_year: i32) -> i32 {
    (reference_year - birth_year).div_euclid(GENERATION_YEARS)
}

/// Year-difference age. `end` defaults to `reference_year` (normally today).
///
/// `None` when the birth date is absent or has no year, or when an end date is
/// given but has no year.
#[must_use]
pub fn compute_age(birth: Option<&str>, end: Option<&str>, reference_year: i32) -> Option<i32> {
    let born = extract_year(birth)?;
    let until = match end {
        Some(d) => extract_year(Some(d))?,
        None => reference_year,
    };
    Some(until - born)
}

/// Death year minus birth year; `None` unless both years parse.
#[must_use]
pub fn lifespan(birth: Option<&str>, death: Option<&str>) -> Option<i32> {
    Some(extract_year(death)? - extract_year(birth)?)
}

/// Number of 25-year bands covered by `[min, max]`, at least 1.
#[must_use]
pub fn generation_span(years: &[i32]) -> usize {
    let (Some(min), Some(max)) = (years.iter().min(), years.iter().max()) else {
        return 1;
    };
    let spread = max - min;
    let bands = (spread + GENERATION_YEARS - 1) / GENERATION_YEARS;
    usize::try_from(bands).unwrap_or(0) + 1
}

/// Current calendar year from the local clock.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// "1950-2010", "b. 1950", or empty.
#[must_use]
pub fn life_span_label(birth: Option<&str>, death: Option<&str>) -> String {
    match (extract_year(birth), extract_year(death)) {
        (Some(b), Some(d)) => format!("{b}-{d}"),
        (Some(b), None) => format!("b. {b}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_from_prose() {
        assert_eq!(extract_year(Some("Born 12 March 1889")), Some(1889));
        assert_eq!(extract_year(Some("1901-04-02")), Some(1901));
        assert_eq!(extract_year(Some("unknown")), None);
        assert_eq!(extract_year(Some("")), None);
        assert_eq!(extract_year(None), None);
    }

    #[test]
    fn bucket_floors_toward_negative() {
        assert_eq!(generation_bucket(2000, 2024), 0);
        assert_eq!(generation_bucket(1999, 2024), 1);
        assert_eq!(generation_bucket(1950, 2024), 2);
        assert_eq!(generation_bucket(2030, 2024), -1);
    }

    #[test]
    fn span_rounds_up() {
        assert_eq!(generation_span(&[]), 1);
        assert_eq!(generation_span(&[1900]), 1);
        assert_eq!(generation_span(&[1900, 1925]), 2);
        assert_eq!(generation_span(&[1900, 1926]), 3);
    }

    #[test]
    fn labels() {
        assert_eq!(life_span_label(Some("1950"), Some("d. 2010")), "1950-2010");
        assert_eq!(life_span_label(Some("1950"), None), "b. 1950");
        assert_eq!(life_span_label(None, Some("2010")), "");
    }
}
