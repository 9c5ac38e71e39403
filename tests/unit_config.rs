// tests/unit_config.rs
use std::fs;

use lineage_core::config::io::{parse_toml, save_to_file};
use lineage_core::config::{Config, LayoutConfig, LineageToml, SearchConfig, CONFIG_FILE};
use lineage_core::error::LineageError;

#[test]
fn test_defaults() {
    let s = SearchConfig::default();
    assert!((s.threshold - 0.4).abs() < 1e-12);
    assert_eq!(s.min_token_len, 2);
    assert!((s.weights.last_name - 0.4).abs() < 1e-12);
    assert!((s.weights.occupation - 0.2).abs() < 1e-12);

    let l = LayoutConfig::default();
    assert!((l.link_distance - 100.0).abs() < 1e-12);
    assert!((l.charge_strength + 300.0).abs() < 1e-12);
    assert!((l.collide_radius - 40.0).abs() < 1e-12);
    assert!((l.max_zoom - 3.0).abs() < 1e-12);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let parsed = parse_toml("[search]\nthreshold = 0.2\n\n[dates]\nreference_year = 2000\n").unwrap();
    assert!((parsed.search.threshold - 0.2).abs() < 1e-12);
    assert_eq!(parsed.search.min_token_len, 2);
    assert_eq!(parsed.layout, LayoutConfig::default());
    assert_eq!(parsed.dates.reference_year, Some(2000));
}

#[test]
fn test_weights_table() {
    let parsed = parse_toml("[search.weights]\nbiography = 0.5\n").unwrap();
    assert!((parsed.search.weights.biography - 0.5).abs() < 1e-12);
    assert!((parsed.search.weights.first_name - 0.3).abs() < 1e-12);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse_toml("[search\nthreshold = ").unwrap_err();
    assert!(matches!(err, LineageError::Config { .. }));
}

#[test]
fn test_load_finds_file_in_search_dirs() {
    let empty = tempfile::tempdir().unwrap();
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[layout]\nwidth = 640.0\n").unwrap();

    let c = Config::load(None, &[empty.path(), d.path()]).unwrap();
    assert!((c.layout.width - 640.0).abs() < 1e-12);
    assert_eq!(c.source, Some(d.path().join(CONFIG_FILE)));
}

#[test]
fn test_load_without_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load(None, &[d.path()]).unwrap();
    assert!(c.source.is_none());
    assert_eq!(c.layout, LayoutConfig::default());
}

#[test]
fn test_explicit_missing_file_errors() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&d.path().join("nope.toml")), &[]).unwrap_err();
    assert!(matches!(err, LineageError::Io { .. }));
}

#[test]
fn test_reference_year_override() {
    let mut c = Config::new();
    c.dates.reference_year = Some(1999);
    assert_eq!(c.reference_year(), 1999);
}

#[test]
fn test_validate_rejects_bad_zoom() {
    let mut c = Config::new();
    assert!(c.validate().is_ok());
    c.layout.min_zoom = 5.0;
    assert!(c.validate().is_err());
}

#[test]
fn test_save_and_reload() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(CONFIG_FILE);
    let mut toml = LineageToml::default();
    toml.search.threshold = 0.25;
    toml.dates.reference_year = Some(1950);
    save_to_file(&toml, &path).unwrap();

    let c = Config::load(Some(&path), &[]).unwrap();
    assert!((c.search.threshold - 0.25).abs() < 1e-12);
    assert_eq!(c.dates.reference_year, Some(1950));
}
