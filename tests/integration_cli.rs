// tests/integration_cli.rs
use std::fs;
use std::path::Path;

use clap::Parser;
use lineage_core::cli::handlers::Context;
use lineage_core::cli::{dispatch, Cli};
use lineage_core::exit::LineageExit;
use lineage_core::snapshot::SnapshotCache;
use serde_json::json;

fn seed(dir: &Path, relationships: &serde_json::Value) {
    let snapshot = json!({
        "people": [
            {"id": "alice", "firstName": "Alice", "lastName": "Smith", "birthDate": "1950"},
            {"id": "bob", "firstName": "Bob", "lastName": "Smith", "birthDate": "1952"},
            {"id": "carol", "firstName": "Carol", "lastName": "Smith", "birthDate": "1980"},
        ],
        "relationships": relationships,
    });
    fs::write(dir.join("snapshot.json"), snapshot.to_string()).unwrap();
}

fn clean(dir: &Path) {
    seed(
        dir,
        &json!([
            {"id": "r1", "person1Id": "alice", "person2Id": "bob", "type": "spouse"},
            {"id": "r2", "person1Id": "alice", "person2Id": "carol", "type": "parent"},
        ]),
    );
}

fn run(dir: &Path, args: &[&str]) -> LineageExit {
    let data = dir.to_string_lossy().to_string();
    let mut argv = vec!["lineage", "--data", data.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    dispatch::execute(cli).unwrap()
}

#[test]
fn test_commands_succeed_on_clean_data() {
    let d = tempfile::tempdir().unwrap();
    clean(d.path());
    assert_eq!(run(d.path(), &["families"]), LineageExit::Success);
    assert_eq!(run(d.path(), &["family", "smith", "--json"]), LineageExit::Success);
    assert_eq!(run(d.path(), &["person", "carol"]), LineageExit::Success);
    assert_eq!(run(d.path(), &["search", "alice", "--json"]), LineageExit::Success);
    assert_eq!(run(d.path(), &["layout", "--ticks", "20"]), LineageExit::Success);
    assert_eq!(run(d.path(), &["check"]), LineageExit::Success);
    assert_eq!(run(d.path(), &["index"]), LineageExit::Success);
}

#[test]
fn test_unknown_names_are_invalid_input() {
    let d = tempfile::tempdir().unwrap();
    clean(d.path());
    assert_eq!(run(d.path(), &["person", "nobody"]), LineageExit::InvalidInput);
    assert_eq!(run(d.path(), &["family", "Jones"]), LineageExit::InvalidInput);
}

#[test]
fn test_check_reports_warnings() {
    let d = tempfile::tempdir().unwrap();
    seed(
        d.path(),
        &json!([{"id": "r1", "person1Id": "alice", "person2Id": "ghost", "type": "spouse"}]),
    );
    assert_eq!(run(d.path(), &["check", "--json"]), LineageExit::IntegrityWarnings);
}

#[test]
fn test_missing_data_is_an_error() {
    let d = tempfile::tempdir().unwrap();
    let data = d.path().join("absent");
    let cli = Cli::try_parse_from(["lineage", "families", "--data", &data.to_string_lossy()]).unwrap();
    assert!(dispatch::execute(cli).is_err());
}

#[test]
fn test_context_loads_directly_or_through_cache() {
    let d = tempfile::tempdir().unwrap();
    clean(d.path());
    let direct = Context::open(d.path(), None).unwrap();
    assert_eq!(direct.snapshot.people().len(), 3);

    let cache = SnapshotCache::new();
    let first = Context::open_cached(d.path(), None, &cache).unwrap();
    let second = Context::open_cached(d.path(), None, &cache).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first.snapshot, &second.snapshot));
    assert_eq!(cache.len(), 1);
    assert!(Context::open_cached(&d.path().join("absent"), None, &cache).is_err());
}

#[test]
fn test_search_args_build_filters() {
    let cli = Cli::try_parse_from([
        "lineage",
        "search",
        "--surname",
        "smith",
        "--born-from",
        "1900",
        "--has-photos",
    ])
    .unwrap();
    let lineage_core::cli::args::Commands::Search(args) = cli.command else {
        panic!("expected search");
    };
    let filters = args.filters();
    assert_eq!(filters.surname.as_deref(), Some("smith"));
    assert!(filters.has_photos);
    assert!(filters.birth_year.is_some());
    assert!(filters.death_year.is_none());
}
