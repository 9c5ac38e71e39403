// src/snapshot/load.rs
//! Reads a snapshot from disk.
//!
//! Two layouts are accepted:
//! - a single `snapshot.json` holding `{people, relationships, families, media}`
//! - the processed data directory: `people/index.json` plus one
//!   `people/<id>.json` per person, `relationships/relationships.json`,
//!   `families.json` and `media/index.json`.
//!
//! Missing collections load as empty. A person listed in the index whose
//! file is missing or unreadable is skipped with a warning.

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Snapshot, SnapshotData};
use crate::error::{LineageError, Result};
use crate::model::{Family, MediaItem, Person, Relationship};

pub const SNAPSHOT_FILE: &str = "snapshot.json";
const PEOPLE_DIR: &str = "people";
const INDEX_FILE: &str = "index.json";
const RELATIONSHIPS_FILE: &str = "relationships/relationships.json";
const FAMILIES_FILE: &str = "families.json";
const MEDIA_INDEX_FILE: &str = "media/index.json";

#[derive(Deserialize)]
struct IndexEntry {
    id: String,
}

/// Loads whichever layout `path` points at.
///
/// # Errors
/// Returns `SnapshotNotFound` if `path` holds neither layout, or an I/O or
/// JSON error for unreadable top-level files.
pub fn load_path(path: &Path) -> Result<Snapshot> {
    let data = if path.is_file() {
        load_file(path)?
    } else if path.join(SNAPSHOT_FILE).is_file() {
        load_file(&path.join(SNAPSHOT_FILE))?
    } else if path.join(PEOPLE_DIR).is_dir() {
        load_dir(path)?
    } else {
        return Err(LineageError::SnapshotNotFound(path.to_path_buf()));
    };
    Ok(Snapshot::new(data))
}

/// Reads a single-file snapshot.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid snapshot JSON.
pub fn load_file(path: &Path) -> Result<SnapshotData> {
    read_json(path)
}

/// Reads the processed directory layout rooted at `dir`.
///
/// # Errors
/// Returns error if an index or collection file exists but cannot be parsed.
pub fn load_dir(dir: &Path) -> Result<SnapshotData> {
    let people = load_people(&dir.join(PEOPLE_DIR))?;
    let relationships: Vec<Relationship> = read_optional(&dir.join(RELATIONSHIPS_FILE))?;
    let families: Vec<Family> = read_optional(&dir.join(FAMILIES_FILE))?;
    let media: Vec<MediaItem> = read_optional(&dir.join(MEDIA_INDEX_FILE))?;

    Ok(SnapshotData {
        people,
        relationships,
        families,
        media,
    })
}

fn load_people(people_dir: &Path) -> Result<Vec<Person>> {
    let index_path = people_dir.join(INDEX_FILE);
    let files: Vec<PathBuf> = if index_path.is_file() {
        let entries: Vec<IndexEntry> = read_json(&index_path)?;
        entries
            .into_iter()
            .map(|e| people_dir.join(format!("{}.json", e.id)))
            .collect()
    } else {
        tracing::debug!(dir = %people_dir.display(), "no people index, walking directory");
        person_files(people_dir)?
    };

    let people: Vec<Person> = files
        .par_iter()
        .filter_map(|path| match read_json::<Person>(path) {
            Ok(person) => Some(person),
            Err(e) => {
                tracing::warn!("skipping person: {e}");
                None
            }
        })
        .collect();
    tracing::debug!(loaded = people.len(), listed = files.len(), "people loaded");
    Ok(people)
}

fn person_files(people_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(people_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if entry.file_type().is_file() && is_json && entry.file_name() != INDEX_FILE {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn read_optional<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if path.is_file() {
        read_json(path)
    } else {
        tracing::debug!(path = %path.display(), "absent, using empty collection");
        Ok(T::default())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| LineageError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(&content).map_err(|source| LineageError::Json {
        source,
        path: path.to_path_buf(),
    })
}

/// SHA-256 over every JSON file making up the snapshot at `path`, in sorted
/// path order. Identical data yields the same fingerprint wherever it lives.
///
/// # Errors
/// Returns `SnapshotNotFound` if `path` does not exist, or an I/O error if a
/// file cannot be read or the directory cannot be walked.
pub fn fingerprint(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LineageError::SnapshotNotFound(path.to_path_buf()));
    }
    let mut hasher = Sha256::new();
    if path.is_file() {
        hash_file(&mut hasher, path, path)?;
    } else {
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            let file = entry.path();
            if entry.file_type().is_file() && file.extension().is_some_and(|ext| ext == "json") {
                hash_file(&mut hasher, path, file)?;
            }
        }
    }
    Ok(format!("{:x}", hasher.finalize()))
}

fn hash_file(hasher: &mut Sha256, root: &Path, file: &Path) -> Result<()> {
    let bytes = fs::read(file).map_err(|source| LineageError::Io {
        source,
        path: file.to_path_buf(),
    })?;
    let rel = file.strip_prefix(root).unwrap_or(file);
    hasher.update(rel.to_string_lossy().replace('\\', "/").as_bytes());
    hasher.update([0]);
    hasher.update(&bytes);
    Ok(())
}
