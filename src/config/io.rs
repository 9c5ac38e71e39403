// src/config/io.rs
use std::fs;
use std::path::{Path, PathBuf};

use super::types::LineageToml;
use crate::error::{LineageError, Result};

pub const CONFIG_FILE: &str = "lineage.toml";

/// First existing `lineage.toml` in `dirs`, in order.
#[must_use]
pub fn find_config(dirs: &[&Path]) -> Option<PathBuf> {
    dirs.iter()
        .map(|d| d.join(CONFIG_FILE))
        .find(|p| p.is_file())
}

/// Reads and parses one config file.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_file(path: &Path) -> Result<LineageToml> {
    let content = fs::read_to_string(path).map_err(|source| LineageError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content).map_err(|e| match e {
        LineageError::Config { message, .. } => LineageError::Config {
            message,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })
}

/// Parses config text. Missing sections and keys take their defaults.
///
/// # Errors
/// Returns error if the text is not valid TOML for the config schema.
pub fn parse_toml(content: &str) -> Result<LineageToml> {
    toml::from_str(content).map_err(|e| LineageError::Config {
        message: e.to_string(),
        path: None,
    })
}

/// Writes `config` as TOML.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(config: &LineageToml, path: &Path) -> Result<()> {
    let text = toml::to_string_pretty(config).map_err(|e| LineageError::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;
    fs::write(path, text).map_err(|source| LineageError::Io {
        source,
        path: path.to_path_buf(),
    })
}
