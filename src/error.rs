// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineageError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("No genealogy snapshot found at {0}")]
    SnapshotNotFound(PathBuf),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LineageError>;

// Bare I/O errors carry no path; prefer `map_err` with the file at hand.
impl From<std::io::Error> for LineageError {
    fn from(source: std::io::Error) -> Self {
        LineageError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Directory walks only happen while loading or fingerprinting a snapshot.
impl From<walkdir::Error> for LineageError {
    fn from(e: walkdir::Error) -> Self {
        LineageError::Other(e.to_string())
    }
}
