// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{DatesConfig, FieldWeights, LayoutConfig, LineageToml, SearchConfig};

use crate::error::Result;
use std::path::Path;

/// Runtime configuration: the parsed file plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub search: SearchConfig,
    pub layout: LayoutConfig,
    pub dates: DatesConfig,
    pub source: Option<std::path::PathBuf>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `explicit` if given, else the first `lineage.toml` found in
    /// `search_dirs`, else defaults.
    ///
    /// # Errors
    /// Returns error if a config file exists but cannot be read or parsed.
    pub fn load(explicit: Option<&Path>, search_dirs: &[&Path]) -> Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => io::find_config(search_dirs),
        };
        let Some(path) = path else {
            tracing::debug!("no {CONFIG_FILE} found, using defaults");
            return Ok(Self::new());
        };
        let parsed = io::load_file(&path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Self::from_toml(parsed, Some(path)))
    }

    #[must_use]
    pub fn from_toml(parsed: LineageToml, source: Option<std::path::PathBuf>) -> Self {
        Self {
            search: parsed.search,
            layout: parsed.layout,
            dates: parsed.dates,
            source,
        }
    }

    /// Configured reference year, or the current year.
    #[must_use]
    pub fn reference_year(&self) -> i32 {
        self.dates
            .reference_year
            .unwrap_or_else(crate::dates::current_year)
    }

    /// Rejects values that would make search or layout meaningless.
    ///
    /// # Errors
    /// Returns a config error naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let bad = |message: &str| {
            Err(crate::error::LineageError::Config {
                message: message.to_string(),
                path: self.source.clone(),
            })
        };
        if !(0.0..=1.0).contains(&self.search.threshold) {
            return bad("search.threshold must be within 0..=1");
        }
        if self.layout.min_zoom <= 0.0 || self.layout.min_zoom > self.layout.max_zoom {
            return bad("layout.min_zoom must be positive and not above layout.max_zoom");
        }
        if self.layout.width <= 0.0 || self.layout.height <= 0.0 {
            return bad("layout.width and layout.height must be positive");
        }
        if !(0.0..1.0).contains(&self.layout.alpha_decay) {
            return bad("layout.alpha_decay must be within 0..1");
        }
        Ok(())
    }
}
