use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::search::{SearchFilters, YearRange};

#[derive(Parser)]
#[command(name = "lineage", version, about = "Genealogy archive explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Snapshot file or processed data directory
    #[arg(long, short, global = true, default_value = ".", value_name = "PATH")]
    pub data: PathBuf,
    /// Config file (default: lineage.toml in the data directory, then cwd)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List families with member counts
    Families {
        #[arg(long)]
        json: bool,
    },
    /// Family page: statistics, notable members, generations, timeline
    Family {
        surname: String,
        #[arg(long)]
        json: bool,
    },
    /// Person page: details, relatives, media
    Person {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Filter and fuzzy-search people
    Search(SearchArgs),
    /// Run the tree layout headless and print positions as JSON
    Layout {
        /// Only people with this surname
        #[arg(long, short)]
        family: Option<String>,
        /// Highlight this person as the tree root
        #[arg(long, value_name = "ID")]
        root: Option<String>,
        #[arg(long, default_value = "300")]
        ticks: usize,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        /// Print every frame instead of the settled layout
        #[arg(long)]
        frames: bool,
    },
    /// Report dangling references, duplicates and contradictions
    Check {
        #[arg(long)]
        json: bool,
    },
    /// Print the exported search index
    Index,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Free-text query
    pub query: Option<String>,
    #[arg(long)]
    pub surname: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub birth_place: Option<String>,
    #[arg(long)]
    pub death_place: Option<String>,
    #[arg(long)]
    pub occupation: Option<String>,
    #[arg(long, value_name = "YEAR")]
    pub born_from: Option<i32>,
    #[arg(long, value_name = "YEAR")]
    pub born_to: Option<i32>,
    #[arg(long, value_name = "YEAR")]
    pub died_from: Option<i32>,
    #[arg(long, value_name = "YEAR")]
    pub died_to: Option<i32>,
    #[arg(long)]
    pub has_photos: bool,
    #[arg(long)]
    pub has_documents: bool,
    /// Use additive relevance ranking instead of fuzzy matching
    #[arg(long)]
    pub ranked: bool,
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    #[must_use]
    pub fn filters(&self) -> SearchFilters {
        let range = |from: Option<i32>, to: Option<i32>| {
            (from.is_some() || to.is_some()).then(|| YearRange::new(from, to))
        };
        SearchFilters {
            surname: self.surname.clone(),
            first_name: self.first_name.clone(),
            birth_place: self.birth_place.clone(),
            death_place: self.death_place.clone(),
            occupation: self.occupation.clone(),
            birth_year: range(self.born_from, self.born_to),
            death_year: range(self.died_from, self.died_to),
            has_photos: self.has_photos,
            has_documents: self.has_documents,
        }
    }
}
