// src/cli/handlers.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;

use super::args::SearchArgs;
use super::render;
use crate::config::Config;
use crate::dates::{compute_age, life_span_label};
use crate::exit::LineageExit;
use crate::family::{family_members, family_view};
use crate::layout::{build_graph, people_for_tree, run_layout, CanvasSize};
use crate::model::{MediaItem, Person};
use crate::relations::Relatives;
use crate::search::{export_index, rank_people, SearchEngine};
use crate::snapshot::{audit, load_path, Severity, Snapshot, SnapshotCache};

/// Loaded config and snapshot shared by every command.
pub struct Context {
    pub config: Config,
    pub snapshot: Arc<Snapshot>,
}

impl Context {
    /// Loads config (explicit, else data directory, else cwd) and reads the
    /// snapshot straight from disk.
    ///
    /// # Errors
    /// Returns error if the config is invalid or the snapshot cannot be loaded.
    pub fn open(data: &Path, config: Option<&Path>) -> Result<Self> {
        let config = load_config(data, config)?;
        let snapshot = load_path(data)
            .with_context(|| format!("loading snapshot from {}", data.display()))?;
        Ok(Self {
            config,
            snapshot: Arc::new(snapshot),
        })
    }

    /// Like [`Context::open`], but shares snapshots through `cache` so a
    /// long-lived host loads unchanged data once.
    ///
    /// # Errors
    /// Returns error if the config is invalid or the snapshot cannot be loaded.
    pub fn open_cached(data: &Path, config: Option<&Path>, cache: &SnapshotCache) -> Result<Self> {
        let config = load_config(data, config)?;
        let snapshot = cache
            .get_or_load(data)
            .with_context(|| format!("loading snapshot from {}", data.display()))?;
        Ok(Self { config, snapshot })
    }

    fn reference_year(&self) -> i32 {
        self.config.reference_year()
    }
}

fn load_config(data: &Path, explicit: Option<&Path>) -> Result<Config> {
    let data_dir = if data.is_file() {
        data.parent().unwrap_or(Path::new("."))
    } else {
        data
    };
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(explicit, &[data_dir, &cwd])?;
    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handles the families command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_families(ctx: &Context, json: bool) -> Result<LineageExit> {
    let families = ctx.snapshot.families();
    if json {
        print_json(families)?;
    } else {
        render::families(families);
    }
    Ok(LineageExit::Success)
}

/// Handles the family command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_family(ctx: &Context, surname: &str, json: bool) -> Result<LineageExit> {
    let snap = &ctx.snapshot;
    let Some(view) = family_view(snap.people(), snap.relationships(), surname, ctx.reference_year())
    else {
        eprintln!("{} no family named {surname}", "error:".red().bold());
        return Ok(LineageExit::InvalidInput);
    };
    if json {
        print_json(&view)?;
    } else {
        let members = family_members(snap.people(), surname);
        render::family(&view, &members);
    }
    Ok(LineageExit::Success)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonReport<'a> {
    pub person: &'a Person,
    pub life_span: String,
    pub age: Option<i32>,
    pub relatives: Relatives<'a>,
    pub photos: Vec<&'a MediaItem>,
    pub documents: Vec<&'a MediaItem>,
}

/// Handles the person command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_person(ctx: &Context, id: &str, json: bool) -> Result<LineageExit> {
    let snap = &ctx.snapshot;
    let Some(person) = snap.person(id) else {
        eprintln!("{} no person with id {id}", "error:".red().bold());
        return Ok(LineageExit::InvalidInput);
    };
    let media = snap.media_for(id);
    let report = PersonReport {
        person,
        life_span: life_span_label(person.birth_date.as_deref(), person.death_date.as_deref()),
        age: compute_age(
            person.birth_date.as_deref(),
            person.death_date.as_deref(),
            ctx.reference_year(),
        ),
        relatives: snap.relatives(id),
        photos: media.photos,
        documents: media.documents,
    };
    if json {
        print_json(&report)?;
    } else {
        render::person(&report);
    }
    Ok(LineageExit::Success)
}

/// Handles the search command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_search(ctx: &Context, args: &SearchArgs) -> Result<LineageExit> {
    let people = ctx.snapshot.people();
    let filters = args.filters();

    if args.ranked {
        let query = args.query.as_deref().unwrap_or_default();
        let mut ranked = rank_people(people, query);
        ranked.retain(|s| filters.matches(s.person));
        if args.json {
            print_json(&ranked)?;
        } else {
            render::ranked(&ranked);
        }
        return Ok(LineageExit::Success);
    }

    let engine = SearchEngine::new(people, &ctx.config.search);
    let results = engine.search(&filters, args.query.as_deref());
    if args.json {
        print_json(&results)?;
    } else {
        render::people(&results);
    }
    Ok(LineageExit::Success)
}

/// Options for one headless layout run.
#[derive(Debug, Clone, Default)]
pub struct LayoutRequest {
    pub family: Option<String>,
    pub root: Option<String>,
    pub ticks: usize,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub frames: bool,
}

/// Handles the layout command. Output is always JSON.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_layout(ctx: &Context, req: &LayoutRequest) -> Result<LineageExit> {
    let snap = &ctx.snapshot;
    let people = people_for_tree(snap.people(), req.family.as_deref());
    let graph = build_graph(&people, snap.relationships(), req.root.as_deref());

    let config = &ctx.config.layout;
    let canvas = CanvasSize::new(
        req.width.unwrap_or(config.width),
        req.height.unwrap_or(config.height),
    );
    let mut sim = run_layout(graph, canvas, config);

    if req.frames {
        for frame in sim.frames().take(req.ticks) {
            println!("{}", serde_json::to_string(&frame)?);
        }
        return Ok(LineageExit::Success);
    }

    let taken = sim.run(req.ticks);
    tracing::debug!(ticks = taken, settled = !sim.is_running(), "layout finished");
    print_json(&sim.frame())?;
    Ok(LineageExit::Success)
}

/// Handles the check command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_check(ctx: &Context, json: bool) -> Result<LineageExit> {
    let findings = audit(&ctx.snapshot);
    if json {
        print_json(&findings)?;
    } else {
        render::findings(&findings);
    }
    if findings.iter().any(|f| f.severity == Severity::Warning) {
        Ok(LineageExit::IntegrityWarnings)
    } else {
        Ok(LineageExit::Success)
    }
}

/// Handles the index command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_index(ctx: &Context) -> Result<LineageExit> {
    print_json(&export_index(ctx.snapshot.people()))?;
    Ok(LineageExit::Success)
}
