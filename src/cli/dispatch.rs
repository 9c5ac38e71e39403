//! Command dispatch, kept out of the binary.

use super::args::{Cli, Commands};
use super::handlers::{self, Context, LayoutRequest};
use crate::exit::LineageExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the snapshot or config cannot be loaded, or output fails.
pub fn execute(cli: Cli) -> Result<LineageExit> {
    let ctx = Context::open(&cli.data, cli.config.as_deref())?;
    match cli.command {
        Commands::Families { json } => handlers::handle_families(&ctx, json),
        Commands::Family { surname, json } => handlers::handle_family(&ctx, &surname, json),
        Commands::Person { id, json } => handlers::handle_person(&ctx, &id, json),
        Commands::Search(args) => handlers::handle_search(&ctx, &args),
        Commands::Layout {
            family,
            root,
            ticks,
            width,
            height,
            frames,
        } => handlers::handle_layout(
            &ctx,
            &LayoutRequest {
                family,
                root,
                ticks,
                width,
                height,
                frames,
            },
        ),
        Commands::Check { json } => handlers::handle_check(&ctx, json),
        Commands::Index => handlers::handle_index(&ctx),
    }
}
