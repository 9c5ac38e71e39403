// src/bin/lineage.rs
use std::process;

use clap::Parser;
use colored::Colorize;

use lineage_core::cli::{dispatch, Cli};
use lineage_core::exit::LineageExit;
use lineage_core::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch::execute(cli) {
        Ok(exit) => exit.exit(),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(LineageExit::Error.code());
        }
    }
}
