//! Folio CLI: the `folio` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing();

    match cli.command.unwrap_or_else(Commands::default_check) {
        Commands::ConsistencyCheck {
            repo_root,
            readme,
            index,
            projects,
            json,
        } => commands::consistency_check::run(commands::consistency_check::Args {
            repo_root,
            readme,
            index,
            projects,
            json,
        }),

        Commands::Projects {
            repo_root,
            projects,
            json,
        } => commands::projects::run(repo_root, projects, json),
    }
}
