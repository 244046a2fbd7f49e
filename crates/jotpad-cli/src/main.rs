//! jotpad CLI - keep short notes from the terminal
//!
//! Without a subcommand it opens the interactive note pad; `list`, `add`,
//! `edit`, and `delete` run a single action against the same store.

mod cli;
mod commands;
mod config;
mod error;
mod shell;

#[cfg(test)]
mod tests;

use std::io;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::StoreLocation;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::commands::shell::run_shell;
use crate::config::{resolve_config_path, CliConfig};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config);
    let config = CliConfig::load_from_path(&config_path).map_err(CliError::Config)?;
    let data_dir = config.resolve_data_dir(cli.data_dir);
    let key = config.resolve_storage_key(cli.key);
    let location = StoreLocation {
        data_dir: &data_dir,
        key: &key,
    };
    let assume_yes = cli.yes || !config.confirm_delete;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(assume_yes, &location, stdin.lock(), stdout.lock())?,
        Commands::List { json } => run_list(json, &location, &mut stdout)?,
        Commands::Add { title, body } => {
            run_add(title.as_deref(), body.as_deref(), &location, &mut stdout)?;
        }
        Commands::Edit { id, title, body } => {
            run_edit(&id, title.as_deref(), body.as_deref(), &location, &mut stdout)?;
        }
        Commands::Delete { id } => {
            run_delete(&id, assume_yes, &location, &mut stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the rendered notes.
fn init_logging() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "jotpad=warn".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
