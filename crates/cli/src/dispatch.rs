//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the API client for commands that need one.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Offline commands (`plan`, `show`) never require credentials.

use anyhow::{Context, Result};
use notebook_client::NotebooksClient;
use notebook_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

fn api_client(config: Option<&Config>) -> Result<NotebooksClient> {
    let config = config.context("API configuration was not loaded")?;
    commands::build_client(config)
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Option<Config>,
    cancel: &CancellationToken,
) -> Result<()> {
    let state = cli.state.as_path();
    let output = cli.output;
    let config = config.as_ref();

    match &cli.command {
        Commands::Plan { config: path } => commands::plan::run(path, state, output),
        Commands::Show => commands::show::run(state, output),
        Commands::Apply { config: path } => {
            let client = api_client(config)?;
            commands::apply::run(&client, path, state, output, cancel).await
        }
        Commands::Refresh => {
            let client = api_client(config)?;
            commands::refresh::run(&client, state, output, cancel).await
        }
        Commands::Import {
            id,
            write_config,
            force,
        } => {
            let client = api_client(config)?;
            commands::import::run(
                &client,
                id,
                write_config.as_deref(),
                *force,
                state,
                output,
                cancel,
            )
            .await
        }
        Commands::Destroy => {
            let client = api_client(config)?;
            commands::destroy::run(&client, state, output, cancel).await
        }
    }
}
