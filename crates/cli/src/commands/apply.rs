//! Apply command implementation.
//!
//! Responsibilities:
//! - Refresh the recorded notebook, then create or update it so it matches
//!   the definition.
//! - Record the outcome in the state file.
//!
//! Does NOT handle:
//! - Deleting notebooks that are no longer defined (see `destroy`).
//!
//! Invariants:
//! - An invalid definition fails before any request is sent.
//! - The state file is written after every successful API call, so a later
//!   failure never loses a created notebook's id.

use anyhow::{Context, Result};
use notebook_client::NotebooksClient;
use notebook_resource::{CancellationToken, Plan, ResourceData};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::args::OutputFormat;
use crate::cancellation::Cancelled;
use crate::commands::plan::Action;
use crate::commands::print_output;
use crate::formatters::read_definition;
use crate::state_file::StateFile;

#[derive(Debug, Serialize)]
struct ApplyOutput {
    action: Action,
    id: Option<String>,
}

fn save(data: &ResourceData, state_path: &Path) -> Result<()> {
    StateFile::from_data(data).save(state_path)
}

/// Run the apply command.
pub async fn run(
    client: &NotebooksClient,
    config_path: &Path,
    state_path: &Path,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let definition = read_definition(config_path)?;
    let mut data = StateFile::load(state_path)?.resource_data(definition)?;

    // Catch definition errors before touching the API.
    notebook_resource::plan(&data)?;

    if data.id().is_some() {
        notebook_resource::read(client, &mut data, cancel)
            .await
            .context("Failed to refresh notebook")?;
        if data.id().is_none() {
            info!("Recorded notebook no longer exists, it will be recreated");
        }
        save(&data, state_path)?;
        if cancel.is_cancelled() {
            return Err(Cancelled.into());
        }
    }

    let action = match notebook_resource::plan(&data)? {
        Plan::Create(_) => {
            notebook_resource::create(client, &mut data, cancel)
                .await
                .context("Failed to create notebook")?;
            Action::Create
        }
        Plan::Update { drift: false, .. } => {
            info!("Notebook is up to date");
            Action::None
        }
        Plan::Update { drift: true, .. } => {
            notebook_resource::update(client, &mut data, cancel)
                .await
                .context("Failed to update notebook")?;
            Action::Update
        }
    };
    save(&data, state_path)?;

    print_output(
        &ApplyOutput {
            action,
            id: data.id().map(str::to_string),
        },
        output_format,
    )
}
