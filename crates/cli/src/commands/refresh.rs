//! Refresh command implementation.
//!
//! Responsibilities:
//! - Re-read the recorded notebook and store its current state.
//! - Forget the notebook when the API no longer knows it.

use anyhow::{Context, Result};
use notebook_client::NotebooksClient;
use notebook_resource::CancellationToken;
use std::path::Path;
use tracing::warn;

use crate::args::OutputFormat;
use crate::commands::print_output;
use crate::state_file::StateFile;

/// Run the refresh command.
pub async fn run(
    client: &NotebooksClient,
    state_path: &Path,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let recorded = StateFile::load(state_path)?;
    if recorded.id.is_none() {
        anyhow::bail!(
            "No notebook recorded in {}; run apply or import first",
            state_path.display()
        );
    }
    let mut data = recorded.recorded_data()?;

    notebook_resource::read(client, &mut data, cancel)
        .await
        .context("Failed to refresh notebook")?;
    if data.id().is_none() {
        warn!("Notebook was deleted outside of this tool");
    }

    let refreshed = StateFile::from_data(&data);
    refreshed.save(state_path)?;
    print_output(&refreshed, output_format)
}
