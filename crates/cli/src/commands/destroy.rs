//! Destroy command implementation.

use anyhow::{Context, Result};
use notebook_client::NotebooksClient;
use notebook_resource::CancellationToken;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::args::OutputFormat;
use crate::commands::print_output;
use crate::state_file::StateFile;

/// Delete the recorded notebook and clear the state file.
pub async fn run(
    client: &NotebooksClient,
    state_path: &Path,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let recorded = StateFile::load(state_path)?;
    let Some(id) = recorded.id.clone() else {
        info!("No notebook recorded, nothing to destroy");
        return print_output(&json!({"deleted": null}), output_format);
    };

    let mut data = recorded.recorded_data()?;
    notebook_resource::delete(client, &data, cancel)
        .await
        .with_context(|| format!("Failed to delete notebook {id}"))?;

    data.clear_id();
    StateFile::from_data(&data).save(state_path)?;
    print_output(&json!({"deleted": id}), output_format)
}
