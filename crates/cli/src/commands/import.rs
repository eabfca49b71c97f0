//! Import command implementation.
//!
//! Responsibilities:
//! - Read an existing notebook by id into a new state file.
//! - Optionally write the imported definition so it can be applied later.

use anyhow::{Context, Result};
use notebook_client::NotebooksClient;
use notebook_resource::CancellationToken;
use std::path::Path;
use tracing::info;

use crate::args::OutputFormat;
use crate::commands::print_output;
use crate::formatters::{format_for_path, format_value, write_to_file};
use crate::state_file::StateFile;

/// Run the import command.
pub async fn run(
    client: &NotebooksClient,
    id: &str,
    write_config: Option<&Path>,
    force: bool,
    state_path: &Path,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    if !force && StateFile::load(state_path)?.id.is_some() {
        anyhow::bail!(
            "{} already records a notebook; pass --force to replace it",
            state_path.display()
        );
    }

    let data = notebook_resource::import(client, id, cancel)
        .await
        .with_context(|| format!("Failed to import notebook {id}"))?;

    let imported = StateFile::from_data(&data);
    imported.save(state_path)?;

    if let Some(path) = write_config {
        let rendered = format_value(data.config(), format_for_path(path))?;
        write_to_file(&rendered, path)?;
        info!("Definition written to {}", path.display());
    }

    print_output(&imported, output_format)
}
