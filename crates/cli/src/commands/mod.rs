//! Command implementations.
//!
//! Each command loads the state file, runs one or more lifecycle operations
//! and writes the state file back before printing its result.

pub mod apply;
pub mod destroy;
pub mod import;
pub mod plan;
pub mod refresh;
pub mod show;

use anyhow::Result;
use notebook_client::NotebooksClient;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::formatters::format_value;

/// Build an API client from the loaded configuration.
pub(crate) fn build_client(config: &notebook_config::Config) -> Result<NotebooksClient> {
    Ok(NotebooksClient::builder().from_config(config).build()?)
}

/// Print a command result to stdout.
pub(crate) fn print_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", format_value(value, format)?.trim_end());
    Ok(())
}
