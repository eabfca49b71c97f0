//! Output formatting and file writing.
//!
//! Responsibilities:
//! - Render command results as JSON or YAML.
//! - Read notebook definitions from YAML or JSON files.
//! - Write files atomically (temp file in the target directory, then rename).
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::args::OutputFormat;

/// Render `value` in the requested format.
pub fn format_value<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).context("Failed to serialize output as YAML")
        }
    }
}

/// Format implied by a file extension; anything but `.json` is YAML.
pub fn format_for_path(path: &Path) -> OutputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Yaml,
    }
}

/// Read a notebook definition. The root must be a mapping.
pub fn read_definition(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition: {}", path.display()))?;
    let value: Value = match format_for_path(path) {
        OutputFormat::Json => serde_json::from_str(&raw)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        OutputFormat::Yaml => serde_yaml::from_str(&raw)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
    };
    if !value.is_object() {
        anyhow::bail!(
            "Definition {} must be a mapping at the top level",
            path.display()
        );
    }
    Ok(value)
}

/// Write content to a file atomically.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
