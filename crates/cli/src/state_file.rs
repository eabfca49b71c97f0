//! On-disk state between runs.
//!
//! Responsibilities:
//! - Persist the notebook id, the definition last applied and the state
//!   decomposed from the last API response.
//! - Convert to and from [`ResourceData`].
//!
//! Does NOT handle:
//! - Deciding what to send (see `notebook_resource::plan`).
//!
//! Invariants:
//! - A missing state file reads as an empty state (no id).
//! - Writes are atomic.

use anyhow::{Context, Result};
use notebook_resource::ResourceData;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::formatters::write_to_file;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub state: Map<String, Value>,
}

impl StateFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt state file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let rendered = serde_json::to_string_pretty(self)?;
        write_to_file(&rendered, path)
    }

    /// Resource data for `config`, carrying the recorded id and state.
    pub fn resource_data(&self, config: Value) -> Result<ResourceData> {
        let mut data = ResourceData::new(config)?;
        if let Some(id) = &self.id {
            data = data.with_id(id.clone());
        }
        Ok(data.with_prior_state(self.state.clone()))
    }

    /// Resource data for the definition last applied.
    pub fn recorded_data(&self) -> Result<ResourceData> {
        self.resource_data(Value::Object(self.config.clone()))
    }

    /// Snapshot of `data` after an operation.
    pub fn from_data(data: &ResourceData) -> Self {
        Self {
            id: data.id().map(str::to_string),
            config: data.config().as_object().cloned().unwrap_or_default(),
            state: data.state().clone(),
        }
    }
}
