//! Plan command implementation.
//!
//! Responsibilities:
//! - Build the payload apply would send for a definition.
//! - Report whether the notebook would be created, updated, or left alone.
//!
//! Does NOT handle:
//! - Any API call. Plans are computed against the recorded state only; run
//!   `refresh` first to compare against the live notebook.

use anyhow::Result;
use notebook_resource::Plan;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::args::OutputFormat;
use crate::commands::print_output;
use crate::formatters::read_definition;
use crate::state_file::StateFile;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Update,
    None,
}

#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub payload: Value,
}

impl PlanOutput {
    pub fn from_plan(plan: &Plan) -> Result<Self> {
        Ok(match plan {
            Plan::Create(body) => Self {
                action: Action::Create,
                id: None,
                payload: serde_json::to_value(body)?,
            },
            Plan::Update { id, body, drift } => Self {
                action: if *drift { Action::Update } else { Action::None },
                id: Some(*id),
                payload: serde_json::to_value(body)?,
            },
        })
    }
}

/// Run the plan command.
pub fn run(config_path: &Path, state_path: &Path, output_format: OutputFormat) -> Result<()> {
    let definition = read_definition(config_path)?;
    let data = StateFile::load(state_path)?.resource_data(definition)?;

    let plan = notebook_resource::plan(&data)?;
    print_output(&PlanOutput::from_plan(&plan)?, output_format)
}
