//! Shared test utilities for notebook-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide small notebook definitions written to temp files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `DD_API_KEY`/`DD_APP_KEY` are set to dummy values unless overridden.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `notebook-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Both keys are set to dummy values to satisfy config validation.
/// - Other connection env vars are cleared to ensure no leakage from the host.
pub fn notebook_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("notebook-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("DD_API_KEY", "test-api-key");
    cmd.env("DD_APP_KEY", "test-app-key");
    cmd.env_remove("DD_HOST")
        .env_remove("DD_HTTP_TIMEOUT")
        .env_remove("DD_MAX_RETRIES")
        .env_remove("DD_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Hermetic command pointed at `api_url` using the state file `state`.
pub fn notebook_cmd_at(api_url: &str, state: &Path) -> Command {
    let mut cmd = notebook_cmd();
    cmd.env("DD_HOST", api_url).arg("--state").arg(state);
    cmd
}

/// Definition matching the `create_notebook.json` fixture.
pub const SCRATCH_YAML: &str = r##"name: Scratch
status: published
metadata:
  - is_template: false
    take_snapshots: false
time:
  - notebook_absolute_time:
      - start: "2024-01-01T00:00:00.000000+0000"
        end: "2024-01-02T00:00:00.000000+0000"
cell:
  - attributes:
      - notebook_markdown_cell_attributes:
          - definition:
              - text: "# hi"
"##;

/// Write `content` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
