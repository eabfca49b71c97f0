//! Show command implementation.

use anyhow::Result;
use std::path::Path;

use crate::args::OutputFormat;
use crate::commands::print_output;
use crate::state_file::StateFile;

/// Print the state file as recorded, without calling the API.
pub fn run(state_path: &Path, output_format: OutputFormat) -> Result<()> {
    print_output(&StateFile::load(state_path)?, output_format)
}
