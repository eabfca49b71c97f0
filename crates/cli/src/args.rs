//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the API configuration (see `main`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default location of the state file.
pub const DEFAULT_STATE_FILE: &str = "notebook.state.json";

#[derive(Parser)]
#[command(name = "notebook-cli")]
#[command(about = "Reconcile declarative notebook definitions with the notebooks API", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  notebook-cli plan notebook.yaml\n  notebook-cli apply notebook.yaml\n  notebook-cli refresh\n  notebook-cli import 126879 --write-config notebook.yaml\n  notebook-cli --state prod.state.json destroy\n"
)]
pub struct Cli {
    /// Base URL of the API (e.g., https://api.datadoghq.com)
    #[arg(long, global = true, env = "DD_HOST")]
    pub api_url: Option<String>,

    /// API key
    #[arg(long, global = true, env = "DD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Application key
    #[arg(long, global = true, env = "DD_APP_KEY", hide_env_values = true)]
    pub app_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "DD_HTTP_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited requests (0 disables retries)
    #[arg(long, global = true, env = "DD_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification
    #[arg(long, global = true, env = "DD_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// State file recording the notebook id and its last read state
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the command talks to the API and needs credentials.
    pub fn needs_api(&self) -> bool {
        !matches!(self.command, Commands::Plan { .. } | Commands::Show)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what apply would send, without calling the API
    Plan {
        /// Notebook definition (YAML or JSON)
        config: PathBuf,
    },

    /// Create or update the notebook so it matches the definition
    Apply {
        /// Notebook definition (YAML or JSON)
        config: PathBuf,
    },

    /// Re-read the notebook and record its current state
    Refresh,

    /// Adopt an existing notebook into a new state file
    Import {
        /// Numeric notebook id
        id: String,

        /// Also write the imported definition to this file (YAML or JSON by extension)
        #[arg(long, value_name = "FILE")]
        write_config: Option<PathBuf>,

        /// Replace an existing state file
        #[arg(long)]
        force: bool,
    },

    /// Delete the notebook and clear the state file
    Destroy,

    /// Print the recorded state
    Show,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
