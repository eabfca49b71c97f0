//! Configuration management for notebook reconciliation.
//!
//! This crate provides types and loaders for the process-wide API
//! configuration (endpoint, credentials, timeouts) read from `.env` files,
//! environment variables and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
