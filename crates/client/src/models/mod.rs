//! Data models for the notebooks API.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod notebooks;

pub use common::ApiErrorResponse;
pub use notebooks::*;
