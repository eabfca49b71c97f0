//! Notebooks REST API client.
//!
//! This crate provides the typed model of the notebooks API (v1) and a client
//! for creating, reading, updating and deleting notebooks. Requests are
//! authenticated with an API key and an application key.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{API_KEY_HEADER, APP_KEY_HEADER, ApiKeys};
pub use client::NotebooksClient;
pub use client::builder::NotebooksClientBuilder;
pub use error::{ClientError, Result};
