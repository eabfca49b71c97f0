//! Declarative notebook resource.
//!
//! Translates a declarative configuration tree (a `serde_json::Value`) into
//! notebooks API payloads and decomposes API responses back into that tree.
//!
//! - [`cursor`]: path cursor over the configuration tree.
//! - [`extract`]: typed leaf reads.
//! - [`build`]: configuration to create/update payloads.
//! - [`decompose`]: API response to configuration tree.
//! - [`state`]: desired configuration, id and recorded state.
//! - [`lifecycle`]: create, read, update, delete, import and plan.

pub mod build;
pub mod cancellation;
pub mod cursor;
pub mod decompose;
pub mod error;
pub mod extract;
pub mod lifecycle;
pub mod state;

pub use build::{build_create, build_update};
pub use cancellation::CancellationToken;
pub use cursor::{CursorStats, PathCursor};
pub use decompose::decompose_notebook;
pub use error::{Operation, ResourceError, Result};
pub use lifecycle::{Plan, create, delete, import, plan, read, update};
pub use state::{ResourceData, StateWriter};
