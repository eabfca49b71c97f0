//! Builders: configuration tree to API request.
//!
//! Responsibilities:
//! - Walk the desired configuration depth-first through a [`PathCursor`]
//!   and produce the create or update payload.
//! - Select exactly one variant on every oneOf node.
//! - Reject invalid requests before anything is sent.
//!
//! Does NOT handle:
//! - Sending the payload (see `lifecycle`).
//!
//! Invariants:
//! - Each builder leaves the cursor at the depth it found it.
//! - A WIRE field is only set when its configuration value is present.

pub(crate) mod cell;
pub(crate) mod formula;
mod notebook;
mod query;
mod request;
pub(crate) mod time;
mod widget;

pub use notebook::{build_create, build_update};

use crate::cursor::PathCursor;
use crate::error::{ResourceError, Result};

/// Probe the variants of a oneOf node in declaration order and return the
/// single one that is configured.
pub(crate) fn select_variant<T: Copy>(
    c: &PathCursor<'_>,
    one_of: &str,
    variants: &[(T, &'static str)],
) -> Result<(T, &'static str)> {
    let found: Vec<(T, &'static str)> = variants
        .iter()
        .copied()
        .filter(|(_, name)| c.get_ok_with(&format!("{name}.0")).1)
        .collect();

    match found.as_slice() {
        [] => Err(ResourceError::MissingDefinition {
            one_of: one_of.to_string(),
        }),
        [single] => Ok(*single),
        _ => Err(ResourceError::MultipleDefinitions {
            one_of: one_of.to_string(),
            found: found.iter().map(|(_, name)| name.to_string()).collect(),
        }),
    }
}

/// Build every element of the list at `rel`, in order.
pub(crate) fn build_list<'a, T>(
    c: &mut PathCursor<'a>,
    rel: &str,
    mut build: impl FnMut(&mut PathCursor<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    let len = c.len_of(rel);
    c.within(rel, |c| {
        (0..len)
            .map(|index| c.within_index(index, &mut build))
            .collect()
    })
}

/// Like [`build_list`], but `None` when the list is absent or empty.
pub(crate) fn optional_list<'a, T>(
    c: &mut PathCursor<'a>,
    rel: &str,
    build: impl FnMut(&mut PathCursor<'a>) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    if c.len_of(rel) == 0 {
        return Ok(None);
    }
    build_list(c, rel, build).map(Some)
}

/// Build the single-element block `rel.0` when it is configured.
pub(crate) fn optional_block<'a, T>(
    c: &mut PathCursor<'a>,
    rel: &str,
    build: impl FnOnce(&mut PathCursor<'a>) -> Result<T>,
) -> Result<Option<T>> {
    let block = format!("{rel}.0");
    if !c.get_ok_with(&block).1 {
        return Ok(None);
    }
    c.within(&block, build).map(Some)
}

/// Build the single-element block `rel.0`, which must be configured.
pub(crate) fn required_block<'a, T>(
    c: &mut PathCursor<'a>,
    rel: &str,
    build: impl FnOnce(&mut PathCursor<'a>) -> Result<T>,
) -> Result<T> {
    let path = c.path_with(rel);
    optional_block(c, rel, build)?.ok_or(ResourceError::MissingField { path })
}
