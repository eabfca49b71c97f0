//! Leaf extractors: typed reads of a named sibling through the cursor.
//!
//! Optional reads follow the presence rule of [`crate::cursor::is_present`]:
//! an unconfigured value (false, zero, empty) yields `None` and the WIRE field
//! stays unset. Required reads only need the key to exist and be non-null, so
//! a required `0` or `false` is still transmitted.

use chrono::{DateTime, FixedOffset, SubsecRound};
use notebook_client::models::WireEnum;
use serde_json::Value;

use crate::cursor::PathCursor;
use crate::error::{ResourceError, Result};

/// Timestamp layout on the configuration side.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

/// Scalar kinds readable from the configuration tree.
pub trait FromDecl: Sized {
    /// Description used in `InvalidValue` errors.
    const EXPECTED: &'static str;

    fn from_decl(value: &Value) -> Option<Self>;
}

impl FromDecl for String {
    const EXPECTED: &'static str = "a string";

    fn from_decl(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromDecl for i64 {
    const EXPECTED: &'static str = "an integer";

    fn from_decl(value: &Value) -> Option<Self> {
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        })
    }
}

impl FromDecl for f64 {
    const EXPECTED: &'static str = "a number";

    fn from_decl(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromDecl for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_decl(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

fn coerce<T: FromDecl>(c: &PathCursor<'_>, rel: &str, value: &Value) -> Result<T> {
    T::from_decl(value).ok_or_else(|| ResourceError::InvalidValue {
        path: c.path_with(rel),
        expected: T::EXPECTED.to_string(),
    })
}

fn coerce_enum<E: WireEnum>(c: &PathCursor<'_>, rel: &str, value: &Value) -> Result<E> {
    value
        .as_str()
        .and_then(E::from_wire)
        .ok_or_else(|| ResourceError::InvalidValue {
            path: c.path_with(rel),
            expected: format!("{} (one of: {})", E::KIND, E::expected()),
        })
}

fn coerce_timestamp(c: &PathCursor<'_>, rel: &str, value: &Value) -> Result<DateTime<FixedOffset>> {
    let raw = value.as_str().ok_or_else(|| ResourceError::InvalidValue {
        path: c.path_with(rel),
        expected: "a timestamp string".to_string(),
    })?;
    parse_timestamp(raw).ok_or_else(|| ResourceError::InvalidTimestamp {
        path: c.path_with(rel),
        value: raw.to_string(),
    })
}

fn missing(c: &PathCursor<'_>, rel: &str) -> ResourceError {
    ResourceError::MissingField {
        path: c.path_with(rel),
    }
}

/// Configured scalar, or `None`.
pub fn optional<T: FromDecl>(c: &PathCursor<'_>, rel: &str) -> Result<Option<T>> {
    match c.get_ok_with(rel) {
        (Some(value), true) => coerce(c, rel, value).map(Some),
        _ => Ok(None),
    }
}

/// Scalar that must exist.
pub fn required<T: FromDecl>(c: &PathCursor<'_>, rel: &str) -> Result<T> {
    match c.get_with(rel) {
        Some(value) if !value.is_null() => coerce(c, rel, value),
        _ => Err(missing(c, rel)),
    }
}

pub fn optional_enum<E: WireEnum>(c: &PathCursor<'_>, rel: &str) -> Result<Option<E>> {
    match c.get_ok_with(rel) {
        (Some(value), true) => coerce_enum(c, rel, value).map(Some),
        _ => Ok(None),
    }
}

pub fn required_enum<E: WireEnum>(c: &PathCursor<'_>, rel: &str) -> Result<E> {
    match c.get_ok_with(rel) {
        (Some(value), true) => coerce_enum(c, rel, value),
        _ => Err(missing(c, rel)),
    }
}

/// Enumeration with a default used when the key is not configured.
pub fn enum_or<E: WireEnum>(c: &PathCursor<'_>, rel: &str, default: E) -> Result<E> {
    Ok(optional_enum(c, rel)?.unwrap_or(default))
}

pub fn required_timestamp(c: &PathCursor<'_>, rel: &str) -> Result<DateTime<FixedOffset>> {
    match c.get_ok_with(rel) {
        (Some(value), true) => coerce_timestamp(c, rel, value),
        _ => Err(missing(c, rel)),
    }
}

/// Configured list of scalars, or `None` for an absent or empty list.
pub fn optional_list<T: FromDecl>(c: &PathCursor<'_>, rel: &str) -> Result<Option<Vec<T>>> {
    match c.get_ok_with(rel) {
        (Some(Value::Array(items)), true) => items
            .iter()
            .enumerate()
            .map(|(i, item)| coerce(c, &format!("{rel}.{i}"), item))
            .collect::<Result<Vec<T>>>()
            .map(Some),
        (Some(_), true) => Err(ResourceError::InvalidValue {
            path: c.path_with(rel),
            expected: "a list".to_string(),
        }),
        _ => Ok(None),
    }
}

pub fn optional_enum_list<E: WireEnum>(c: &PathCursor<'_>, rel: &str) -> Result<Option<Vec<E>>> {
    match c.get_ok_with(rel) {
        (Some(Value::Array(items)), true) => items
            .iter()
            .enumerate()
            .map(|(i, item)| coerce_enum(c, &format!("{rel}.{i}"), item))
            .collect::<Result<Vec<E>>>()
            .map(Some),
        (Some(_), true) => Err(ResourceError::InvalidValue {
            path: c.path_with(rel),
            expected: "a list".to_string(),
        }),
        _ => Ok(None),
    }
}

/// List of scalars that may be absent, read as empty.
pub fn list_or_empty<T: FromDecl>(c: &PathCursor<'_>, rel: &str) -> Result<Vec<T>> {
    Ok(optional_list(c, rel)?.unwrap_or_default())
}

/// Parse a configuration timestamp. RFC3339 input is accepted as well.
///
/// Precision is cut to microseconds, the finest the configuration side
/// stores.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|timestamp| timestamp.trunc_subsecs(6))
}

/// Format a timestamp the way the configuration side stores it.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
