//! Path cursor over the declarative configuration tree.
//!
//! Responsibilities:
//! - Address values by a stack of key and index segments.
//! - Report whether the addressed value is configured (present and non-zero).
//! - Read siblings by a short relative path without moving.
//!
//! Does NOT handle:
//! - Coercion of leaf values (see `extract`).
//! - Mutation of the tree.
//!
//! Invariants:
//! - Every `push` is undone by exactly one `pop` naming the same segment.
//!   [`PathCursor::within`] pairs them for the caller.
//! - Missing paths never fail; they read as absent.

use serde_json::Value;
use std::fmt;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Split a dotted relative path; all-digit parts become indices.
    fn parse(rel: &str) -> Vec<Segment> {
        rel.split('.')
            .filter(|part| !part.is_empty())
            .map(|part| match part.parse::<usize>() {
                Ok(index) => Segment::Index(index),
                Err(_) => Segment::Key(part.to_string()),
            })
            .collect()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A pushed relative path and the number of segments it added.
#[derive(Debug)]
struct Frame {
    label: String,
    len: usize,
}

/// Push and pop counts, for checking that a walk is balanced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorStats {
    pub pushes: usize,
    pub pops: usize,
}

/// Stack-based address builder over a `serde_json::Value` tree.
#[derive(Debug)]
pub struct PathCursor<'a> {
    root: &'a Value,
    segments: Vec<Segment>,
    frames: Vec<Frame>,
    stats: CursorStats,
}

/// The "is configured" rule: a true boolean, a non-zero number, a non-empty
/// string or list, or any object.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

fn resolve<'v>(mut value: &'v Value, segments: &[Segment]) -> Option<&'v Value> {
    for segment in segments {
        value = match (segment, value) {
            (Segment::Key(key), Value::Object(map)) => map.get(key)?,
            (Segment::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(value)
}

impl<'a> PathCursor<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            segments: Vec::new(),
            frames: Vec::new(),
            stats: CursorStats::default(),
        }
    }

    /// Append a relative path such as `"sort.0"`.
    pub fn push(&mut self, rel: &str) {
        let parsed = Segment::parse(rel);
        self.frames.push(Frame {
            label: rel.to_string(),
            len: parsed.len(),
        });
        self.segments.extend(parsed);
        self.stats.pushes += 1;
    }

    /// Append a list index.
    pub fn push_index(&mut self, index: usize) {
        self.frames.push(Frame {
            label: index.to_string(),
            len: 1,
        });
        self.segments.push(Segment::Index(index));
        self.stats.pushes += 1;
    }

    /// Remove the most recent push, which must have been `rel`.
    pub fn pop(&mut self, rel: &str) {
        debug_assert!(!self.frames.is_empty(), "pop of `{rel}` on an empty cursor");
        let Some(frame) = self.frames.pop() else {
            return;
        };
        debug_assert_eq!(frame.label, rel, "misbalanced cursor pop");
        let keep = self.segments.len().saturating_sub(frame.len);
        self.segments.truncate(keep);
        self.stats.pops += 1;
    }

    pub fn pop_index(&mut self, index: usize) {
        self.pop(&index.to_string());
    }

    /// Run `f` with `rel` pushed, popping it afterwards on every path.
    pub fn within<T>(&mut self, rel: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.push(rel);
        let result = f(self);
        self.pop(rel);
        result
    }

    pub fn within_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.push_index(index);
        let result = f(self);
        self.pop_index(index);
        result
    }

    /// Value at the cursor and whether it is configured.
    pub fn get_ok(&self) -> (Option<&'a Value>, bool) {
        let value = resolve(self.root, &self.segments);
        (value, value.is_some_and(is_present))
    }

    /// Value at the cursor, configured or not.
    pub fn get(&self) -> Option<&'a Value> {
        resolve(self.root, &self.segments)
    }

    /// Raw value of a relative path, without moving the cursor.
    pub fn get_with(&self, rel: &str) -> Option<&'a Value> {
        let here = resolve(self.root, &self.segments)?;
        resolve(here, &Segment::parse(rel))
    }

    /// Value of a relative path and whether it is configured.
    pub fn get_ok_with(&self, rel: &str) -> (Option<&'a Value>, bool) {
        let value = self.get_with(rel);
        (value, value.is_some_and(is_present))
    }

    /// Number of elements of the list at a relative path; zero when absent.
    pub fn len_of(&self, rel: &str) -> usize {
        match self.get_with(rel) {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    /// Dotted form of the current path.
    pub fn path(&self) -> String {
        self.segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Dotted form of a relative path under the current one.
    pub fn path_with(&self, rel: &str) -> String {
        if self.segments.is_empty() {
            rel.to_string()
        } else {
            format!("{}.{}", self.path(), rel)
        }
    }

    /// Number of frames currently pushed.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn stats(&self) -> CursorStats {
        self.stats
    }
}
