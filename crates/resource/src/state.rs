//! Resource data: desired configuration, identity and recorded state.
//!
//! Responsibilities:
//! - Hold the desired configuration tree the builders walk.
//! - Hold the remote id and the decomposed state of the last read.
//! - Validate and commit decomposed state all-or-nothing.
//!
//! Does NOT handle:
//! - Persisting any of this to disk (the CLI owns the state file).
//!
//! Invariants:
//! - The configuration root is always a JSON object.
//! - A failed [`StateWriter::set`] leaves the committed state untouched.

use serde_json::{Map, Value};

use crate::cursor::PathCursor;
use crate::error::{Operation, ResourceError, Result};

/// Expected shape of a top-level state attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Scalar,
    /// List holding exactly one object.
    Block,
    /// List of objects.
    Objects,
}

fn shape_of(key: &str) -> Option<Shape> {
    match key {
        "name" | "status" | "type" | "created" | "modified" => Some(Shape::Scalar),
        "time" | "metadata" | "author" => Some(Shape::Block),
        "cell" => Some(Shape::Objects),
        _ => None,
    }
}

fn check_shape(key: &str, shape: Shape, value: &Value) -> std::result::Result<(), String> {
    match (shape, value) {
        (Shape::Scalar, Value::Array(_) | Value::Object(_)) => {
            Err("expected a scalar value".to_string())
        }
        (Shape::Scalar, _) => Ok(()),
        (Shape::Block, Value::Array(items)) if items.len() == 1 && items[0].is_object() => Ok(()),
        (Shape::Block, _) => Err(format!("expected a single `{key}` block")),
        (Shape::Objects, Value::Array(items)) if items.iter().all(Value::is_object) => Ok(()),
        (Shape::Objects, _) => Err("expected a list of objects".to_string()),
    }
}

/// Desired configuration, remote identity and recorded state of one notebook.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData {
    id: Option<String>,
    config: Value,
    state: Map<String, Value>,
}

impl ResourceData {
    /// Wrap a desired configuration tree.
    pub fn new(config: Value) -> Result<Self> {
        if !config.is_object() {
            return Err(ResourceError::InvalidConfig {
                reason: "the configuration root must be an object".to_string(),
            });
        }
        Ok(Self {
            id: None,
            config,
            state: Map::new(),
        })
    }

    /// Resource data with no desired configuration, e.g. for import.
    pub fn empty() -> Self {
        Self {
            id: None,
            config: Value::Object(Map::new()),
            state: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Adopt `prior` as the recorded state and copy its computed cell ids
    /// into the desired cells, by position.
    pub fn with_prior_state(mut self, prior: Map<String, Value>) -> Self {
        if let (Some(Value::Array(desired)), Some(Value::Array(recorded))) =
            (self.config.get_mut("cell"), prior.get("cell"))
        {
            for (cell, old) in desired.iter_mut().zip(recorded) {
                let Some(cell) = cell.as_object_mut() else {
                    continue;
                };
                let has_id = cell
                    .get("id")
                    .and_then(Value::as_str)
                    .is_some_and(|id| !id.is_empty());
                if has_id {
                    continue;
                }
                if let Some(id) = old.get("id").filter(|id| id.is_string()) {
                    cell.insert("id".to_string(), id.clone());
                }
            }
        }
        self.state = prior;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Forget the remote identity and the recorded state.
    pub fn clear_id(&mut self) {
        self.id = None;
        self.state = Map::new();
    }

    /// Numeric id for API calls.
    pub fn notebook_id(&self, operation: Operation) -> Result<i64> {
        let id = self.id().ok_or(ResourceError::MissingId { operation })?;
        id.parse::<i64>()
            .map_err(|_| ResourceError::InvalidId { id: id.to_string() })
    }

    pub fn config(&self) -> &Value {
        &self.config
    }

    pub fn state(&self) -> &Map<String, Value> {
        &self.state
    }

    /// Cursor rooted at the desired configuration.
    pub fn cursor(&self) -> PathCursor<'_> {
        PathCursor::new(&self.config)
    }

    /// Start staging a new state.
    pub fn writer(&mut self) -> StateWriter<'_> {
        StateWriter {
            data: self,
            staged: Map::new(),
        }
    }

    /// The recorded state as a configuration tree, for re-planning.
    pub fn state_as_config(&self) -> Value {
        Value::Object(self.state.clone())
    }
}

/// Staged state; nothing is visible until [`StateWriter::commit`].
#[derive(Debug)]
pub struct StateWriter<'a> {
    data: &'a mut ResourceData,
    staged: Map<String, Value>,
}

impl StateWriter<'_> {
    /// Stage one top-level attribute after checking its key and shape.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let shape = shape_of(key).ok_or_else(|| ResourceError::State {
            key: key.to_string(),
            reason: "unknown attribute".to_string(),
        })?;
        check_shape(key, shape, &value).map_err(|reason| ResourceError::State {
            key: key.to_string(),
            reason,
        })?;
        self.staged.insert(key.to_string(), value);
        Ok(())
    }

    /// Stage every attribute of `values`; stops at the first rejection.
    pub fn set_all(&mut self, values: Map<String, Value>) -> Result<()> {
        for (key, value) in values {
            self.set(&key, value)?;
        }
        Ok(())
    }

    /// Replace the recorded state with everything staged.
    pub fn commit(self) {
        self.data.state = self.staged;
    }
}
