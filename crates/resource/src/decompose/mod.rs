//! Decomposers: API response to configuration tree.
//!
//! Responsibilities:
//! - Mirror every builder: each present WIRE field becomes a DECL key, each
//!   oneOf becomes a single-element list named after its variant.
//! - Format timestamps in the configuration layout.
//!
//! Does NOT handle:
//! - Writing into the state store (see `lifecycle`, which commits the
//!   result through a [`crate::state::StateWriter`]).
//!
//! Invariants:
//! - Absent WIRE fields are omitted, never written as null.
//! - List order is kept.

mod cell;
mod notebook;
mod request;
mod widget;

pub use notebook::decompose_notebook;

use chrono::{DateTime, FixedOffset};
use notebook_client::models::WireEnum;
use serde_json::{Map, Value};

use crate::extract::format_timestamp;

/// A configuration object under construction.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct DeclMap(Map<String, Value>);

impl DeclMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub(crate) fn set_opt<T: Into<Value>>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub(crate) fn set_enum<E: WireEnum>(&mut self, key: &str, value: E) {
        self.set(key, value.as_str());
    }

    pub(crate) fn set_enum_opt<E: WireEnum>(&mut self, key: &str, value: Option<E>) {
        if let Some(value) = value {
            self.set_enum(key, value);
        }
    }

    pub(crate) fn set_timestamp(&mut self, key: &str, value: &DateTime<FixedOffset>) {
        self.set(key, format_timestamp(value));
    }

    pub(crate) fn set_strings(&mut self, key: &str, values: Option<&[String]>) {
        if let Some(values) = values {
            self.set(key, values.to_vec());
        }
    }

    pub(crate) fn set_enums<E: WireEnum>(&mut self, key: &str, values: Option<&[E]>) {
        if let Some(values) = values {
            let values: Vec<Value> = values.iter().map(|v| Value::from(v.as_str())).collect();
            self.set(key, values);
        }
    }

    /// Single-element list holding `block`.
    pub(crate) fn set_block(&mut self, key: &str, block: DeclMap) {
        self.set(key, vec![block.into_value()]);
    }

    pub(crate) fn set_block_opt(&mut self, key: &str, block: Option<DeclMap>) {
        if let Some(block) = block {
            self.set_block(key, block);
        }
    }

    pub(crate) fn set_list(&mut self, key: &str, items: Vec<DeclMap>) {
        let items: Vec<Value> = items.into_iter().map(DeclMap::into_value).collect();
        self.set(key, items);
    }

    pub(crate) fn set_list_opt(&mut self, key: &str, items: Option<Vec<DeclMap>>) {
        if let Some(items) = items {
            self.set_list(key, items);
        }
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub(crate) fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Wrap a oneOf variant as `{ <variant>: [block] }`.
pub(crate) fn variant(name: &str, block: DeclMap) -> DeclMap {
    let mut wrapper = DeclMap::new();
    wrapper.set_block(name, block);
    wrapper
}
