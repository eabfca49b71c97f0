//! Notebook models for the notebooks API (v1).
//!
//! Responsibilities:
//! - Request envelopes for create and update, and the response envelope.
//! - The oneOf containers (global time, cell time, cell attributes, update
//!   cell, formula query) as `#[serde(untagged)]` enums.
//! - Closed enumerations with their exact wire spelling.
//!
//! Does NOT handle:
//! - Translation from or to a declarative configuration tree.
//! - Validation beyond what deserialization enforces.
//!
//! Invariants:
//! - Optional fields are `Option<T>` and are skipped when `None`, so a field
//!   absent on input stays absent on output.

mod cells;
mod enums;
mod formulas;
mod queries;
mod requests;
mod time;
mod widgets;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub use cells::*;
pub use enums::*;
pub use formulas::*;
pub use queries::*;
pub use requests::*;
pub use time::*;
pub use widgets::*;

/// Body of `POST /api/v1/notebooks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCreateRequest {
    pub data: NotebookCreateData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCreateData {
    pub attributes: NotebookCreateDataAttributes,
    #[serde(rename = "type")]
    pub resource_type: NotebookResourceType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCreateDataAttributes {
    pub cells: Vec<NotebookCellCreateRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NotebookMetadata>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NotebookStatus>,
    pub time: NotebookGlobalTime,
}

/// Body of `PUT /api/v1/notebooks/{id}`. Always carries the full notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookUpdateRequest {
    pub data: NotebookUpdateData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookUpdateData {
    pub attributes: NotebookUpdateDataAttributes,
    #[serde(rename = "type")]
    pub resource_type: NotebookResourceType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookUpdateDataAttributes {
    pub cells: Vec<NotebookUpdateCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NotebookMetadata>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NotebookStatus>,
    pub time: NotebookGlobalTime,
}

/// Response of create, get and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NotebookResponseData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookResponseData {
    pub id: i64,
    #[serde(rename = "type")]
    pub resource_type: NotebookResourceType,
    pub attributes: NotebookResponseDataAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookResponseDataAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<NotebookAuthor>,
    #[serde(default)]
    pub cells: Vec<NotebookCellResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NotebookMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<FixedOffset>>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NotebookStatus>,
    pub time: NotebookGlobalTime,
}

/// User who created the notebook. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Notebook flags and classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_snapshots: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub metadata_type: Option<NotebookMetadataType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_json() -> serde_json::Value {
        json!({
            "data": {
                "id": 123456,
                "type": "notebooks",
                "attributes": {
                    "name": "Incident notes",
                    "status": "published",
                    "time": {"live_span": "1h"},
                    "created": "2021-02-24T23:14:15.173964+00:00",
                    "modified": "2021-02-24T23:14:15.173964+00:00",
                    "metadata": {"is_template": false, "take_snapshots": false, "type": null},
                    "author": {"handle": "jane@example.com", "name": null, "verified": true},
                    "cells": [
                        {
                            "id": "abc12345",
                            "type": "notebook_cells",
                            "attributes": {"definition": {"type": "markdown", "text": "# hi"}}
                        },
                        {
                            "id": "def67890",
                            "type": "notebook_cells",
                            "attributes": {
                                "definition": {
                                    "type": "timeseries",
                                    "requests": [{"q": "avg:system.load.1{*}", "display_type": "line"}]
                                },
                                "graph_size": "m",
                                "time": null
                            }
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_deserialize_response() {
        let response: NotebookResponse = serde_json::from_value(response_json()).unwrap();
        let data = response.data.unwrap();

        assert_eq!(data.id, 123456);
        assert_eq!(data.attributes.name, "Incident notes");
        assert_eq!(data.attributes.cells.len(), 2);
        assert!(matches!(
            data.attributes.cells[0].attributes,
            NotebookCellAttributes::Markdown(_)
        ));
        match &data.attributes.cells[1].attributes {
            NotebookCellAttributes::Timeseries(cell) => {
                assert_eq!(cell.graph_size, Some(NotebookGraphSize::Medium));
                assert!(cell.time.is_none());
                assert_eq!(cell.definition.requests.len(), 1);
            }
            other => panic!("expected timeseries cell, got {}", other.kind()),
        }
        let metadata = data.attributes.metadata.unwrap();
        assert_eq!(metadata.metadata_type, None);
        assert_eq!(data.attributes.author.unwrap().handle.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_unknown_cell_kind_is_kept_unparsed() {
        let cell: NotebookCellResponse = serde_json::from_value(json!({
            "id": "x",
            "type": "notebook_cells",
            "attributes": {"definition": {"type": "query_value", "requests": []}}
        }))
        .unwrap();
        assert_eq!(cell.attributes.kind(), "unparsed");
    }

    #[test]
    fn test_update_cell_shape_follows_id() {
        let update = NotebookUpdateCell::Update(NotebookCellUpdateRequest {
            id: "abc".to_string(),
            cell_type: NotebookCellResourceType::NotebookCells,
            attributes: NotebookCellAttributes::Markdown(NotebookMarkdownCellAttributes {
                definition: NotebookMarkdownCellDefinition {
                    text: "x".to_string(),
                    definition_type: NotebookMarkdownCellDefinitionType::Markdown,
                },
            }),
        });
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["id"], "abc");

        let parsed: NotebookUpdateCell = serde_json::from_value(json!({
            "type": "notebook_cells",
            "attributes": {"definition": {"type": "markdown", "text": "y"}}
        }))
        .unwrap();
        assert!(matches!(parsed, NotebookUpdateCell::Create(_)));
    }
}
