//! Notebook root: the create and update payloads.

use notebook_client::models::{
    NotebookCreateData, NotebookCreateDataAttributes, NotebookCreateRequest, NotebookGlobalTime,
    NotebookMetadata, NotebookResourceType, NotebookStatus, NotebookUpdateData,
    NotebookUpdateDataAttributes, NotebookUpdateRequest,
};
use tracing::trace;

use super::cell::{build_create_cell, build_update_cell};
use super::time::build_global_time;
use super::{build_list, optional_block, required_block};
use crate::cursor::PathCursor;
use crate::error::Result;
use crate::extract;

/// Root attributes shared by both payloads.
struct Root {
    resource_type: NotebookResourceType,
    metadata: Option<NotebookMetadata>,
    name: String,
    status: Option<NotebookStatus>,
    time: NotebookGlobalTime,
}

fn build_root(c: &mut PathCursor<'_>) -> Result<Root> {
    Ok(Root {
        resource_type: extract::enum_or(c, "type", NotebookResourceType::Notebooks)?,
        metadata: optional_block(c, "metadata", |c| {
            Ok(NotebookMetadata {
                is_template: extract::optional(c, "is_template")?,
                take_snapshots: extract::optional(c, "take_snapshots")?,
                metadata_type: extract::optional_enum(c, "type")?,
            })
        })?
        .filter(|metadata| *metadata != NotebookMetadata::default()),
        name: extract::required(c, "name")?,
        status: Some(extract::enum_or(c, "status", NotebookStatus::Published)?),
        time: required_block(c, "time", build_global_time)?,
    })
}

/// Build the create payload from the configuration under the cursor.
pub fn build_create(c: &mut PathCursor<'_>) -> Result<NotebookCreateRequest> {
    let root = build_root(c)?;
    let cells = build_list(c, "cell", build_create_cell)?;
    trace!(cells = cells.len(), "built notebook create payload");

    Ok(NotebookCreateRequest {
        data: NotebookCreateData {
            attributes: NotebookCreateDataAttributes {
                cells,
                metadata: root.metadata,
                name: root.name,
                status: root.status,
                time: root.time,
            },
            resource_type: root.resource_type,
        },
    })
}

/// Build the update payload. Cells that carry an `id` are sent update-shaped,
/// the others create-shaped, in configuration order.
pub fn build_update(c: &mut PathCursor<'_>) -> Result<NotebookUpdateRequest> {
    let root = build_root(c)?;
    let cells = build_list(c, "cell", build_update_cell)?;
    trace!(cells = cells.len(), "built notebook update payload");

    Ok(NotebookUpdateRequest {
        data: NotebookUpdateData {
            attributes: NotebookUpdateDataAttributes {
                cells,
                metadata: root.metadata,
                name: root.name,
                status: root.status,
                time: root.time,
            },
            resource_type: root.resource_type,
        },
    })
}
