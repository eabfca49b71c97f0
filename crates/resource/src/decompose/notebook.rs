//! Notebook root, including the read-only attributes.

use notebook_client::models::{NotebookAuthor, NotebookGlobalTime, NotebookResponseData};
use serde_json::{Map, Value};
use tracing::trace;

use super::DeclMap;
use super::cell::{decompose_absolute_time, decompose_cell, decompose_relative_time};
use crate::error::Result;

fn decompose_author(author: &NotebookAuthor) -> DeclMap {
    let mut map = DeclMap::new();
    if let Some(created_at) = &author.created_at {
        map.set_timestamp("created_at", created_at);
    }
    map.set_opt("disabled", author.disabled);
    map.set_opt("email", author.email.clone());
    map.set_opt("handle", author.handle.clone());
    map.set_opt("icon", author.icon.clone());
    map.set_opt("name", author.name.clone());
    map.set_opt("status", author.status.clone());
    map.set_opt("title", author.title.clone());
    map.set_opt("verified", author.verified);
    map
}

/// Decompose a notebook response into top-level state attributes.
pub fn decompose_notebook(data: &NotebookResponseData) -> Result<Map<String, Value>> {
    let attributes = &data.attributes;
    let mut map = DeclMap::new();

    map.set("name", attributes.name.clone());
    map.set_enum_opt("status", attributes.status);
    map.set_enum("type", data.resource_type);
    map.set_block(
        "time",
        match &attributes.time {
            NotebookGlobalTime::Relative(time) => decompose_relative_time(time),
            NotebookGlobalTime::Absolute(time) => decompose_absolute_time(time),
        },
    );
    map.set_block_opt(
        "metadata",
        attributes.metadata.as_ref().map(|metadata| {
            let mut block = DeclMap::new();
            block.set_opt("is_template", metadata.is_template);
            block.set_opt("take_snapshots", metadata.take_snapshots);
            block.set_enum_opt("type", metadata.metadata_type);
            block
        }),
    );

    if let Some(created) = &attributes.created {
        map.set_timestamp("created", created);
    }
    if let Some(modified) = &attributes.modified {
        map.set_timestamp("modified", modified);
    }
    map.set_block_opt("author", attributes.author.as_ref().map(decompose_author));

    let cells = attributes
        .cells
        .iter()
        .enumerate()
        .map(|(index, cell)| decompose_cell(cell, index))
        .collect::<Result<Vec<_>>>()?;
    trace!(notebook_id = data.id, cells = cells.len(), "decomposed notebook");
    map.set_list("cell", cells);

    Ok(map.into_map())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_client::models::NotebookResponse;
    use notebook_client::testing::load_fixture;
    use serde_json::json;

    fn fixture(path: &str) -> NotebookResponseData {
        let response: NotebookResponse = serde_json::from_value(load_fixture(path)).unwrap();
        response.data.unwrap()
    }

    #[test]
    fn test_root_and_read_only_attributes() {
        let state = decompose_notebook(&fixture("notebooks/create_notebook.json")).unwrap();
        assert_eq!(state["type"], json!("notebooks"));
        assert!(state["time"][0]["notebook_absolute_time"][0]["start"].is_string());
        assert!(state.contains_key("created"));
        assert_eq!(state["cell"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_cells_keep_response_order() {
        let state = decompose_notebook(&fixture("notebooks/get_notebook.json")).unwrap();
        let ids: Vec<&str> = state["cell"]
            .as_array()
            .unwrap()
            .iter()
            .map(|cell| cell["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["hwvgfhdm", "7gk3fm3q", "cg3l9o2v"]);
    }
}
