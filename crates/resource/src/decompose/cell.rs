//! Cells, cell attributes and the time oneOfs.

use notebook_client::models::{
    NotebookAbsoluteTime, NotebookCellAttributes, NotebookCellResponse, NotebookCellTime,
    NotebookRelativeTime, NotebookWidgetCellAttributes,
};

use super::widget::{
    decompose_distribution, decompose_heatmap, decompose_log_stream, decompose_timeseries,
    decompose_toplist,
};
use super::{DeclMap, variant};
use crate::build::cell::{DISTRIBUTION, HEAT_MAP, LOG_STREAM, MARKDOWN, TIMESERIES, TOPLIST};
use crate::build::time::{ABSOLUTE, RELATIVE};
use crate::error::{ResourceError, Result};

pub(crate) fn decompose_relative_time(time: &NotebookRelativeTime) -> DeclMap {
    let mut block = DeclMap::new();
    block.set_enum("live_span", time.live_span);
    variant(RELATIVE, block)
}

pub(crate) fn decompose_absolute_time(time: &NotebookAbsoluteTime) -> DeclMap {
    let mut block = DeclMap::new();
    block.set_timestamp("start", &time.start);
    block.set_timestamp("end", &time.end);
    block.set_opt("live", time.live);
    variant(ABSOLUTE, block)
}

fn decompose_graph_cell<D>(
    attributes: &NotebookWidgetCellAttributes<D>,
    definition: impl FnOnce(&D) -> DeclMap,
) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_block("definition", definition(&attributes.definition));
    map.set_enum_opt("graph_size", attributes.graph_size);
    map.set_block_opt(
        "split_by",
        attributes
            .split_by
            .as_ref()
            .filter(|split_by| !split_by.keys.is_empty() || !split_by.tags.is_empty())
            .map(|split_by| {
                let mut block = DeclMap::new();
                block.set("keys", split_by.keys.clone());
                block.set("tags", split_by.tags.clone());
                block
            }),
    );
    map.set_block_opt(
        "time",
        attributes.time.as_ref().map(|time| match time {
            NotebookCellTime::Relative(time) => decompose_relative_time(time),
            NotebookCellTime::Absolute(time) => decompose_absolute_time(time),
        }),
    );
    map
}

fn decompose_attributes(attributes: &NotebookCellAttributes, path: &str) -> Result<DeclMap> {
    Ok(match attributes {
        NotebookCellAttributes::Markdown(markdown) => {
            let mut definition = DeclMap::new();
            definition.set("text", markdown.definition.text.clone());
            definition.set_enum("type", markdown.definition.definition_type);
            let mut map = DeclMap::new();
            map.set_block("definition", definition);
            variant(MARKDOWN, map)
        }
        NotebookCellAttributes::Timeseries(cell) => {
            variant(TIMESERIES, decompose_graph_cell(cell, decompose_timeseries))
        }
        NotebookCellAttributes::Toplist(cell) => {
            variant(TOPLIST, decompose_graph_cell(cell, decompose_toplist))
        }
        NotebookCellAttributes::HeatMap(cell) => {
            variant(HEAT_MAP, decompose_graph_cell(cell, decompose_heatmap))
        }
        NotebookCellAttributes::Distribution(cell) => {
            variant(DISTRIBUTION, decompose_graph_cell(cell, decompose_distribution))
        }
        NotebookCellAttributes::LogStream(cell) => {
            variant(LOG_STREAM, decompose_graph_cell(cell, decompose_log_stream))
        }
        NotebookCellAttributes::Unparsed(_) => {
            return Err(ResourceError::UnparsedObject {
                path: path.to_string(),
            });
        }
    })
}

/// Decompose the cell at `index` of a response.
pub(crate) fn decompose_cell(cell: &NotebookCellResponse, index: usize) -> Result<DeclMap> {
    let path = format!("cell.{index}.attributes");
    let mut map = DeclMap::new();
    map.set("id", cell.id.clone());
    map.set_enum("type", cell.cell_type);
    map.set_block("attributes", decompose_attributes(&cell.attributes, &path)?);
    Ok(map)
}
