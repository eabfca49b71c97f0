//! Cells and the cell-attributes oneOf.

use notebook_client::models::{
    NotebookCellAttributes, NotebookCellCreateRequest, NotebookCellResourceType,
    NotebookCellUpdateRequest, NotebookMarkdownCellAttributes, NotebookMarkdownCellDefinition,
    NotebookMarkdownCellDefinitionType, NotebookSplitBy, NotebookUpdateCell,
    NotebookWidgetCellAttributes,
};
use tracing::trace;

use super::time::build_cell_time;
use super::widget::{
    build_distribution, build_heatmap, build_log_stream, build_timeseries, build_toplist,
};
use super::{optional_block, required_block, select_variant};
use crate::cursor::PathCursor;
use crate::error::Result;
use crate::extract;

pub(crate) const MARKDOWN: &str = "notebook_markdown_cell_attributes";
pub(crate) const TIMESERIES: &str = "notebook_timeseries_cell_attributes";
pub(crate) const TOPLIST: &str = "notebook_toplist_cell_attributes";
pub(crate) const HEAT_MAP: &str = "notebook_heat_map_cell_attributes";
pub(crate) const DISTRIBUTION: &str = "notebook_distribution_cell_attributes";
pub(crate) const LOG_STREAM: &str = "notebook_log_stream_cell_attributes";

#[derive(Clone, Copy)]
enum Kind {
    Markdown,
    Timeseries,
    Toplist,
    HeatMap,
    Distribution,
    LogStream,
}

const VARIANTS: [(Kind, &str); 6] = [
    (Kind::Markdown, MARKDOWN),
    (Kind::Timeseries, TIMESERIES),
    (Kind::Toplist, TOPLIST),
    (Kind::HeatMap, HEAT_MAP),
    (Kind::Distribution, DISTRIBUTION),
    (Kind::LogStream, LOG_STREAM),
];

/// Build a cell for a create payload; the cursor sits on `cell.<i>`.
pub(crate) fn build_create_cell(c: &mut PathCursor<'_>) -> Result<NotebookCellCreateRequest> {
    Ok(NotebookCellCreateRequest {
        attributes: required_block(c, "attributes", build_attributes)?,
        cell_type: extract::enum_or(c, "type", NotebookCellResourceType::NotebookCells)?,
    })
}

/// Build a cell for an update payload: update-shaped when it carries an id.
pub(crate) fn build_update_cell(c: &mut PathCursor<'_>) -> Result<NotebookUpdateCell> {
    let id: Option<String> = extract::optional(c, "id")?;
    let cell = build_create_cell(c)?;
    Ok(match id {
        Some(id) => NotebookUpdateCell::Update(NotebookCellUpdateRequest {
            attributes: cell.attributes,
            id,
            cell_type: cell.cell_type,
        }),
        None => NotebookUpdateCell::Create(cell),
    })
}

fn build_attributes(c: &mut PathCursor<'_>) -> Result<NotebookCellAttributes> {
    let (kind, name) = select_variant(c, "notebook_cell_attributes", &VARIANTS)?;
    trace!(cell = %c.path(), kind = name, "building cell attributes");

    c.within(&format!("{name}.0"), |c| {
        Ok(match kind {
            Kind::Markdown => NotebookCellAttributes::Markdown(NotebookMarkdownCellAttributes {
                definition: required_block(c, "definition", |c| {
                    Ok(NotebookMarkdownCellDefinition {
                        text: extract::required(c, "text")?,
                        definition_type: extract::enum_or(
                            c,
                            "type",
                            NotebookMarkdownCellDefinitionType::Markdown,
                        )?,
                    })
                })?,
            }),
            Kind::Timeseries => {
                NotebookCellAttributes::Timeseries(build_graph_cell(c, build_timeseries, true)?)
            }
            Kind::Toplist => {
                NotebookCellAttributes::Toplist(build_graph_cell(c, build_toplist, true)?)
            }
            Kind::HeatMap => {
                NotebookCellAttributes::HeatMap(build_graph_cell(c, build_heatmap, true)?)
            }
            Kind::Distribution => NotebookCellAttributes::Distribution(build_graph_cell(
                c,
                build_distribution,
                true,
            )?),
            Kind::LogStream => {
                NotebookCellAttributes::LogStream(build_graph_cell(c, build_log_stream, false)?)
            }
        })
    })
}

/// Shared envelope of the widget cells.
fn build_graph_cell<'a, D>(
    c: &mut PathCursor<'a>,
    definition: impl FnOnce(&mut PathCursor<'a>) -> Result<D>,
    with_split_by: bool,
) -> Result<NotebookWidgetCellAttributes<D>> {
    let split_by = if with_split_by {
        optional_block(c, "split_by", |c| {
            Ok(NotebookSplitBy {
                keys: extract::list_or_empty(c, "keys")?,
                tags: extract::list_or_empty(c, "tags")?,
            })
        })?
        .filter(|split_by| !split_by.keys.is_empty() || !split_by.tags.is_empty())
    } else {
        None
    };

    Ok(NotebookWidgetCellAttributes {
        definition: required_block(c, "definition", definition)?,
        graph_size: extract::optional_enum(c, "graph_size")?,
        split_by,
        time: optional_block(c, "time", build_cell_time)?,
    })
}
