//! Notebook cells and the `notebook_cell_attributes` oneOf.

use serde::{Deserialize, Serialize};

use super::enums::{NotebookCellResourceType, NotebookGraphSize, NotebookMarkdownCellDefinitionType};
use super::time::NotebookCellTime;
use super::widgets::{
    DistributionWidgetDefinition, HeatMapWidgetDefinition, LogStreamWidgetDefinition,
    TimeseriesWidgetDefinition, ToplistWidgetDefinition,
};

/// Cell sent when creating a notebook, or appended during an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCellCreateRequest {
    pub attributes: NotebookCellAttributes,
    #[serde(rename = "type")]
    pub cell_type: NotebookCellResourceType,
}

/// Existing cell sent during an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCellUpdateRequest {
    pub attributes: NotebookCellAttributes,
    pub id: String,
    #[serde(rename = "type")]
    pub cell_type: NotebookCellResourceType,
}

/// Cell of an update request: either an existing cell (with id) or a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotebookUpdateCell {
    Update(NotebookCellUpdateRequest),
    Create(NotebookCellCreateRequest),
}

/// Cell as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCellResponse {
    pub attributes: NotebookCellAttributes,
    pub id: String,
    #[serde(rename = "type")]
    pub cell_type: NotebookCellResourceType,
}

/// Cell content. The variant is selected by the definition `type`.
///
/// `Unparsed` holds any payload none of the known variants accept, so a
/// notebook holding a cell kind this crate does not model still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotebookCellAttributes {
    Markdown(NotebookMarkdownCellAttributes),
    Timeseries(NotebookTimeseriesCellAttributes),
    Toplist(NotebookToplistCellAttributes),
    HeatMap(NotebookHeatMapCellAttributes),
    Distribution(NotebookDistributionCellAttributes),
    LogStream(NotebookLogStreamCellAttributes),
    Unparsed(serde_json::Value),
}

impl NotebookCellAttributes {
    /// Short name of the cell kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Markdown(_) => "markdown",
            Self::Timeseries(_) => "timeseries",
            Self::Toplist(_) => "toplist",
            Self::HeatMap(_) => "heat_map",
            Self::Distribution(_) => "distribution",
            Self::LogStream(_) => "log_stream",
            Self::Unparsed(_) => "unparsed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookMarkdownCellAttributes {
    pub definition: NotebookMarkdownCellDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookMarkdownCellDefinition {
    /// Markdown source.
    pub text: String,
    #[serde(rename = "type")]
    pub definition_type: NotebookMarkdownCellDefinitionType,
}

/// Attributes shared by every graph cell, parameterized by its widget definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookWidgetCellAttributes<D> {
    pub definition: D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_size: Option<NotebookGraphSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_by: Option<NotebookSplitBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NotebookCellTime>,
}

pub type NotebookTimeseriesCellAttributes = NotebookWidgetCellAttributes<TimeseriesWidgetDefinition>;
pub type NotebookToplistCellAttributes = NotebookWidgetCellAttributes<ToplistWidgetDefinition>;
pub type NotebookHeatMapCellAttributes = NotebookWidgetCellAttributes<HeatMapWidgetDefinition>;
pub type NotebookDistributionCellAttributes =
    NotebookWidgetCellAttributes<DistributionWidgetDefinition>;
pub type NotebookLogStreamCellAttributes = NotebookWidgetCellAttributes<LogStreamWidgetDefinition>;

/// Graph splitting by tag keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookSplitBy {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
