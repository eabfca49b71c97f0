//! Widget definitions carried by graph cells, and their shared sub-shapes.

use serde::{Deserialize, Serialize};

use super::enums::{
    DistributionWidgetDefinitionType, HeatMapWidgetDefinitionType, LogStreamWidgetDefinitionType,
    TimeseriesWidgetDefinitionType, TimeseriesWidgetLegendColumn, TimeseriesWidgetLegendLayout,
    ToplistWidgetDefinitionType, WidgetMessageDisplay, WidgetSort, WidgetTextAlign,
};
use super::requests::{
    DistributionWidgetRequest, HeatMapWidgetRequest, TimeseriesWidgetRequest, ToplistWidgetRequest,
};
use super::time::WidgetTime;

/// Timeseries widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesWidgetDefinition {
    #[serde(rename = "type")]
    pub definition_type: TimeseriesWidgetDefinitionType,
    pub requests: Vec<TimeseriesWidgetRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<WidgetCustomLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<WidgetEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_columns: Option<Vec<TimeseriesWidgetLegendColumn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_layout: Option<TimeseriesWidgetLegendLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<WidgetMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_yaxis: Option<WidgetAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<WidgetTextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<WidgetAxis>,
}

/// Toplist widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToplistWidgetDefinition {
    #[serde(rename = "type")]
    pub definition_type: ToplistWidgetDefinitionType,
    pub requests: Vec<ToplistWidgetRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<WidgetCustomLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<WidgetTextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_size: Option<String>,
}

/// Heat map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatMapWidgetDefinition {
    #[serde(rename = "type")]
    pub definition_type: HeatMapWidgetDefinitionType,
    pub requests: Vec<HeatMapWidgetRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<WidgetCustomLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<WidgetEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<WidgetTextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<WidgetAxis>,
}

/// Distribution widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionWidgetDefinition {
    #[serde(rename = "type")]
    pub definition_type: DistributionWidgetDefinitionType,
    pub requests: Vec<DistributionWidgetRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<WidgetMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<WidgetTextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<DistributionWidgetXAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<DistributionWidgetYAxis>,
}

/// Log stream widget. Carries its query inline instead of requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogStreamWidgetDefinition {
    #[serde(rename = "type")]
    pub definition_type: LogStreamWidgetDefinitionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_display: Option<WidgetMessageDisplay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_date_column: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_message_column: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<WidgetFieldSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<WidgetTextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_size: Option<String>,
}

/// Link shown in the widget context menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetCustomLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_label: Option<String>,
}

/// Horizontal marker line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetMarker {
    /// Value or range, e.g. `y > 80`.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Event overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetEvent {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_execution: Option<String>,
}

/// Y axis of timeseries and heat map widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetAxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionWidgetXAxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionWidgetYAxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

/// Column sort of a log stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetFieldSort {
    pub column: String,
    pub order: WidgetSort,
}
