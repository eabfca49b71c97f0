//! Widget definitions of the graph cells.

use notebook_client::models::{
    DistributionWidgetDefinition, DistributionWidgetDefinitionType, DistributionWidgetXAxis,
    DistributionWidgetYAxis, HeatMapWidgetDefinition, HeatMapWidgetDefinitionType,
    LogStreamWidgetDefinition, LogStreamWidgetDefinitionType, TimeseriesWidgetDefinition,
    TimeseriesWidgetDefinitionType, ToplistWidgetDefinition, ToplistWidgetDefinitionType,
    WidgetAxis, WidgetCustomLink, WidgetEvent, WidgetFieldSort, WidgetMarker,
};

use super::request::{
    build_distribution_request, build_heatmap_request, build_timeseries_request,
    build_toplist_request,
};
use super::time::build_widget_time;
use super::{build_list, optional_block, optional_list};
use crate::cursor::PathCursor;
use crate::error::{ResourceError, Result};
use crate::extract;

/// Axis bound sent when the configuration leaves it out.
const AXIS_AUTO: &str = "auto";

/// Build the non-empty `request[]` list.
fn build_requests<'a, T>(
    c: &mut PathCursor<'a>,
    build: impl FnMut(&mut PathCursor<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    if c.len_of("request") == 0 {
        return Err(ResourceError::MissingField {
            path: c.path_with("request"),
        });
    }
    build_list(c, "request", build)
}

fn axis_bound(c: &PathCursor<'_>, rel: &str) -> Result<Option<String>> {
    Ok(Some(
        extract::optional(c, rel)?.unwrap_or_else(|| AXIS_AUTO.to_string()),
    ))
}

fn build_axis(c: &mut PathCursor<'_>) -> Result<WidgetAxis> {
    Ok(WidgetAxis {
        include_zero: extract::optional(c, "include_zero")?,
        label: extract::optional(c, "label")?,
        max: axis_bound(c, "max")?,
        min: axis_bound(c, "min")?,
        scale: extract::optional(c, "scale")?,
    })
}

fn build_custom_link(c: &mut PathCursor<'_>) -> Result<WidgetCustomLink> {
    Ok(WidgetCustomLink {
        is_hidden: extract::optional(c, "is_hidden")?,
        label: extract::optional(c, "label")?,
        link: extract::optional(c, "link")?,
        override_label: extract::optional(c, "override_label")?,
    })
}

fn build_marker(c: &mut PathCursor<'_>) -> Result<WidgetMarker> {
    Ok(WidgetMarker {
        value: extract::required(c, "value")?,
        display_type: extract::optional(c, "display_type")?,
        label: extract::optional(c, "label")?,
        time: extract::optional(c, "time")?,
    })
}

fn build_event(c: &mut PathCursor<'_>) -> Result<WidgetEvent> {
    Ok(WidgetEvent {
        q: extract::required(c, "q")?,
        tags_execution: extract::optional(c, "tags_execution")?,
    })
}

pub(crate) fn build_timeseries(c: &mut PathCursor<'_>) -> Result<TimeseriesWidgetDefinition> {
    Ok(TimeseriesWidgetDefinition {
        definition_type: TimeseriesWidgetDefinitionType::Timeseries,
        requests: build_requests(c, build_timeseries_request)?,
        custom_links: optional_list(c, "custom_link", build_custom_link)?,
        events: optional_list(c, "event", build_event)?,
        legend_columns: extract::optional_enum_list(c, "legend_columns")?,
        legend_layout: extract::optional_enum(c, "legend_layout")?,
        legend_size: extract::optional(c, "legend_size")?,
        markers: optional_list(c, "marker", build_marker)?,
        right_yaxis: optional_block(c, "right_yaxis", build_axis)?,
        show_legend: extract::optional(c, "show_legend")?,
        time: optional_block(c, "time", build_widget_time)?,
        title: extract::optional(c, "title")?,
        title_align: extract::optional_enum(c, "title_align")?,
        title_size: extract::optional(c, "title_size")?,
        yaxis: optional_block(c, "yaxis", build_axis)?,
    })
}

pub(crate) fn build_toplist(c: &mut PathCursor<'_>) -> Result<ToplistWidgetDefinition> {
    Ok(ToplistWidgetDefinition {
        definition_type: ToplistWidgetDefinitionType::Toplist,
        requests: build_requests(c, build_toplist_request)?,
        custom_links: optional_list(c, "custom_link", build_custom_link)?,
        time: optional_block(c, "time", build_widget_time)?,
        title: extract::optional(c, "title")?,
        title_align: extract::optional_enum(c, "title_align")?,
        title_size: extract::optional(c, "title_size")?,
    })
}

pub(crate) fn build_heatmap(c: &mut PathCursor<'_>) -> Result<HeatMapWidgetDefinition> {
    Ok(HeatMapWidgetDefinition {
        definition_type: HeatMapWidgetDefinitionType::Heatmap,
        requests: build_requests(c, build_heatmap_request)?,
        custom_links: optional_list(c, "custom_link", build_custom_link)?,
        events: optional_list(c, "event", build_event)?,
        legend_size: extract::optional(c, "legend_size")?,
        show_legend: extract::optional(c, "show_legend")?,
        time: optional_block(c, "time", build_widget_time)?,
        title: extract::optional(c, "title")?,
        title_align: extract::optional_enum(c, "title_align")?,
        title_size: extract::optional(c, "title_size")?,
        yaxis: optional_block(c, "yaxis", build_axis)?,
    })
}

pub(crate) fn build_distribution(c: &mut PathCursor<'_>) -> Result<DistributionWidgetDefinition> {
    Ok(DistributionWidgetDefinition {
        definition_type: DistributionWidgetDefinitionType::Distribution,
        requests: build_requests(c, build_distribution_request)?,
        legend_size: extract::optional(c, "legend_size")?,
        markers: optional_list(c, "marker", build_marker)?,
        show_legend: extract::optional(c, "show_legend")?,
        time: optional_block(c, "time", build_widget_time)?,
        title: extract::optional(c, "title")?,
        title_align: extract::optional_enum(c, "title_align")?,
        title_size: extract::optional(c, "title_size")?,
        xaxis: optional_block(c, "xaxis", |c| {
            Ok(DistributionWidgetXAxis {
                include_zero: extract::optional(c, "include_zero")?,
                max: axis_bound(c, "max")?,
                min: axis_bound(c, "min")?,
                scale: extract::optional(c, "scale")?,
            })
        })?,
        yaxis: optional_block(c, "yaxis", |c| {
            Ok(DistributionWidgetYAxis {
                include_zero: extract::optional(c, "include_zero")?,
                label: extract::optional(c, "label")?,
                max: axis_bound(c, "max")?,
                min: axis_bound(c, "min")?,
                scale: extract::optional(c, "scale")?,
            })
        })?,
    })
}

pub(crate) fn build_log_stream(c: &mut PathCursor<'_>) -> Result<LogStreamWidgetDefinition> {
    Ok(LogStreamWidgetDefinition {
        definition_type: LogStreamWidgetDefinitionType::LogStream,
        columns: extract::optional_list(c, "columns")?,
        indexes: extract::optional_list(c, "indexes")?,
        message_display: extract::optional_enum(c, "message_display")?,
        query: extract::optional(c, "query")?,
        show_date_column: extract::optional(c, "show_date_column")?,
        show_message_column: extract::optional(c, "show_message_column")?,
        sort: optional_block(c, "sort", |c| {
            Ok(WidgetFieldSort {
                column: extract::required(c, "column")?,
                order: extract::required_enum(c, "order")?,
            })
        })?,
        time: optional_block(c, "time", build_widget_time)?,
        title: extract::optional(c, "title")?,
        title_align: extract::optional_enum(c, "title_align")?,
        title_size: extract::optional(c, "title_size")?,
    })
}
