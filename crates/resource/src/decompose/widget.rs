//! Widget definitions.

use notebook_client::models::{
    DistributionWidgetDefinition, HeatMapWidgetDefinition, LogStreamWidgetDefinition,
    TimeseriesWidgetDefinition, ToplistWidgetDefinition, WidgetAxis, WidgetCustomLink,
    WidgetEvent, WidgetMarker, WidgetTextAlign, WidgetTime,
};

use super::DeclMap;
use super::request::{
    decompose_distribution_request, decompose_heatmap_request, decompose_timeseries_request,
    decompose_toplist_request,
};

fn decompose_title(
    map: &mut DeclMap,
    title: &Option<String>,
    title_align: Option<WidgetTextAlign>,
    title_size: &Option<String>,
) {
    map.set_opt("title", title.clone());
    map.set_enum_opt("title_align", title_align);
    map.set_opt("title_size", title_size.clone());
}

fn decompose_time(time: &WidgetTime) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_enum_opt("live_span", time.live_span);
    map
}

fn decompose_axis(axis: &WidgetAxis) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_opt("include_zero", axis.include_zero);
    map.set_opt("label", axis.label.clone());
    map.set_opt("max", axis.max.clone());
    map.set_opt("min", axis.min.clone());
    map.set_opt("scale", axis.scale.clone());
    map
}

fn decompose_custom_links(links: &Option<Vec<WidgetCustomLink>>) -> Option<Vec<DeclMap>> {
    links.as_ref().map(|links| {
        links
            .iter()
            .map(|link| {
                let mut map = DeclMap::new();
                map.set_opt("is_hidden", link.is_hidden);
                map.set_opt("label", link.label.clone());
                map.set_opt("link", link.link.clone());
                map.set_opt("override_label", link.override_label.clone());
                map
            })
            .collect()
    })
}

fn decompose_markers(markers: &Option<Vec<WidgetMarker>>) -> Option<Vec<DeclMap>> {
    markers.as_ref().map(|markers| {
        markers
            .iter()
            .map(|marker| {
                let mut map = DeclMap::new();
                map.set("value", marker.value.clone());
                map.set_opt("display_type", marker.display_type.clone());
                map.set_opt("label", marker.label.clone());
                map.set_opt("time", marker.time.clone());
                map
            })
            .collect()
    })
}

fn decompose_events(events: &Option<Vec<WidgetEvent>>) -> Option<Vec<DeclMap>> {
    events.as_ref().map(|events| {
        events
            .iter()
            .map(|event| {
                let mut map = DeclMap::new();
                map.set("q", event.q.clone());
                map.set_opt("tags_execution", event.tags_execution.clone());
                map
            })
            .collect()
    })
}

pub(crate) fn decompose_timeseries(def: &TimeseriesWidgetDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_list(
        "request",
        def.requests.iter().map(decompose_timeseries_request).collect(),
    );
    map.set_list_opt("custom_link", decompose_custom_links(&def.custom_links));
    map.set_list_opt("event", decompose_events(&def.events));
    map.set_enums("legend_columns", def.legend_columns.as_deref());
    map.set_enum_opt("legend_layout", def.legend_layout);
    map.set_opt("legend_size", def.legend_size.clone());
    map.set_list_opt("marker", decompose_markers(&def.markers));
    map.set_block_opt("right_yaxis", def.right_yaxis.as_ref().map(decompose_axis));
    map.set_opt("show_legend", def.show_legend);
    map.set_block_opt("time", def.time.as_ref().map(decompose_time));
    decompose_title(&mut map, &def.title, def.title_align, &def.title_size);
    map.set_block_opt("yaxis", def.yaxis.as_ref().map(decompose_axis));
    map
}

pub(crate) fn decompose_toplist(def: &ToplistWidgetDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_list(
        "request",
        def.requests.iter().map(decompose_toplist_request).collect(),
    );
    map.set_list_opt("custom_link", decompose_custom_links(&def.custom_links));
    map.set_block_opt("time", def.time.as_ref().map(decompose_time));
    decompose_title(&mut map, &def.title, def.title_align, &def.title_size);
    map
}

pub(crate) fn decompose_heatmap(def: &HeatMapWidgetDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_list(
        "request",
        def.requests.iter().map(decompose_heatmap_request).collect(),
    );
    map.set_list_opt("custom_link", decompose_custom_links(&def.custom_links));
    map.set_list_opt("event", decompose_events(&def.events));
    map.set_opt("legend_size", def.legend_size.clone());
    map.set_opt("show_legend", def.show_legend);
    map.set_block_opt("time", def.time.as_ref().map(decompose_time));
    decompose_title(&mut map, &def.title, def.title_align, &def.title_size);
    map.set_block_opt("yaxis", def.yaxis.as_ref().map(decompose_axis));
    map
}

pub(crate) fn decompose_distribution(def: &DistributionWidgetDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_list(
        "request",
        def.requests.iter().map(decompose_distribution_request).collect(),
    );
    map.set_opt("legend_size", def.legend_size.clone());
    map.set_list_opt("marker", decompose_markers(&def.markers));
    map.set_opt("show_legend", def.show_legend);
    map.set_block_opt("time", def.time.as_ref().map(decompose_time));
    decompose_title(&mut map, &def.title, def.title_align, &def.title_size);
    map.set_block_opt(
        "xaxis",
        def.xaxis.as_ref().map(|axis| {
            let mut block = DeclMap::new();
            block.set_opt("include_zero", axis.include_zero);
            block.set_opt("max", axis.max.clone());
            block.set_opt("min", axis.min.clone());
            block.set_opt("scale", axis.scale.clone());
            block
        }),
    );
    map.set_block_opt(
        "yaxis",
        def.yaxis.as_ref().map(|axis| {
            let mut block = DeclMap::new();
            block.set_opt("include_zero", axis.include_zero);
            block.set_opt("label", axis.label.clone());
            block.set_opt("max", axis.max.clone());
            block.set_opt("min", axis.min.clone());
            block.set_opt("scale", axis.scale.clone());
            block
        }),
    );
    map
}

pub(crate) fn decompose_log_stream(def: &LogStreamWidgetDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_strings("columns", def.columns.as_deref());
    map.set_strings("indexes", def.indexes.as_deref());
    map.set_enum_opt("message_display", def.message_display);
    map.set_opt("query", def.query.clone());
    map.set_opt("show_date_column", def.show_date_column);
    map.set_opt("show_message_column", def.show_message_column);
    map.set_block_opt(
        "sort",
        def.sort.as_ref().map(|sort| {
            let mut block = DeclMap::new();
            block.set("column", sort.column.clone());
            block.set_enum("order", sort.order);
            block
        }),
    );
    map.set_block_opt("time", def.time.as_ref().map(decompose_time));
    decompose_title(&mut map, &def.title, def.title_align, &def.title_size);
    map
}
