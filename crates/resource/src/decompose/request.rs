//! Requests, legacy query sources and formula queries.

use notebook_client::models::{
    DistributionWidgetRequest, EventQueryDefinition, FormulaAndFunctionEventQueryDefinition,
    FormulaAndFunctionFields, FormulaAndFunctionMetricQueryDefinition,
    FormulaAndFunctionProcessQueryDefinition, FormulaAndFunctionQueryDefinition,
    HeatMapWidgetRequest, LogQueryDefinition, LogsQueryCompute, ProcessQueryDefinition,
    TimeseriesWidgetRequest, ToplistWidgetRequest, WidgetConditionalFormat, WidgetFormula,
    WidgetQuerySources, WidgetRequestStyle, WidgetStyle,
};

use super::{DeclMap, variant};
use crate::build::formula::{EVENT, METRIC, PROCESS};

fn decompose_compute(compute: &LogsQueryCompute) -> DeclMap {
    let mut map = DeclMap::new();
    map.set("aggregation", compute.aggregation.clone());
    map.set_opt("facet", compute.facet.clone());
    map.set_opt("interval", compute.interval);
    map
}

fn decompose_log_query(query: &LogQueryDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_block_opt("compute", query.compute.as_ref().map(decompose_compute));
    map.set_list_opt(
        "group_by",
        query.group_by.as_ref().map(|group_by| {
            group_by
                .iter()
                .map(|group| {
                    let mut item = DeclMap::new();
                    item.set("facet", group.facet.clone());
                    item.set_opt("limit", group.limit);
                    item.set_block_opt(
                        "sort",
                        group.sort.as_ref().map(|sort| {
                            let mut block = DeclMap::new();
                            block.set("aggregation", sort.aggregation.clone());
                            block.set_enum("order", sort.order);
                            block.set_opt("facet", sort.facet.clone());
                            block
                        }),
                    );
                    item
                })
                .collect()
        }),
    );
    map.set_opt("index", query.index.clone());
    map.set_list_opt(
        "multi_compute",
        query
            .multi_compute
            .as_ref()
            .map(|computes| computes.iter().map(decompose_compute).collect()),
    );
    map.set_block_opt(
        "search",
        query.search.as_ref().map(|search| {
            let mut block = DeclMap::new();
            block.set("query", search.query.clone());
            block
        }),
    );
    map
}

fn decompose_process_query(query: &ProcessQueryDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set("metric", query.metric.clone());
    map.set_strings("filter_by", query.filter_by.as_deref());
    map.set_opt("limit", query.limit);
    map.set_opt("search_by", query.search_by.clone());
    map
}

fn decompose_event_query(query: &EventQueryDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set("search", query.search.clone());
    map.set_opt("tags_execution", query.tags_execution.clone());
    map
}

fn decompose_sources(map: &mut DeclMap, sources: &WidgetQuerySources) {
    map.set_opt("q", sources.q.clone());
    let log_like = [
        ("apm_query", &sources.apm_query),
        ("log_query", &sources.log_query),
        ("network_query", &sources.network_query),
        ("profile_metrics_query", &sources.profile_metrics_query),
        ("rum_query", &sources.rum_query),
        ("security_query", &sources.security_query),
    ];
    for (key, query) in log_like {
        map.set_block_opt(key, query.as_ref().map(decompose_log_query));
    }
    map.set_block_opt(
        "process_query",
        sources.process_query.as_ref().map(decompose_process_query),
    );
}

fn decompose_metric_query(query: &FormulaAndFunctionMetricQueryDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_enum("data_source", query.data_source);
    map.set("name", query.name.clone());
    map.set("query", query.query.clone());
    map.set_enum_opt("aggregator", query.aggregator);
    map
}

fn decompose_event_formula_query(query: &FormulaAndFunctionEventQueryDefinition) -> DeclMap {
    let mut compute = DeclMap::new();
    compute.set_enum("aggregation", query.compute.aggregation);
    compute.set_opt("interval", query.compute.interval);
    compute.set_opt("metric", query.compute.metric.clone());

    let mut map = DeclMap::new();
    map.set_block("compute", compute);
    map.set_enum("data_source", query.data_source);
    map.set("name", query.name.clone());
    map.set_list_opt(
        "group_by",
        query.group_by.as_ref().map(|group_by| {
            group_by
                .iter()
                .map(|group| {
                    let mut item = DeclMap::new();
                    item.set("facet", group.facet.clone());
                    item.set_opt("limit", group.limit);
                    item.set_block_opt(
                        "sort",
                        group.sort.as_ref().map(|sort| {
                            let mut block = DeclMap::new();
                            block.set_enum("aggregation", sort.aggregation);
                            block.set_opt("metric", sort.metric.clone());
                            block.set_enum_opt("order", sort.order);
                            block
                        }),
                    );
                    item
                })
                .collect()
        }),
    );
    map.set_strings("indexes", query.indexes.as_deref());
    map.set_block_opt(
        "search",
        query.search.as_ref().map(|search| {
            let mut block = DeclMap::new();
            block.set("query", search.query.clone());
            block
        }),
    );
    map.set_opt("storage", query.storage.clone());
    map
}

fn decompose_process_formula_query(query: &FormulaAndFunctionProcessQueryDefinition) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_enum("data_source", query.data_source);
    map.set("metric", query.metric.clone());
    map.set("name", query.name.clone());
    map.set_enum_opt("aggregator", query.aggregator);
    map.set_opt("is_normalized_cpu", query.is_normalized_cpu);
    map.set_opt("limit", query.limit);
    map.set_enum_opt("sort", query.sort);
    map.set_strings("tag_filters", query.tag_filters.as_deref());
    map.set_opt("text_filter", query.text_filter.clone());
    map
}

fn decompose_query(query: &FormulaAndFunctionQueryDefinition) -> DeclMap {
    match query {
        FormulaAndFunctionQueryDefinition::Metric(query) => {
            variant(METRIC, decompose_metric_query(query))
        }
        FormulaAndFunctionQueryDefinition::Event(query) => {
            variant(EVENT, decompose_event_formula_query(query))
        }
        FormulaAndFunctionQueryDefinition::Process(query) => {
            variant(PROCESS, decompose_process_formula_query(query))
        }
    }
}

fn decompose_formula(formula: &WidgetFormula) -> DeclMap {
    let mut map = DeclMap::new();
    map.set("formula", formula.formula.clone());
    map.set_opt("alias", formula.alias.clone());
    map.set_block_opt(
        "limit",
        formula.limit.as_ref().map(|limit| {
            let mut block = DeclMap::new();
            block.set_opt("count", limit.count);
            block.set_enum_opt("order", limit.order);
            block
        }),
    );
    map
}

fn decompose_formula_fields(map: &mut DeclMap, fields: &FormulaAndFunctionFields) {
    map.set_list_opt(
        "query",
        fields
            .queries
            .as_ref()
            .map(|queries| queries.iter().map(decompose_query).collect()),
    );
    map.set_list_opt(
        "formula",
        fields
            .formulas
            .as_ref()
            .map(|formulas| formulas.iter().map(decompose_formula).collect()),
    );
    map.set_enum_opt("response_format", fields.response_format);
}

fn decompose_request_style(style: &WidgetRequestStyle) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_enum_opt("line_type", style.line_type);
    map.set_enum_opt("line_width", style.line_width);
    map.set_opt("palette", style.palette.clone());
    map
}

fn decompose_style(style: &WidgetStyle) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_opt("palette", style.palette.clone());
    map
}

fn decompose_conditional_format(format: &WidgetConditionalFormat) -> DeclMap {
    let mut map = DeclMap::new();
    map.set_enum("comparator", format.comparator);
    map.set_enum("palette", format.palette);
    map.set("value", format.value);
    map.set_opt("custom_bg_color", format.custom_bg_color.clone());
    map.set_opt("custom_fg_color", format.custom_fg_color.clone());
    map.set_opt("hide_value", format.hide_value);
    map.set_opt("image_url", format.image_url.clone());
    map.set_opt("metric", format.metric.clone());
    map.set_opt("timeframe", format.timeframe.clone());
    map
}

pub(crate) fn decompose_timeseries_request(request: &TimeseriesWidgetRequest) -> DeclMap {
    let mut map = DeclMap::new();
    decompose_sources(&mut map, &request.sources);
    decompose_formula_fields(&mut map, &request.formula_and_function);
    map.set_enum_opt("display_type", request.display_type);
    map.set_list_opt(
        "metadata",
        request.metadata.as_ref().map(|aliases| {
            aliases
                .iter()
                .map(|alias| {
                    let mut item = DeclMap::new();
                    item.set("expression", alias.expression.clone());
                    item.set_opt("alias_name", alias.alias_name.clone());
                    item
                })
                .collect()
        }),
    );
    map.set_opt("on_right_yaxis", request.on_right_yaxis);
    map.set_block_opt("style", request.style.as_ref().map(decompose_request_style));
    map
}

pub(crate) fn decompose_toplist_request(request: &ToplistWidgetRequest) -> DeclMap {
    let mut map = DeclMap::new();
    decompose_sources(&mut map, &request.sources);
    decompose_formula_fields(&mut map, &request.formula_and_function);
    map.set_list_opt(
        "conditional_format",
        request
            .conditional_formats
            .as_ref()
            .map(|formats| formats.iter().map(decompose_conditional_format).collect()),
    );
    map.set_block_opt("style", request.style.as_ref().map(decompose_request_style));
    map
}

pub(crate) fn decompose_heatmap_request(request: &HeatMapWidgetRequest) -> DeclMap {
    let mut map = DeclMap::new();
    decompose_sources(&mut map, &request.sources);
    decompose_formula_fields(&mut map, &request.formula_and_function);
    map.set_block_opt(
        "event_query",
        request.event_query.as_ref().map(decompose_event_query),
    );
    map.set_block_opt("style", request.style.as_ref().map(decompose_style));
    map
}

pub(crate) fn decompose_distribution_request(request: &DistributionWidgetRequest) -> DeclMap {
    let mut map = DeclMap::new();
    decompose_sources(&mut map, &request.sources);
    decompose_formula_fields(&mut map, &request.formula_and_function);
    map.set_block_opt("style", request.style.as_ref().map(decompose_style));
    map
}
