//! Widget requests.
//!
//! Every request kind shares the legacy query sources and the formula and
//! function fields; the kind-specific extras are built on top.

use std::collections::HashSet;

use notebook_client::models::{
    DistributionWidgetRequest, FormulaAndFunctionFields, FormulaAndFunctionResponseFormat,
    HeatMapWidgetRequest, TimeseriesWidgetExpressionAlias, TimeseriesWidgetRequest,
    ToplistWidgetRequest, WidgetConditionalFormat, WidgetQuerySources, WidgetRequestStyle,
    WidgetStyle,
};

use super::formula::{build_formula, build_query};
use super::{optional_block, optional_list};
use super::query::{build_event_query, build_log_query, build_process_query};
use crate::cursor::PathCursor;
use crate::error::{ResourceError, Result};
use crate::extract;

fn build_sources(c: &mut PathCursor<'_>) -> Result<WidgetQuerySources> {
    Ok(WidgetQuerySources {
        q: extract::optional(c, "q")?,
        apm_query: optional_block(c, "apm_query", build_log_query)?,
        log_query: optional_block(c, "log_query", build_log_query)?,
        network_query: optional_block(c, "network_query", build_log_query)?,
        process_query: optional_block(c, "process_query", build_process_query)?,
        profile_metrics_query: optional_block(c, "profile_metrics_query", build_log_query)?,
        rum_query: optional_block(c, "rum_query", build_log_query)?,
        security_query: optional_block(c, "security_query", build_log_query)?,
    })
}

fn build_formula_fields(
    c: &mut PathCursor<'_>,
    default_format: Option<FormulaAndFunctionResponseFormat>,
) -> Result<FormulaAndFunctionFields> {
    let queries = optional_list(c, "query", build_query)?;
    let formulas = optional_list(c, "formula", build_formula)?;
    let response_format = match extract::optional_enum(c, "response_format")? {
        Some(format) => Some(format),
        None if queries.is_some() => default_format,
        None => None,
    };
    Ok(FormulaAndFunctionFields {
        queries,
        formulas,
        response_format,
    })
}

/// Enforce one query source per request and unique formula query names.
fn check_request(
    c: &PathCursor<'_>,
    sources: &WidgetQuerySources,
    has_event_query: bool,
    fields: &FormulaAndFunctionFields,
) -> Result<()> {
    let mut found = sources.populated();
    if has_event_query {
        found.push("event_query");
    }

    if found.len() > 1 {
        return Err(ResourceError::MultipleDefinitions {
            one_of: c.path(),
            found: found.into_iter().map(str::to_string).collect(),
        });
    }

    let Some(queries) = &fields.queries else {
        if found.is_empty() {
            return Err(ResourceError::MissingDefinition { one_of: c.path() });
        }
        return Ok(());
    };

    let mut names = HashSet::new();
    for query in queries {
        if !names.insert(query.name()) {
            return Err(ResourceError::DuplicateQueryName {
                path: c.path_with("query"),
                name: query.name().to_string(),
            });
        }
    }
    Ok(())
}

fn build_request_style(c: &mut PathCursor<'_>) -> Result<WidgetRequestStyle> {
    Ok(WidgetRequestStyle {
        line_type: extract::optional_enum(c, "line_type")?,
        line_width: extract::optional_enum(c, "line_width")?,
        palette: extract::optional(c, "palette")?,
    })
}

fn build_style(c: &mut PathCursor<'_>) -> Result<WidgetStyle> {
    Ok(WidgetStyle {
        palette: extract::optional(c, "palette")?,
    })
}

pub(crate) fn build_timeseries_request(c: &mut PathCursor<'_>) -> Result<TimeseriesWidgetRequest> {
    let sources = build_sources(c)?;
    let formula_and_function =
        build_formula_fields(c, Some(FormulaAndFunctionResponseFormat::Timeseries))?;
    check_request(c, &sources, false, &formula_and_function)?;

    Ok(TimeseriesWidgetRequest {
        sources,
        formula_and_function,
        display_type: extract::optional_enum(c, "display_type")?,
        metadata: optional_list(c, "metadata", |c| {
            Ok(TimeseriesWidgetExpressionAlias {
                expression: extract::required(c, "expression")?,
                alias_name: extract::optional(c, "alias_name")?,
            })
        })?,
        on_right_yaxis: extract::optional(c, "on_right_yaxis")?,
        style: optional_block(c, "style", build_request_style)?,
    })
}

pub(crate) fn build_toplist_request(c: &mut PathCursor<'_>) -> Result<ToplistWidgetRequest> {
    let sources = build_sources(c)?;
    let formula_and_function =
        build_formula_fields(c, Some(FormulaAndFunctionResponseFormat::Scalar))?;
    check_request(c, &sources, false, &formula_and_function)?;

    Ok(ToplistWidgetRequest {
        sources,
        formula_and_function,
        conditional_formats: optional_list(c, "conditional_format", build_conditional_format)?,
        style: optional_block(c, "style", build_request_style)?,
    })
}

fn build_conditional_format(c: &mut PathCursor<'_>) -> Result<WidgetConditionalFormat> {
    Ok(WidgetConditionalFormat {
        comparator: extract::required_enum(c, "comparator")?,
        palette: extract::required_enum(c, "palette")?,
        value: extract::required(c, "value")?,
        custom_bg_color: extract::optional(c, "custom_bg_color")?,
        custom_fg_color: extract::optional(c, "custom_fg_color")?,
        hide_value: extract::optional(c, "hide_value")?,
        image_url: extract::optional(c, "image_url")?,
        metric: extract::optional(c, "metric")?,
        timeframe: extract::optional(c, "timeframe")?,
    })
}

pub(crate) fn build_heatmap_request(c: &mut PathCursor<'_>) -> Result<HeatMapWidgetRequest> {
    let sources = build_sources(c)?;
    let event_query = optional_block(c, "event_query", build_event_query)?;
    let formula_and_function =
        build_formula_fields(c, Some(FormulaAndFunctionResponseFormat::Timeseries))?;
    check_request(c, &sources, event_query.is_some(), &formula_and_function)?;

    Ok(HeatMapWidgetRequest {
        sources,
        formula_and_function,
        event_query,
        style: optional_block(c, "style", build_style)?,
    })
}

pub(crate) fn build_distribution_request(
    c: &mut PathCursor<'_>,
) -> Result<DistributionWidgetRequest> {
    let sources = build_sources(c)?;
    let formula_and_function = build_formula_fields(c, None)?;
    check_request(c, &sources, false, &formula_and_function)?;

    Ok(DistributionWidgetRequest {
        sources,
        formula_and_function,
        style: optional_block(c, "style", build_style)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_client::models::{WidgetComparator, WidgetPalette};
    use serde_json::json;

    fn metric_query(name: &str) -> serde_json::Value {
        json!({"formula_and_function_metric_query_definition": [{
            "data_source": "metrics",
            "name": name,
            "query": "avg:system.cpu.user{*}"
        }]})
    }

    #[test]
    fn test_formula_request_defaults_response_format() {
        let root = json!({"query": [metric_query("q1")], "formula": [{"formula": "q1*100"}]});
        let mut c = PathCursor::new(&root);
        let request = build_timeseries_request(&mut c).unwrap();
        assert_eq!(
            request.formula_and_function.response_format,
            Some(FormulaAndFunctionResponseFormat::Timeseries)
        );

        let mut c = PathCursor::new(&root);
        let request = build_toplist_request(&mut c).unwrap();
        assert_eq!(
            request.formula_and_function.response_format,
            Some(FormulaAndFunctionResponseFormat::Scalar)
        );
    }

    #[test]
    fn test_legacy_request_has_no_response_format() {
        let root = json!({"q": "avg:system.load.1{*}"});
        let mut c = PathCursor::new(&root);
        let request = build_timeseries_request(&mut c).unwrap();
        assert_eq!(request.sources.q.as_deref(), Some("avg:system.load.1{*}"));
        assert_eq!(request.formula_and_function.response_format, None);
    }

    #[test]
    fn test_two_sources_rejected() {
        let root = json!({
            "q": "avg:system.load.1{*}",
            "log_query": [{"index": "main", "compute": [{"aggregation": "count"}]}]
        });
        let mut c = PathCursor::new(&root);
        let err = build_timeseries_request(&mut c).unwrap_err();
        assert!(matches!(
            err,
            ResourceError::MultipleDefinitions { ref found, .. } if found == &vec!["q", "log_query"]
        ));
    }

    #[test]
    fn test_heatmap_event_query_counts_as_source() {
        let root = json!({"q": "avg:system.load.1{*}", "event_query": [{"search": "deploy"}]});
        let mut c = PathCursor::new(&root);
        assert!(matches!(
            build_heatmap_request(&mut c),
            Err(ResourceError::MultipleDefinitions { .. })
        ));

        let root = json!({"event_query": [{"search": "deploy", "tags_execution": "and"}]});
        let mut c = PathCursor::new(&root);
        let request = build_heatmap_request(&mut c).unwrap();
        assert_eq!(request.event_query.unwrap().search, "deploy");
    }

    #[test]
    fn test_empty_request_rejected() {
        let root = json!({"display_type": "line"});
        let mut c = PathCursor::new(&root);
        assert!(matches!(
            build_timeseries_request(&mut c),
            Err(ResourceError::MissingDefinition { .. })
        ));
    }

    #[test]
    fn test_duplicate_query_names_rejected() {
        let root = json!({"query": [metric_query("q1"), metric_query("q1")]});
        let mut c = PathCursor::new(&root);
        let err = build_timeseries_request(&mut c).unwrap_err();
        assert!(matches!(
            err,
            ResourceError::DuplicateQueryName { ref name, .. } if name == "q1"
        ));
    }

    #[test]
    fn test_conditional_format_order_and_values() {
        let root = json!({
            "q": "top(avg:system.cpu.user{*} by {host}, 10, 'mean', 'desc')",
            "conditional_format": [
                {"comparator": ">", "value": 0.9, "palette": "red_on_white"},
                {"comparator": "<=", "value": 0, "palette": "white_on_green", "hide_value": false}
            ]
        });
        let mut c = PathCursor::new(&root);
        let formats = build_toplist_request(&mut c).unwrap().conditional_formats.unwrap();
        assert_eq!(formats.len(), 2);
        assert_eq!(formats[0].comparator, WidgetComparator::GreaterThan);
        assert_eq!(formats[0].value, 0.9);
        assert_eq!(formats[0].palette, WidgetPalette::RedOnWhite);
        assert_eq!(formats[1].value, 0.0);
        assert_eq!(formats[1].hide_value, None);
    }
}
