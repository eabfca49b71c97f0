//! Formula and function queries.

use notebook_client::models::{
    FormulaAndFunctionEventQueryDefinition, FormulaAndFunctionEventQueryDefinitionCompute,
    FormulaAndFunctionEventQueryDefinitionSearch, FormulaAndFunctionEventQueryGroupBy,
    FormulaAndFunctionEventQueryGroupBySort, FormulaAndFunctionMetricQueryDefinition,
    FormulaAndFunctionProcessQueryDefinition, FormulaAndFunctionQueryDefinition, WidgetFormula,
    WidgetFormulaLimit,
};

use super::{optional_block, optional_list, required_block, select_variant};
use crate::cursor::PathCursor;
use crate::error::Result;
use crate::extract;

pub(crate) const METRIC: &str = "formula_and_function_metric_query_definition";
pub(crate) const EVENT: &str = "formula_and_function_event_query_definition";
pub(crate) const PROCESS: &str = "formula_and_function_process_query_definition";

#[derive(Clone, Copy)]
enum Kind {
    Metric,
    Event,
    Process,
}

const VARIANTS: [(Kind, &str); 3] = [
    (Kind::Metric, METRIC),
    (Kind::Event, EVENT),
    (Kind::Process, PROCESS),
];

/// Build one `query[]` element.
pub(crate) fn build_query(c: &mut PathCursor<'_>) -> Result<FormulaAndFunctionQueryDefinition> {
    let (kind, name) = select_variant(c, "formula_and_function_query_definition", &VARIANTS)?;
    c.within(&format!("{name}.0"), |c| match kind {
        Kind::Metric => build_metric_query(c).map(FormulaAndFunctionQueryDefinition::Metric),
        Kind::Event => build_event_query(c).map(FormulaAndFunctionQueryDefinition::Event),
        Kind::Process => build_process_query(c).map(FormulaAndFunctionQueryDefinition::Process),
    })
}

fn build_metric_query(c: &mut PathCursor<'_>) -> Result<FormulaAndFunctionMetricQueryDefinition> {
    Ok(FormulaAndFunctionMetricQueryDefinition {
        data_source: extract::required_enum(c, "data_source")?,
        name: extract::required(c, "name")?,
        query: extract::required(c, "query")?,
        aggregator: extract::optional_enum(c, "aggregator")?,
    })
}

fn build_event_query(c: &mut PathCursor<'_>) -> Result<FormulaAndFunctionEventQueryDefinition> {
    Ok(FormulaAndFunctionEventQueryDefinition {
        compute: required_block(c, "compute", |c| {
            Ok(FormulaAndFunctionEventQueryDefinitionCompute {
                aggregation: extract::required_enum(c, "aggregation")?,
                interval: extract::optional(c, "interval")?,
                metric: extract::optional(c, "metric")?,
            })
        })?,
        data_source: extract::required_enum(c, "data_source")?,
        name: extract::required(c, "name")?,
        group_by: optional_list(c, "group_by", build_event_group_by)?,
        indexes: extract::optional_list(c, "indexes")?,
        search: optional_block(c, "search", |c| {
            Ok(FormulaAndFunctionEventQueryDefinitionSearch {
                query: extract::required(c, "query")?,
            })
        })?,
        storage: extract::optional(c, "storage")?,
    })
}

fn build_event_group_by(c: &mut PathCursor<'_>) -> Result<FormulaAndFunctionEventQueryGroupBy> {
    Ok(FormulaAndFunctionEventQueryGroupBy {
        facet: extract::required(c, "facet")?,
        limit: extract::optional(c, "limit")?,
        sort: optional_block(c, "sort", |c| {
            Ok(FormulaAndFunctionEventQueryGroupBySort {
                aggregation: extract::required_enum(c, "aggregation")?,
                metric: extract::optional(c, "metric")?,
                order: extract::optional_enum(c, "order")?,
            })
        })?,
    })
}

fn build_process_query(
    c: &mut PathCursor<'_>,
) -> Result<FormulaAndFunctionProcessQueryDefinition> {
    Ok(FormulaAndFunctionProcessQueryDefinition {
        data_source: extract::required_enum(c, "data_source")?,
        metric: extract::required(c, "metric")?,
        name: extract::required(c, "name")?,
        aggregator: extract::optional_enum(c, "aggregator")?,
        is_normalized_cpu: extract::optional(c, "is_normalized_cpu")?,
        limit: extract::optional(c, "limit")?,
        sort: extract::optional_enum(c, "sort")?,
        tag_filters: extract::optional_list(c, "tag_filters")?,
        text_filter: extract::optional(c, "text_filter")?,
    })
}

/// Build one `formula[]` element.
pub(crate) fn build_formula(c: &mut PathCursor<'_>) -> Result<WidgetFormula> {
    Ok(WidgetFormula {
        formula: extract::required(c, "formula")?,
        alias: extract::optional(c, "alias")?,
        limit: optional_block(c, "limit", |c| {
            Ok(WidgetFormulaLimit {
                count: extract::optional(c, "count")?,
                order: extract::optional_enum(c, "order")?,
            })
        })?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceError;
    use notebook_client::models::{
        FormulaAndFunctionEventAggregation, FormulaAndFunctionEventsDataSource,
        FormulaAndFunctionMetricDataSource, QuerySortOrder,
    };
    use serde_json::json;

    #[test]
    fn test_metric_query() {
        let root = json!({METRIC: [{
            "data_source": "metrics",
            "name": "q1",
            "query": "avg:system.cpu.user{*}"
        }]});
        let mut c = PathCursor::new(&root);
        let FormulaAndFunctionQueryDefinition::Metric(query) = build_query(&mut c).unwrap() else {
            panic!("expected metric query");
        };
        assert_eq!(query.data_source, FormulaAndFunctionMetricDataSource::Metrics);
        assert_eq!(query.name, "q1");
        assert_eq!(query.aggregator, None);
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn test_event_query_requires_compute() {
        let root = json!({EVENT: [{"data_source": "logs", "name": "q1"}]});
        let mut c = PathCursor::new(&root);
        let err = build_query(&mut c).unwrap_err();
        assert!(matches!(
            err,
            ResourceError::MissingField { ref path } if *path == format!("{EVENT}.0.compute")
        ));
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn test_event_query_with_group_by() {
        let root = json!({EVENT: [{
            "data_source": "logs",
            "name": "errors",
            "compute": [{"aggregation": "count"}],
            "indexes": ["main"],
            "search": [{"query": "status:error"}],
            "group_by": [{"facet": "service", "limit": 5, "sort": [{"aggregation": "count", "order": "desc"}]}]
        }]});
        let mut c = PathCursor::new(&root);
        let FormulaAndFunctionQueryDefinition::Event(query) = build_query(&mut c).unwrap() else {
            panic!("expected event query");
        };
        assert_eq!(query.data_source, FormulaAndFunctionEventsDataSource::Logs);
        assert_eq!(query.compute.aggregation, FormulaAndFunctionEventAggregation::Count);
        assert_eq!(query.indexes.unwrap(), vec!["main"]);
        let group_by = query.group_by.unwrap();
        assert_eq!(group_by[0].sort.as_ref().unwrap().order, Some(QuerySortOrder::Desc));
    }

    #[test]
    fn test_two_query_variants_rejected() {
        let root = json!({
            METRIC: [{"data_source": "metrics", "name": "q1", "query": "q"}],
            PROCESS: [{"data_source": "process", "name": "q1", "metric": "m"}]
        });
        let mut c = PathCursor::new(&root);
        assert!(matches!(
            build_query(&mut c),
            Err(ResourceError::MultipleDefinitions { .. })
        ));
    }

    #[test]
    fn test_formula_with_limit() {
        let root = json!({"formula": "q1*100", "alias": "cpu_pct", "limit": [{"count": 10, "order": "asc"}]});
        let mut c = PathCursor::new(&root);
        let formula = build_formula(&mut c).unwrap();
        assert_eq!(formula.formula, "q1*100");
        assert_eq!(formula.alias.as_deref(), Some("cpu_pct"));
        assert_eq!(
            formula.limit,
            Some(WidgetFormulaLimit {
                count: Some(10),
                order: Some(QuerySortOrder::Asc)
            })
        );
    }
}
