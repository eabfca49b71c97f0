//! Legacy per-signal query sources.
//!
//! APM, log, network, profile-metrics, RUM and security sources share one
//! shape and one builder; the process source and the heatmap event query
//! are flatter.

use notebook_client::models::{
    EventQueryDefinition, LogQueryDefinition, LogQueryDefinitionGroupBy,
    LogQueryDefinitionGroupBySort, LogQueryDefinitionSearch, LogsQueryCompute,
    ProcessQueryDefinition,
};

use super::{optional_block, optional_list};
use crate::cursor::PathCursor;
use crate::error::Result;
use crate::extract;

/// Build a log-shaped query source; the cursor sits on `<source>_query.0`.
///
/// `compute` and `multi_compute` are both transmitted when both are set;
/// the API rejects the combination.
pub(crate) fn build_log_query(c: &mut PathCursor<'_>) -> Result<LogQueryDefinition> {
    Ok(LogQueryDefinition {
        compute: optional_block(c, "compute", build_compute)?,
        group_by: optional_list(c, "group_by", build_group_by)?,
        index: extract::optional(c, "index")?,
        multi_compute: optional_list(c, "multi_compute", build_compute)?,
        search: optional_block(c, "search", |c| {
            Ok(LogQueryDefinitionSearch {
                query: extract::required(c, "query")?,
            })
        })?,
    })
}

fn build_compute(c: &mut PathCursor<'_>) -> Result<LogsQueryCompute> {
    Ok(LogsQueryCompute {
        aggregation: extract::required(c, "aggregation")?,
        facet: extract::optional(c, "facet")?,
        interval: extract::optional(c, "interval")?,
    })
}

fn build_group_by(c: &mut PathCursor<'_>) -> Result<LogQueryDefinitionGroupBy> {
    Ok(LogQueryDefinitionGroupBy {
        facet: extract::required(c, "facet")?,
        limit: extract::optional(c, "limit")?,
        sort: optional_block(c, "sort", |c| {
            Ok(LogQueryDefinitionGroupBySort {
                aggregation: extract::required(c, "aggregation")?,
                order: extract::required_enum(c, "order")?,
                facet: extract::optional(c, "facet")?,
            })
        })?,
    })
}

pub(crate) fn build_process_query(c: &mut PathCursor<'_>) -> Result<ProcessQueryDefinition> {
    Ok(ProcessQueryDefinition {
        metric: extract::required(c, "metric")?,
        filter_by: extract::optional_list(c, "filter_by")?,
        limit: extract::optional(c, "limit")?,
        search_by: extract::optional(c, "search_by")?,
    })
}

pub(crate) fn build_event_query(c: &mut PathCursor<'_>) -> Result<EventQueryDefinition> {
    Ok(EventQueryDefinition {
        search: extract::required(c, "search")?,
        tags_execution: extract::optional(c, "tags_execution")?,
    })
}
