//! Legacy per-signal query sources.

use serde::{Deserialize, Serialize};

use super::enums::WidgetSort;

/// Query source shared by APM, log, network, profile-metrics, RUM and
/// security requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQueryDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute: Option<LogsQueryCompute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<LogQueryDefinitionGroupBy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Mutually exclusive with `compute`; enforced by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_compute: Option<Vec<LogsQueryCompute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<LogQueryDefinitionSearch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsQueryCompute {
    pub aggregation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQueryDefinitionGroupBy {
    pub facet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<LogQueryDefinitionGroupBySort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQueryDefinitionGroupBySort {
    pub aggregation: String,
    pub order: WidgetSort,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQueryDefinitionSearch {
    pub query: String,
}

/// Process query source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessQueryDefinition {
    pub metric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_by: Option<String>,
}

/// Simplified event query of heat map requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueryDefinition {
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_execution: Option<String>,
}
