//! Formula and function queries.

use serde::{Deserialize, Serialize};

use super::enums::{
    FormulaAndFunctionEventAggregation, FormulaAndFunctionEventsDataSource,
    FormulaAndFunctionMetricAggregation, FormulaAndFunctionMetricDataSource,
    FormulaAndFunctionProcessQueryDataSource, QuerySortOrder,
};

/// Named query referenced by formulas. The variant follows `data_source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormulaAndFunctionQueryDefinition {
    Metric(FormulaAndFunctionMetricQueryDefinition),
    Event(FormulaAndFunctionEventQueryDefinition),
    Process(FormulaAndFunctionProcessQueryDefinition),
}

impl FormulaAndFunctionQueryDefinition {
    /// Variable name formulas use to reference this query.
    pub fn name(&self) -> &str {
        match self {
            Self::Metric(query) => &query.name,
            Self::Event(query) => &query.name,
            Self::Process(query) => &query.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaAndFunctionMetricQueryDefinition {
    pub data_source: FormulaAndFunctionMetricDataSource,
    pub name: String,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<FormulaAndFunctionMetricAggregation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaAndFunctionEventQueryDefinition {
    pub compute: FormulaAndFunctionEventQueryDefinitionCompute,
    pub data_source: FormulaAndFunctionEventsDataSource,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<FormulaAndFunctionEventQueryGroupBy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<FormulaAndFunctionEventQueryDefinitionSearch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaAndFunctionEventQueryDefinitionCompute {
    pub aggregation: FormulaAndFunctionEventAggregation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaAndFunctionEventQueryDefinitionSearch {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaAndFunctionEventQueryGroupBy {
    pub facet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<FormulaAndFunctionEventQueryGroupBySort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaAndFunctionEventQueryGroupBySort {
    pub aggregation: FormulaAndFunctionEventAggregation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<QuerySortOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaAndFunctionProcessQueryDefinition {
    pub data_source: FormulaAndFunctionProcessQueryDataSource,
    pub metric: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<FormulaAndFunctionMetricAggregation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_normalized_cpu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<QuerySortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_filter: Option<String>,
}

/// Formula evaluated over named queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetFormula {
    /// Expression, e.g. `q1 * 100`.
    pub formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<WidgetFormulaLimit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetFormulaLimit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<QuerySortOrder>,
}
