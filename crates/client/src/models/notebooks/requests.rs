//! Widget requests.
//!
//! Every request kind shares the legacy query sources and the formula and
//! function fields; both groups are flattened into the request object.

use serde::{Deserialize, Serialize};

use super::enums::{
    FormulaAndFunctionResponseFormat, WidgetComparator, WidgetDisplayType, WidgetLineType,
    WidgetLineWidth, WidgetPalette,
};
use super::formulas::{FormulaAndFunctionQueryDefinition, WidgetFormula};
use super::queries::{EventQueryDefinition, LogQueryDefinition, ProcessQueryDefinition};

/// Legacy query sources. The API accepts at most one per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetQuerySources {
    /// Raw metric query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_query: Option<LogQueryDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_query: Option<LogQueryDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_query: Option<LogQueryDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_query: Option<ProcessQueryDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_metrics_query: Option<LogQueryDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_query: Option<LogQueryDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_query: Option<LogQueryDefinition>,
}

impl WidgetQuerySources {
    /// Names of the populated sources, in declaration order.
    pub fn populated(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.q.is_some() {
            names.push("q");
        }
        let log_like = [
            ("apm_query", &self.apm_query),
            ("log_query", &self.log_query),
            ("network_query", &self.network_query),
        ];
        for (name, source) in log_like {
            if source.is_some() {
                names.push(name);
            }
        }
        if self.process_query.is_some() {
            names.push("process_query");
        }
        let rest = [
            ("profile_metrics_query", &self.profile_metrics_query),
            ("rum_query", &self.rum_query),
            ("security_query", &self.security_query),
        ];
        for (name, source) in rest {
            if source.is_some() {
                names.push(name);
            }
        }
        names
    }
}

/// Formula and function fields of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaAndFunctionFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<FormulaAndFunctionQueryDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formulas: Option<Vec<WidgetFormula>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<FormulaAndFunctionResponseFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesWidgetRequest {
    #[serde(flatten)]
    pub sources: WidgetQuerySources,
    #[serde(flatten)]
    pub formula_and_function: FormulaAndFunctionFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<WidgetDisplayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<TimeseriesWidgetExpressionAlias>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_right_yaxis: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<WidgetRequestStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToplistWidgetRequest {
    #[serde(flatten)]
    pub sources: WidgetQuerySources,
    #[serde(flatten)]
    pub formula_and_function: FormulaAndFunctionFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_formats: Option<Vec<WidgetConditionalFormat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<WidgetRequestStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatMapWidgetRequest {
    #[serde(flatten)]
    pub sources: WidgetQuerySources,
    #[serde(flatten)]
    pub formula_and_function: FormulaAndFunctionFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_query: Option<EventQueryDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<WidgetStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionWidgetRequest {
    #[serde(flatten)]
    pub sources: WidgetQuerySources,
    #[serde(flatten)]
    pub formula_and_function: FormulaAndFunctionFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<WidgetStyle>,
}

/// Line style of timeseries and toplist requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetRequestStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<WidgetLineType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<WidgetLineWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

/// Palette-only style of heat map and distribution requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

/// Legacy alias for a metric expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeseriesWidgetExpressionAlias {
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_name: Option<String>,
}

/// Rule that colors a toplist value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConditionalFormat {
    pub comparator: WidgetComparator,
    pub palette: WidgetPalette,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}
