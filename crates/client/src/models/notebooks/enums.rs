//! Closed enumerations of the notebooks API.
//!
//! Every enumeration is declared through `wire_enum!`, which derives serde
//! with the exact wire spelling and implements [`WireEnum`] so callers can
//! convert from and to the wire string without going through serde.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of string values accepted by the API.
pub trait WireEnum: Sized + Copy + 'static {
    /// Human readable name of the enumeration, used in error messages.
    const KIND: &'static str;

    /// All accepted values, in declaration order.
    fn variants() -> &'static [Self];

    /// Wire spelling of this value.
    fn as_str(&self) -> &'static str;

    /// Parse a wire spelling.
    fn from_wire(value: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }

    /// Comma separated list of accepted values.
    fn expected() -> String {
        Self::variants()
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:literal {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl WireEnum for $name {
            const KIND: &'static str = $kind;

            fn variants() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Publication status of a notebook.
    NotebookStatus => "notebook status" {
        Published => "published",
    }
}

impl Default for NotebookStatus {
    fn default() -> Self {
        Self::Published
    }
}

wire_enum! {
    /// Resource type of a notebook.
    NotebookResourceType => "notebook resource type" {
        Notebooks => "notebooks",
    }
}

impl Default for NotebookResourceType {
    fn default() -> Self {
        Self::Notebooks
    }
}

wire_enum! {
    /// Resource type of a notebook cell.
    NotebookCellResourceType => "notebook cell resource type" {
        NotebookCells => "notebook_cells",
    }
}

impl Default for NotebookCellResourceType {
    fn default() -> Self {
        Self::NotebookCells
    }
}

wire_enum! {
    NotebookMetadataType => "notebook metadata type" {
        Postmortem => "postmortem",
        Runbook => "runbook",
        Investigation => "investigation",
        Documentation => "documentation",
        Report => "report",
    }
}

wire_enum! {
    /// Size of a graph cell.
    NotebookGraphSize => "notebook graph size" {
        ExtraSmall => "xs",
        Small => "s",
        Medium => "m",
        Large => "l",
        ExtraLarge => "xl",
    }
}

wire_enum! {
    /// Rolling timeframe token.
    WidgetLiveSpan => "widget live span" {
        PastOneMinute => "1m",
        PastFiveMinutes => "5m",
        PastTenMinutes => "10m",
        PastFifteenMinutes => "15m",
        PastThirtyMinutes => "30m",
        PastOneHour => "1h",
        PastFourHours => "4h",
        PastOneDay => "1d",
        PastTwoDays => "2d",
        PastOneWeek => "1w",
        PastOneMonth => "1mo",
        PastThreeMonths => "3mo",
        PastSixMonths => "6mo",
        PastOneYear => "1y",
        Alert => "alert",
    }
}

wire_enum! {
    WidgetTextAlign => "widget text align" {
        Center => "center",
        Left => "left",
        Right => "right",
    }
}

wire_enum! {
    WidgetDisplayType => "widget display type" {
        Area => "area",
        Bars => "bars",
        Line => "line",
        Overlay => "overlay",
    }
}

wire_enum! {
    WidgetLineType => "widget line type" {
        Dashed => "dashed",
        Dotted => "dotted",
        Solid => "solid",
    }
}

wire_enum! {
    WidgetLineWidth => "widget line width" {
        Normal => "normal",
        Thick => "thick",
        Thin => "thin",
    }
}

wire_enum! {
    TimeseriesWidgetLegendLayout => "timeseries legend layout" {
        Auto => "auto",
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

wire_enum! {
    TimeseriesWidgetLegendColumn => "timeseries legend column" {
        Value => "value",
        Avg => "avg",
        Sum => "sum",
        Min => "min",
        Max => "max",
    }
}

wire_enum! {
    /// Comparator of a conditional format.
    WidgetComparator => "widget comparator" {
        Equal => "=",
        GreaterThan => ">",
        GreaterThanOrEqualTo => ">=",
        LessThan => "<",
        LessThanOrEqualTo => "<=",
    }
}

wire_enum! {
    /// Color palette of a conditional format.
    WidgetPalette => "widget palette" {
        Blue => "blue",
        CustomBackground => "custom_bg",
        CustomImage => "custom_image",
        CustomText => "custom_text",
        GrayOnWhite => "gray_on_white",
        Grey => "grey",
        Green => "green",
        Orange => "orange",
        Red => "red",
        RedOnWhite => "red_on_white",
        WhiteOnGray => "white_on_gray",
        WhiteOnGreen => "white_on_green",
        GreenOnWhite => "green_on_white",
        WhiteOnRed => "white_on_red",
        WhiteOnYellow => "white_on_yellow",
        YellowOnWhite => "yellow_on_white",
        BlackOnLightYellow => "black_on_light_yellow",
        BlackOnLightGreen => "black_on_light_green",
        BlackOnLightRed => "black_on_light_red",
    }
}

wire_enum! {
    /// Sort direction used by legacy queries and the log stream.
    WidgetSort => "widget sort" {
        Ascending => "asc",
        Descending => "desc",
    }
}

wire_enum! {
    /// Sort direction used by formula and function queries.
    QuerySortOrder => "query sort order" {
        Asc => "asc",
        Desc => "desc",
    }
}

wire_enum! {
    WidgetMessageDisplay => "widget message display" {
        Inline => "inline",
        ExpandedMedium => "expanded-md",
        ExpandedLarge => "expanded-lg",
    }
}

wire_enum! {
    FormulaAndFunctionResponseFormat => "response format" {
        Timeseries => "timeseries",
        Scalar => "scalar",
    }
}

wire_enum! {
    FormulaAndFunctionMetricDataSource => "metric data source" {
        Metrics => "metrics",
    }
}

wire_enum! {
    FormulaAndFunctionEventsDataSource => "events data source" {
        Logs => "logs",
        Spans => "spans",
        Network => "network",
        Rum => "rum",
        SecuritySignals => "security_signals",
        Profiles => "profiles",
        Audit => "audit",
        Events => "events",
        CiTests => "ci_tests",
        CiPipelines => "ci_pipelines",
    }
}

wire_enum! {
    FormulaAndFunctionProcessQueryDataSource => "process data source" {
        Process => "process",
        Container => "container",
    }
}

wire_enum! {
    FormulaAndFunctionEventAggregation => "event aggregation" {
        Count => "count",
        Cardinality => "cardinality",
        Median => "median",
        Pc75 => "pc75",
        Pc90 => "pc90",
        Pc95 => "pc95",
        Pc98 => "pc98",
        Pc99 => "pc99",
        Sum => "sum",
        Min => "min",
        Max => "max",
        Avg => "avg",
    }
}

wire_enum! {
    FormulaAndFunctionMetricAggregation => "metric aggregation" {
        Avg => "avg",
        Min => "min",
        Max => "max",
        Sum => "sum",
        Last => "last",
        Area => "area",
        L2Norm => "l2norm",
        Percentile => "percentile",
    }
}

wire_enum! {
    NotebookMarkdownCellDefinitionType => "markdown definition type" {
        Markdown => "markdown",
    }
}

wire_enum! {
    TimeseriesWidgetDefinitionType => "timeseries definition type" {
        Timeseries => "timeseries",
    }
}

wire_enum! {
    ToplistWidgetDefinitionType => "toplist definition type" {
        Toplist => "toplist",
    }
}

wire_enum! {
    HeatMapWidgetDefinitionType => "heatmap definition type" {
        Heatmap => "heatmap",
    }
}

wire_enum! {
    DistributionWidgetDefinitionType => "distribution definition type" {
        Distribution => "distribution",
    }
}

wire_enum! {
    LogStreamWidgetDefinitionType => "log stream definition type" {
        LogStream => "log_stream",
    }
}
