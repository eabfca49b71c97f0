//! Timeframe oneOfs shared by the notebook and its cells.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::enums::WidgetLiveSpan;

/// Rolling timeframe expressed as a live span token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookRelativeTime {
    pub live_span: WidgetLiveSpan,
}

/// Fixed timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookAbsoluteTime {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Whether the timeframe keeps moving forward once reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
}

/// Global timeframe of a notebook. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotebookGlobalTime {
    Relative(NotebookRelativeTime),
    Absolute(NotebookAbsoluteTime),
}

/// Timeframe override of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotebookCellTime {
    Relative(NotebookRelativeTime),
    Absolute(NotebookAbsoluteTime),
}

/// Timeframe of a widget definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_span: Option<WidgetLiveSpan>,
}
