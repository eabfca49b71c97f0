//! Global and cell time oneOfs.

use notebook_client::models::{
    NotebookAbsoluteTime, NotebookCellTime, NotebookGlobalTime, NotebookRelativeTime, WidgetTime,
};

use super::select_variant;
use crate::cursor::PathCursor;
use crate::error::Result;
use crate::extract;

pub(crate) const RELATIVE: &str = "notebook_relative_time";
pub(crate) const ABSOLUTE: &str = "notebook_absolute_time";

#[derive(Clone, Copy)]
enum Kind {
    Relative,
    Absolute,
}

const VARIANTS: [(Kind, &str); 2] = [(Kind::Relative, RELATIVE), (Kind::Absolute, ABSOLUTE)];

enum Time {
    Relative(NotebookRelativeTime),
    Absolute(NotebookAbsoluteTime),
}

fn build_time(c: &mut PathCursor<'_>, one_of: &str) -> Result<Time> {
    let (kind, name) = select_variant(c, one_of, &VARIANTS)?;
    c.within(&format!("{name}.0"), |c| match kind {
        Kind::Relative => Ok(Time::Relative(NotebookRelativeTime {
            live_span: extract::required_enum(c, "live_span")?,
        })),
        Kind::Absolute => Ok(Time::Absolute(NotebookAbsoluteTime {
            start: extract::required_timestamp(c, "start")?,
            end: extract::required_timestamp(c, "end")?,
            live: extract::optional(c, "live")?,
        })),
    })
}

/// Build the notebook time; the cursor sits on `time.0`.
pub(crate) fn build_global_time(c: &mut PathCursor<'_>) -> Result<NotebookGlobalTime> {
    Ok(match build_time(c, "notebook_global_time")? {
        Time::Relative(time) => NotebookGlobalTime::Relative(time),
        Time::Absolute(time) => NotebookGlobalTime::Absolute(time),
    })
}

/// Build a cell time; the cursor sits on the cell's `time.0`.
pub(crate) fn build_cell_time(c: &mut PathCursor<'_>) -> Result<NotebookCellTime> {
    Ok(match build_time(c, "notebook_cell_time")? {
        Time::Relative(time) => NotebookCellTime::Relative(time),
        Time::Absolute(time) => NotebookCellTime::Absolute(time),
    })
}

pub(crate) fn build_widget_time(c: &mut PathCursor<'_>) -> Result<WidgetTime> {
    Ok(WidgetTime {
        live_span: extract::optional_enum(c, "live_span")?,
    })
}
