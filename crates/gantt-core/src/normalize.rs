// File: crates/gantt-core/src/normalize.rs
// Summary: Input normalizer; turns raw rows into canonical calendar spans for one time mode.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{Column, GanttError, GanttResult};
use crate::month::YearMonth;
use crate::types::{RawRow, TimelineEntry};

/// Relative offsets beyond this many months are treated as unparseable.
const MAX_MONTH_OFFSET: i64 = 120_000;

/// How the start/end cells of the input table are to be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeMode {
    /// Integer month offsets; offset 0 is `project_start`. Spans cover whole months.
    RelativeMonth { project_start: YearMonth },
    /// Year-month values; spans cover whole months.
    CalendarMonth,
    /// Full `YYYY-MM-DD` dates used literally.
    ExactDate,
}

/// Where inside a month a month-precision cell lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    First,
    Last,
    Middle,
}

impl TimeMode {
    /// Map the `by_date` / `exact_date` flag pair onto a mode.
    pub fn from_flags(by_date: bool, exact_date: bool, project_start: Option<&str>) -> GanttResult<Self> {
        match (by_date, exact_date) {
            (true, true) => Ok(TimeMode::ExactDate),
            (true, false) => Ok(TimeMode::CalendarMonth),
            (false, true) => Err(GanttError::InvalidConfig(
                "exact dates require date-based input (by_date)".into(),
            )),
            (false, false) => {
                let raw = project_start.ok_or_else(|| {
                    GanttError::InvalidConfig("month offsets need a project start date".into())
                })?;
                Ok(TimeMode::RelativeMonth { project_start: raw.parse()? })
            }
        }
    }

    /// Month a cell refers to, for the month-precision modes.
    fn month_of(&self, cell: &str) -> Option<YearMonth> {
        match self {
            TimeMode::RelativeMonth { project_start } => project_start.checked_add_months(parse_offset(cell)?),
            TimeMode::CalendarMonth => YearMonth::parse(cell),
            TimeMode::ExactDate => None,
        }
    }

    pub(crate) fn resolve(&self, cell: &str, anchor: Anchor) -> Option<NaiveDate> {
        let cell = cell.trim();
        if cell.is_empty() {
            return None;
        }
        if let TimeMode::ExactDate = self {
            return NaiveDate::parse_from_str(cell, "%Y-%m-%d").ok();
        }
        let month = self.month_of(cell)?;
        Some(match anchor {
            Anchor::First => month.first_day(),
            Anchor::Last => month.last_day(),
            Anchor::Middle => month.at_fraction(0.5),
        })
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeMode::RelativeMonth { project_start } => write!(f, "month offsets from {project_start}"),
            TimeMode::CalendarMonth => f.write_str("calendar months"),
            TimeMode::ExactDate => f.write_str("exact dates"),
        }
    }
}

/// Accepts `3`, `-1` and integral floats such as `3.0`.
fn parse_offset(cell: &str) -> Option<i64> {
    let n = match cell.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            let f = cell.parse::<f64>().ok()?;
            if !f.is_finite() || f.fract() != 0.0 || f.abs() > MAX_MONTH_OFFSET as f64 {
                return None;
            }
            f as i64
        }
    };
    (n.abs() <= MAX_MONTH_OFFSET).then_some(n)
}

/// Normalize every row into an activity entry.
///
/// Fails with `MalformedInput` when nothing parses at all (wrong mode or column
/// mapping), and with a row-level error for any individual bad cell.
pub fn normalize(rows: &[RawRow], mode: TimeMode) -> GanttResult<Vec<TimelineEntry>> {
    if rows.is_empty() {
        return Err(GanttError::MalformedInput("no rows to normalize".into()));
    }

    let starts: Vec<Option<NaiveDate>> = rows.iter().map(|r| mode.resolve(&r.start, Anchor::First)).collect();
    if starts.iter().all(Option::is_none) {
        return Err(GanttError::MalformedInput(format!(
            "none of {} start values could be read as {mode}",
            rows.len()
        )));
    }

    let mut out = Vec::with_capacity(rows.len());
    for (i, (row, start)) in rows.iter().zip(starts).enumerate() {
        let line = row.source_row.unwrap_or(i + 1);
        let work_package = row.work_package.trim();
        if work_package.is_empty() {
            return Err(GanttError::MissingField { row: line, column: Column::WorkPackage });
        }
        let activity = row.activity.trim();
        if activity.is_empty() {
            return Err(GanttError::MissingField { row: line, column: Column::Activity });
        }
        let start = start.ok_or_else(|| GanttError::InvalidDate {
            row: line,
            column: Column::Start,
            value: row.start.clone(),
        })?;
        let end = mode.resolve(&row.end, Anchor::Last).ok_or_else(|| GanttError::InvalidDate {
            row: line,
            column: Column::End,
            value: row.end.clone(),
        })?;
        out.push(TimelineEntry::activity(work_package, activity, start, end)?);
    }

    tracing::debug!(rows = out.len(), %mode, "normalized timeline rows");
    Ok(out)
}
