// File: crates/gantt-core/src/types.rs
// Summary: Shared types (raw input rows, timeline entries, date spans).

use chrono::NaiveDate;

use crate::error::{GanttError, GanttResult};

/// One project-table row as delivered by ingestion, before any date parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    pub work_package: String,
    pub activity: String,
    pub start: String,
    pub end: String,
    /// 1-based record number in the source table, used in row-level errors.
    /// `None` numbers rows by their position in the slice.
    pub source_row: Option<usize>,
}

impl RawRow {
    pub fn new(
        work_package: impl Into<String>,
        activity: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            work_package: work_package.into(),
            activity: activity.into(),
            start: start.into(),
            end: end.into(),
            source_row: None,
        }
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.source_row = Some(row);
        self
    }
}

/// One milestone-table row. Any field may be absent; blank strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpotRow {
    pub activity: Option<String>,
    pub date: Option<String>,
    pub text: Option<String>,
}

impl SpotRow {
    pub fn new(activity: &str, date: &str, text: &str) -> Self {
        Self {
            activity: Some(activity.to_string()),
            date: Some(date.to_string()),
            text: Some(text.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Synthetic row spanning every activity of one work package.
    WorkPackage,
    Activity,
}

/// Inclusive calendar range.
/// Contract: `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Smallest span containing both.
    pub fn union(self, other: DateSpan) -> Self {
        Self { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Span covering every item, `None` for an empty input.
    pub fn enclosing<I: IntoIterator<Item = DateSpan>>(spans: I) -> Option<Self> {
        spans.into_iter().reduce(DateSpan::union)
    }
}

/// One drawable row of the chart: an activity or its work package aggregate.
/// Immutable once built; fields are read through accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    group_id: String,
    label: String,
    kind: EntryKind,
    span: DateSpan,
}

impl TimelineEntry {
    /// Build an activity row, rejecting an inverted range.
    pub fn activity(
        group_id: impl Into<String>,
        label: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> GanttResult<Self> {
        Self::build(group_id.into(), label.into(), EntryKind::Activity, start, end)
    }

    pub(crate) fn work_package(group_id: &str, span: DateSpan) -> Self {
        Self {
            group_id: group_id.to_string(),
            label: group_id.to_string(),
            kind: EntryKind::WorkPackage,
            span,
        }
    }

    fn build(group_id: String, label: String, kind: EntryKind, start: NaiveDate, end: NaiveDate) -> GanttResult<Self> {
        let span = DateSpan::new(start, end).ok_or_else(|| GanttError::InvertedSpan { label: label.clone(), start, end })?;
        Ok(Self { group_id, label, kind, span })
    }

    pub fn group_id(&self) -> &str { &self.group_id }
    pub fn label(&self) -> &str { &self.label }
    pub fn kind(&self) -> EntryKind { self.kind }
    pub fn start(&self) -> NaiveDate { self.span.start }
    pub fn end(&self) -> NaiveDate { self.span.end }
    pub fn span(&self) -> DateSpan { self.span }
    pub fn is_work_package(&self) -> bool { self.kind == EntryKind::WorkPackage }
}
