// File: crates/gantt-core/src/timeline.rs
// Summary: Timeline aggregator; derives one work-package row per group and fixes draw order.

use std::collections::HashMap;

use crate::error::{GanttError, GanttResult};
use crate::types::{DateSpan, EntryKind, TimelineEntry};

/// Derive the synthetic work-package row covering `children`.
/// Fails with `InvariantViolation` when there are no children.
pub fn derive_work_package<'a, I>(group_id: &str, children: I) -> GanttResult<TimelineEntry>
where
    I: IntoIterator<Item = &'a TimelineEntry>,
{
    let span = DateSpan::enclosing(children.into_iter().map(TimelineEntry::span))
        .ok_or_else(|| GanttError::InvariantViolation(format!("work package '{group_id}' has no activities")))?;
    Ok(TimelineEntry::work_package(group_id, span))
}

/// Interleave work-package rows with their activities.
///
/// Groups keep the order of their first appearance; inside a group the work
/// package row comes first, followed by its activities in input order.
/// Entries already marked as work packages are ignored and re-derived.
pub fn aggregate(entries: &[TimelineEntry]) -> GanttResult<Vec<TimelineEntry>> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&TimelineEntry>> = HashMap::new();
    for e in entries.iter().filter(|e| e.kind() == EntryKind::Activity) {
        groups
            .entry(e.group_id())
            .or_insert_with(|| {
                order.push(e.group_id());
                Vec::new()
            })
            .push(e);
    }

    let mut out = Vec::with_capacity(order.len() + entries.len());
    for id in order {
        let children = groups.get(id).map(Vec::as_slice).unwrap_or_default();
        out.push(derive_work_package(id, children.iter().copied())?);
        out.extend(children.iter().map(|c| (*c).clone()));
    }
    tracing::debug!(rows = out.len(), "aggregated work packages");
    Ok(out)
}

/// Aggregated timeline plus the rows that are actually drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    hide_work_packages: bool,
}

impl Timeline {
    pub fn build(activities: &[TimelineEntry], hide_work_packages: bool) -> GanttResult<Self> {
        Ok(Self { entries: aggregate(activities)?, hide_work_packages })
    }

    /// Every aggregated row, hidden work packages included.
    pub fn entries(&self) -> &[TimelineEntry] { &self.entries }

    /// Rows in draw order; work packages are filtered out in hide mode.
    pub fn visible(&self) -> impl Iterator<Item = &TimelineEntry> + '_ {
        let hide = self.hide_work_packages;
        self.entries.iter().filter(move |e| !(hide && e.is_work_package()))
    }

    /// Full date range, independent of hiding.
    pub fn span(&self) -> Option<DateSpan> {
        DateSpan::enclosing(self.entries.iter().map(TimelineEntry::span))
    }
}
