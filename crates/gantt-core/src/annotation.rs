// File: crates/gantt-core/src/annotation.rs
// Summary: Annotation normalizer; places milestone ("spot") markers on the timeline.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{GanttError, GanttResult};
use crate::layout::JoinPolicy;
use crate::normalize::{Anchor, TimeMode};
use crate::types::{SpotRow, TimelineEntry};

/// A point-in-time marker attached to a drawn row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub activity_label: String,
    pub date: NaiveDate,
    pub text: String,
    /// Index of the matched row in draw order.
    pub lane: usize,
}

/// Surviving annotations plus how many rows were dropped and why.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    pub annotations: Vec<Annotation>,
    /// Rows with a missing activity, date or text.
    pub dropped_incomplete: usize,
    /// Rows whose date could not be read under the time mode.
    pub dropped_unparseable: usize,
    /// Rows naming an activity that is not drawn.
    pub dropped_unmatched: usize,
}

impl AnnotationSet {
    pub fn dropped(&self) -> usize {
        self.dropped_incomplete + self.dropped_unparseable + self.dropped_unmatched
    }

    pub fn len(&self) -> usize { self.annotations.len() }
    pub fn is_empty(&self) -> bool { self.annotations.is_empty() }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Normalize milestone rows against the drawn `entries`.
///
/// Month-precision dates land on the middle of their month. Incomplete or
/// unreadable rows are dropped; unmatched labels follow `policy`. When a label
/// occurs on several rows the top-most one is used.
pub fn normalize_annotations(
    rows: &[SpotRow],
    entries: &[TimelineEntry],
    mode: TimeMode,
    policy: JoinPolicy,
) -> GanttResult<AnnotationSet> {
    let mut lanes: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
    for (lane, e) in entries.iter().enumerate() {
        lanes.entry(e.label()).or_insert(lane);
    }

    let mut set = AnnotationSet::default();
    for row in rows {
        let (Some(label), Some(raw_date), Some(text)) = (present(&row.activity), present(&row.date), present(&row.text))
        else {
            set.dropped_incomplete += 1;
            continue;
        };
        let Some(date) = mode.resolve(raw_date, Anchor::Middle) else {
            tracing::warn!(activity = label, date = raw_date, "dropping milestone with unreadable date");
            set.dropped_unparseable += 1;
            continue;
        };
        let Some(&lane) = lanes.get(label) else {
            match policy {
                JoinPolicy::Strict => return Err(GanttError::UnmatchedReference { label: label.to_string() }),
                JoinPolicy::Drop => {
                    tracing::warn!(activity = label, "dropping milestone for unknown activity");
                    set.dropped_unmatched += 1;
                    continue;
                }
            }
        };
        set.annotations.push(Annotation {
            activity_label: label.to_string(),
            date,
            text: text.to_string(),
            lane,
        });
    }

    tracing::debug!(kept = set.len(), dropped = set.dropped(), "normalized milestones");
    Ok(set)
}
