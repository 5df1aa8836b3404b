// File: crates/gantt-core/src/plan.rs
// Summary: GanttPlan, the renderer-agnostic result of one pipeline run.

use crate::annotation::{normalize_annotations, AnnotationSet};
use crate::axis::{plan_axis, AxisPlan};
use crate::error::GanttResult;
use crate::layout::{GanttConfig, LayoutOptions};
use crate::normalize::normalize;
use crate::timeline::Timeline;
use crate::types::{DateSpan, RawRow, SpotRow, TimelineEntry};

/// Normalized rows, axis plan and milestones, ready to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct GanttPlan {
    /// Drawn rows, top to bottom. Row `i` is lane `i`.
    pub rows: Vec<TimelineEntry>,
    pub axis: AxisPlan,
    pub annotations: AnnotationSet,
    pub layout: LayoutOptions,
}

impl GanttPlan {
    /// Run normalizer, aggregator, axis planner and milestone normalizer.
    /// Any error aborts the run; no partial plan is produced.
    pub fn build(rows: &[RawRow], spots: &[SpotRow], config: &GanttConfig) -> GanttResult<Self> {
        config.layout.validate()?;

        let activities = normalize(rows, config.mode)?;
        let timeline = Timeline::build(&activities, config.layout.hide_work_packages)?;
        let axis = plan_axis(timeline.entries(), &config.layout.axis_options())?;

        let drawn: Vec<TimelineEntry> = timeline.visible().cloned().collect();
        let annotations = normalize_annotations(spots, &drawn, config.mode, config.join)?;

        tracing::info!(
            rows = drawn.len(),
            ticks = axis.ticks.len(),
            milestones = annotations.len(),
            dropped_milestones = annotations.dropped(),
            "planned gantt chart"
        );
        Ok(Self { rows: drawn, axis, annotations, layout: config.layout.clone() })
    }

    /// Date range covered by the data.
    pub fn span(&self) -> DateSpan { self.axis.span }

    pub fn lane_count(&self) -> usize { self.rows.len() }
}
