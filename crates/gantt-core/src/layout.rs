// File: crates/gantt-core/src/layout.rs
// Summary: Layout and pipeline configuration (tick stride, marks, label modes, join policy).

use serde::Deserialize;

use crate::axis::AxisOptions;
use crate::error::{GanttError, GanttResult};
use crate::normalize::TimeMode;

/// Which text the month ticks carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisLabelMode {
    /// `M1`, `M2`, ...
    MonthNumber,
    /// `Jan 2024`, ...
    CalendarLabel,
    #[default]
    Both,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisPosition {
    #[default]
    Top,
    Bottom,
}

/// What to do with a milestone whose activity is not drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinPolicy {
    /// Omit it and count it.
    #[default]
    Drop,
    /// Fail with `UnmatchedReference`.
    Strict,
}

/// Layout switches shared by the planner and the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutOptions {
    pub tick_stride_months: u32,
    pub mark_quarters: bool,
    pub mark_years: bool,
    pub hide_work_packages: bool,
    pub show_background_bands: bool,
    pub axis_label_mode: AxisLabelMode,
    pub axis_position: AxisPosition,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            tick_stride_months: 1,
            mark_quarters: false,
            mark_years: true,
            hide_work_packages: false,
            show_background_bands: true,
            axis_label_mode: AxisLabelMode::Both,
            axis_position: AxisPosition::Top,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> GanttResult<()> {
        if self.tick_stride_months == 0 {
            return Err(GanttError::InvalidConfig("tick_stride_months must be at least 1".into()));
        }
        Ok(())
    }

    pub fn axis_options(&self) -> AxisOptions {
        AxisOptions {
            tick_stride_months: self.tick_stride_months,
            mark_quarters: self.mark_quarters,
            mark_years: self.mark_years,
        }
    }
}

/// Everything one pipeline run needs besides the data.
#[derive(Clone, Debug, PartialEq)]
pub struct GanttConfig {
    pub mode: TimeMode,
    pub layout: LayoutOptions,
    pub join: JoinPolicy,
}

impl GanttConfig {
    pub fn new(mode: TimeMode) -> Self {
        Self { mode, layout: LayoutOptions::default(), join: JoinPolicy::default() }
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_join(mut self, join: JoinPolicy) -> Self {
        self.join = join;
        self
    }
}
