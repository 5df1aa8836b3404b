// File: crates/gantt-core/src/axis.rs
// Summary: Axis planner; month bands, month ticks, quarter and year marks for a timeline.

use chrono::NaiveDate;

use crate::error::{GanttError, GanttResult};
use crate::grid::month_steps;
use crate::layout::AxisLabelMode;
use crate::month::YearMonth;
use crate::types::{DateSpan, TimelineEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisOptions {
    /// Label every n-th month; at least 1.
    pub tick_stride_months: u32,
    pub mark_quarters: bool,
    pub mark_years: bool,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self { tick_stride_months: 1, mark_quarters: false, mark_years: true }
    }
}

/// One shaded background interval `[start, end)` between two month boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthBand {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A labelled month, positioned at the middle of the month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthTick {
    pub month: YearMonth,
    pub date: NaiveDate,
    /// 1-based month count from the first month of the axis.
    pub index: u32,
    pub calendar_label: String,
    pub index_label: String,
}

impl MonthTick {
    /// Text shown for this tick under `mode`; `None` when labels are off.
    pub fn text(&self, mode: AxisLabelMode) -> Option<String> {
        match mode {
            AxisLabelMode::MonthNumber => Some(self.index_label.clone()),
            AxisLabelMode::CalendarLabel => Some(self.calendar_label.clone()),
            AxisLabelMode::Both => Some(format!("{}\n{}", self.index_label, self.calendar_label)),
            AxisLabelMode::None => None,
        }
    }
}

/// Read-only axis description derived from a timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisPlan {
    /// Data range the plan was built for.
    pub span: DateSpan,
    /// First days of months; always an even count.
    pub boundaries: Vec<NaiveDate>,
    pub bands: Vec<MonthBand>,
    pub ticks: Vec<MonthTick>,
    pub quarter_marks: Vec<NaiveDate>,
    pub year_marks: Vec<NaiveDate>,
}

impl AxisPlan {
    /// Drawable window: first to last month boundary.
    pub fn window(&self) -> DateSpan {
        match (self.boundaries.first(), self.boundaries.last()) {
            (Some(&start), Some(&end)) => DateSpan { start, end },
            _ => self.span,
        }
    }
}

fn beyond_calendar() -> GanttError {
    GanttError::MalformedInput("timeline reaches past the supported calendar range".into())
}

/// Plan the axis covering every entry.
pub fn plan_axis(entries: &[TimelineEntry], options: &AxisOptions) -> GanttResult<AxisPlan> {
    let span = DateSpan::enclosing(entries.iter().map(TimelineEntry::span))
        .ok_or_else(|| GanttError::MalformedInput("cannot plan an axis for an empty timeline".into()))?;
    plan_span(span, options)
}

/// Plan the axis for an explicit date range.
pub fn plan_span(span: DateSpan, options: &AxisOptions) -> GanttResult<AxisPlan> {
    let stride = options.tick_stride_months;
    if stride == 0 {
        return Err(GanttError::InvalidConfig("tick_stride_months must be at least 1".into()));
    }

    let first = YearMonth::from_date(span.start);
    let last = YearMonth::from_date(span.end);
    let after = last.succ().ok_or_else(beyond_calendar)?;

    // Bands are drawn as (start, end) pairs, so the boundary count must be even.
    let mut boundary_months = month_steps(first, after, 1);
    if boundary_months.len() % 2 == 1 {
        boundary_months.push(after.succ().ok_or_else(beyond_calendar)?);
    }
    let boundaries: Vec<NaiveDate> = boundary_months.iter().map(YearMonth::first_day).collect();
    let bands = boundaries
        .chunks_exact(2)
        .map(|pair| MonthBand { start: pair[0], end: pair[1] })
        .collect();

    let ticks = month_steps(first, last, stride)
        .into_iter()
        .zip((0u32..).map(|k| 1 + k * stride))
        .map(|(month, index)| MonthTick {
            month,
            date: month.at_fraction(0.5),
            index,
            calendar_label: month.first_day().format("%b %Y").to_string(),
            index_label: format!("M{index}"),
        })
        .collect();

    let window_start = boundaries.first().copied().unwrap_or(span.start);
    let window_end = boundaries.last().copied().unwrap_or(span.end);
    let window_last = YearMonth::from_date(window_end);
    let in_window = |d: &NaiveDate| window_start <= *d && *d <= window_end;

    let quarter_marks = if options.mark_quarters {
        month_steps(first.floor_year(), window_last, 3)
            .iter()
            .map(YearMonth::first_day)
            .filter(in_window)
            .collect()
    } else {
        Vec::new()
    };

    let year_marks = if options.mark_years {
        let ceil = window_last.ceil_year().ok_or_else(beyond_calendar)?;
        month_steps(first.floor_year(), ceil, 12)
            .iter()
            .map(YearMonth::first_day)
            .filter(in_window)
            .collect()
    } else {
        Vec::new()
    };

    Ok(AxisPlan { span, boundaries, bands, ticks, quarter_marks, year_marks })
}
