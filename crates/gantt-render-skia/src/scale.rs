// File: crates/gantt-render-skia/src/scale.rs
// Summary: Date (X) and lane (Y) transforms from plan coordinates to pixels.

use chrono::{Duration, NaiveDate};
use gantt_core::DateSpan;

/// Horizontal calendar scale mapping a date window onto [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct DateScale {
    pub left_px: f32,
    pub right_px: f32,
    pub start: NaiveDate,
    /// Days between window start and end; at least 1.
    span_days: i64,
}

impl DateScale {
    pub fn new(left_px: f32, right_px: f32, window: DateSpan) -> Self {
        let span_days = (window.end - window.start).num_days().max(1);
        Self { left_px, right_px, start: window.start, span_days }
    }

    /// Pixel of the start (midnight) of `date`.
    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        self.left_px + days / self.span_days as f32 * (self.right_px - self.left_px)
    }

    /// Pixel of the end of `date`, for inclusive end dates.
    #[inline]
    pub fn end_of_day_px(&self, date: NaiveDate) -> f32 {
        self.to_px(date + Duration::days(1))
    }
}

/// Vertical scale placing lane `i` in the i-th row below `top_px`.
#[derive(Clone, Copy, Debug)]
pub struct LaneScale {
    pub top_px: f32,
    pub row_height: f32,
}

impl LaneScale {
    pub fn new(top_px: f32, row_height: f32) -> Self {
        Self { top_px, row_height: row_height.max(1.0) }
    }

    #[inline]
    pub fn center(&self, lane: usize) -> f32 {
        self.top_px + (lane as f32 + 0.5) * self.row_height
    }

    /// Top and bottom of a bar `fill` (0..=1) of the row height tall.
    pub fn bar(&self, lane: usize, fill: f32) -> (f32, f32) {
        let half = self.row_height * fill.clamp(0.05, 1.0) * 0.5;
        let c = self.center(lane);
        (c - half, c + half)
    }

    pub fn bottom(&self, lanes: usize) -> f32 {
        self.top_px + lanes as f32 * self.row_height
    }
}
