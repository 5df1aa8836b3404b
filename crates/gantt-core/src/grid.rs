// File: crates/gantt-core/src/grid.rs
// Summary: Month stepping helpers for band and tick layout.

use crate::month::YearMonth;

/// Months from `first` to `last` inclusive, every `stride` months.
/// Empty when `stride` is zero or the range is inverted.
pub fn month_steps(first: YearMonth, last: YearMonth, stride: u32) -> Vec<YearMonth> {
    if stride == 0 || last < first {
        return Vec::new();
    }
    (0..=first.months_until(last))
        .step_by(stride as usize)
        .filter_map(|k| first.checked_add_months(k))
        .collect()
}
