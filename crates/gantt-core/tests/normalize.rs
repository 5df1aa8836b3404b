// File: crates/gantt-core/tests/normalize.rs
// Purpose: Date normalization across the three time modes, plus rejection of bad rows.

use chrono::NaiveDate;
use gantt_core::{normalize, Column, GanttError, RawRow, TimeMode, YearMonth};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn relative(start: &str) -> TimeMode {
    TimeMode::RelativeMonth { project_start: start.parse().unwrap() }
}

#[test]
fn relative_offsets_cover_whole_months() {
    let rows = vec![RawRow::new("A", "Design", "0", "2")];
    let out = normalize(&rows, relative("2024-01")).expect("normalize");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].start(), d(2024, 1, 1));
    assert_eq!(out[0].end(), d(2024, 3, 31));
    assert_eq!(out[0].group_id(), "A");
    assert_eq!(out[0].label(), "Design");
    assert!(!out[0].is_work_package());
}

#[test]
fn relative_and_calendar_months_agree() {
    let offsets = [("0", "2"), ("1", "4"), ("11", "13"), ("5", "5")];
    let months = [("2024-01", "2024-03"), ("2024-02", "2024-05"), ("2024-12", "2025-02"), ("2024-06", "2024-06")];

    let rel: Vec<RawRow> = offsets.iter().map(|(s, e)| RawRow::new("WP", "x", *s, *e)).collect();
    let cal: Vec<RawRow> = months.iter().map(|(s, e)| RawRow::new("WP", "x", *s, *e)).collect();

    let a = normalize(&rel, relative("2024-01")).unwrap();
    let b = normalize(&cal, TimeMode::CalendarMonth).unwrap();
    let spans_a: Vec<_> = a.iter().map(|e| (e.start(), e.end())).collect();
    let spans_b: Vec<_> = b.iter().map(|e| (e.start(), e.end())).collect();
    assert_eq!(spans_a, spans_b);
}

#[test]
fn integral_float_offsets_are_accepted() {
    let rows = vec![RawRow::new("A", "x", "1.0", " 3 ")];
    let out = normalize(&rows, relative("2023-11")).unwrap();
    assert_eq!(out[0].start(), d(2023, 12, 1));
    assert_eq!(out[0].end(), d(2024, 2, 29));
}

#[test]
fn calendar_mode_truncates_full_dates_to_months() {
    let rows = vec![
        RawRow::new("A", "x", "2024-03-15", "2024-04-02"),
        RawRow::new("A", "y", "2024/02", "2024/02"),
    ];
    let out = normalize(&rows, TimeMode::CalendarMonth).unwrap();
    assert_eq!((out[0].start(), out[0].end()), (d(2024, 3, 1), d(2024, 4, 30)));
    assert_eq!((out[1].start(), out[1].end()), (d(2024, 2, 1), d(2024, 2, 29)));
}

#[test]
fn exact_mode_keeps_literal_dates() {
    let rows = vec![RawRow::new("A", "x", "2024-03-15", "2024-04-02")];
    let out = normalize(&rows, TimeMode::ExactDate).unwrap();
    assert_eq!((out[0].start(), out[0].end()), (d(2024, 3, 15), d(2024, 4, 2)));
}

#[test]
fn all_unparseable_starts_is_malformed_input() {
    let rows = vec![RawRow::new("A", "x", "soon", "2"), RawRow::new("A", "y", "", "3")];
    let err = normalize(&rows, relative("2024-01")).unwrap_err();
    assert!(matches!(err, GanttError::MalformedInput(_)), "got {err:?}");

    // Month offsets read as calendar months: nothing parses either.
    let rows = vec![RawRow::new("A", "x", "1", "2")];
    let err = normalize(&rows, TimeMode::CalendarMonth).unwrap_err();
    assert!(matches!(err, GanttError::MalformedInput(_)), "got {err:?}");
}

#[test]
fn empty_input_is_malformed_input() {
    assert!(matches!(normalize(&[], TimeMode::ExactDate), Err(GanttError::MalformedInput(_))));
}

#[test]
fn single_bad_cell_is_rejected_not_dropped() {
    let rows = vec![
        RawRow::new("A", "x", "0", "1"),
        RawRow::new("A", "y", "2.5", "3"),
    ];
    let err = normalize(&rows, relative("2024-01")).unwrap_err();
    assert_eq!(err, GanttError::InvalidDate { row: 2, column: Column::Start, value: "2.5".into() });

    let rows = vec![RawRow::new("A", "x", "2024-01-10", "2024-02-30")];
    let err = normalize(&rows, TimeMode::ExactDate).unwrap_err();
    assert_eq!(err, GanttError::InvalidDate { row: 1, column: Column::End, value: "2024-02-30".into() });
}

#[test]
fn errors_report_the_source_record_number() {
    let rows = vec![
        RawRow::new("A", "x", "0", "1").at_row(1),
        RawRow::new("A", "", "1", "2").at_row(4),
    ];
    let err = normalize(&rows, relative("2024-01")).unwrap_err();
    assert_eq!(err, GanttError::MissingField { row: 4, column: Column::Activity });
}

#[test]
fn blank_work_package_is_rejected() {
    let rows = vec![RawRow::new("  ", "x", "0", "1")];
    let err = normalize(&rows, relative("2024-01")).unwrap_err();
    assert_eq!(err, GanttError::MissingField { row: 1, column: Column::WorkPackage });
}

#[test]
fn inverted_span_is_rejected() {
    let rows = vec![RawRow::new("A", "late", "2024-05", "2024-03")];
    let err = normalize(&rows, TimeMode::CalendarMonth).unwrap_err();
    assert!(matches!(err, GanttError::InvertedSpan { ref label, .. } if label == "late"), "got {err:?}");
}

#[test]
fn mode_from_flags() {
    assert_eq!(TimeMode::from_flags(true, true, None).unwrap(), TimeMode::ExactDate);
    assert_eq!(TimeMode::from_flags(true, false, None).unwrap(), TimeMode::CalendarMonth);
    assert_eq!(
        TimeMode::from_flags(false, false, Some("2021-03")).unwrap(),
        TimeMode::RelativeMonth { project_start: YearMonth::new(2021, 3).unwrap() }
    );
    // A full date is accepted and truncated to its month.
    assert_eq!(
        TimeMode::from_flags(false, false, Some("2021-03-17")).unwrap(),
        TimeMode::RelativeMonth { project_start: YearMonth::new(2021, 3).unwrap() }
    );
    assert!(matches!(TimeMode::from_flags(false, true, Some("2021-03")), Err(GanttError::InvalidConfig(_))));
    assert!(matches!(TimeMode::from_flags(false, false, None), Err(GanttError::InvalidConfig(_))));
    assert!(matches!(TimeMode::from_flags(false, false, Some("March")), Err(GanttError::InvalidConfig(_))));
}
