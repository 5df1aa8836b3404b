// File: crates/gantt-core/tests/pipeline.rs
// Purpose: End-to-end planning runs and layout configuration.

use chrono::NaiveDate;
use gantt_core::{
    AxisLabelMode, AxisPosition, EntryKind, GanttConfig, GanttError, GanttPlan, JoinPolicy, LayoutOptions, RawRow,
    SpotRow, TimeMode,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn project() -> Vec<RawRow> {
    vec![
        RawRow::new("WP1 Management", "Kick-off", "0", "0"),
        RawRow::new("WP1 Management", "Reporting", "0", "11"),
        RawRow::new("WP2 Research", "Survey", "2", "5"),
        RawRow::new("WP2 Research", "Analysis", "5", "9"),
    ]
}

fn config() -> GanttConfig {
    GanttConfig::new(TimeMode::RelativeMonth { project_start: "2024-03".parse().unwrap() })
}

#[test]
fn builds_a_full_plan() {
    let spots = vec![SpotRow::new("Survey", "4", "Interim report"), SpotRow::default()];
    let plan = GanttPlan::build(&project(), &spots, &config()).expect("plan");

    assert_eq!(plan.lane_count(), 6);
    assert_eq!(plan.rows[0].kind(), EntryKind::WorkPackage);
    assert_eq!(plan.rows[3].label(), "WP2 Research");
    assert_eq!(plan.span().start, d(2024, 3, 1));
    assert_eq!(plan.span().end, d(2025, 2, 28));
    assert_eq!(plan.axis.ticks.len(), 12);
    assert_eq!(plan.axis.year_marks, vec![d(2025, 1, 1)]);
    assert_eq!(plan.annotations.len(), 1);
    assert_eq!(plan.annotations.dropped_incomplete, 1);
    assert_eq!(plan.annotations.annotations[0].lane, 4);
}

#[test]
fn hide_mode_drops_rows_but_not_range() {
    let shown = GanttPlan::build(&project(), &[], &config()).unwrap();
    let mut layout = LayoutOptions::default();
    layout.hide_work_packages = true;
    let hidden = GanttPlan::build(&project(), &[], &config().with_layout(layout)).unwrap();

    assert!(hidden.rows.iter().all(|r| r.kind() == EntryKind::Activity));
    assert_eq!(hidden.lane_count(), 4);
    assert_eq!(hidden.axis, shown.axis);
}

#[test]
fn normalization_errors_abort_the_run() {
    let rows = vec![RawRow::new("A", "x", "n/a", "n/a")];
    let err = GanttPlan::build(&rows, &[], &config()).unwrap_err();
    assert!(matches!(err, GanttError::MalformedInput(_)), "got {err:?}");
}

#[test]
fn strict_join_surfaces_unmatched_milestones() {
    let spots = vec![SpotRow::new("Nope", "1", "x")];
    let err = GanttPlan::build(&project(), &spots, &config().with_join(JoinPolicy::Strict)).unwrap_err();
    assert!(matches!(err, GanttError::UnmatchedReference { .. }));
}

#[test]
fn zero_stride_is_rejected() {
    let mut layout = LayoutOptions::default();
    layout.tick_stride_months = 0;
    let err = GanttPlan::build(&project(), &[], &config().with_layout(layout)).unwrap_err();
    assert!(matches!(err, GanttError::InvalidConfig(_)));
}

#[test]
fn layout_loads_from_toml_with_defaults() {
    let layout: LayoutOptions = toml::from_str(
        r#"
        tick_stride_months = 3
        mark_quarters = true
        axis_label_mode = "month-number"
        axis_position = "bottom"
        "#,
    )
    .expect("parse layout");
    assert_eq!(layout.tick_stride_months, 3);
    assert!(layout.mark_quarters);
    assert!(layout.mark_years);
    assert!(layout.show_background_bands);
    assert_eq!(layout.axis_label_mode, AxisLabelMode::MonthNumber);
    assert_eq!(layout.axis_position, AxisPosition::Bottom);

    assert!(toml::from_str::<LayoutOptions>("tick_stride = 2").is_err());
}
