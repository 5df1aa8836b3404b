// File: crates/gantt-core/tests/annotations.rs
// Purpose: Milestone normalization, drop policy and label join.

use chrono::NaiveDate;
use gantt_core::{
    normalize, normalize_annotations, GanttError, JoinPolicy, RawRow, SpotRow, Timeline, TimeMode, TimelineEntry,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn mode() -> TimeMode {
    TimeMode::RelativeMonth { project_start: "2024-01".parse().unwrap() }
}

fn drawn(hide: bool) -> Vec<TimelineEntry> {
    let raw = vec![
        RawRow::new("WP1", "Design", "0", "2"),
        RawRow::new("WP1", "Build", "2", "5"),
        RawRow::new("WP2", "Test", "4", "6"),
    ];
    let acts = normalize(&raw, mode()).unwrap();
    Timeline::build(&acts, hide).unwrap().visible().cloned().collect()
}

#[test]
fn milestones_land_mid_month_on_their_row() {
    let rows = vec![SpotRow::new("Build", "3", "review"), SpotRow::new("WP2", "6", "final")];
    let set = normalize_annotations(&rows, &drawn(false), mode(), JoinPolicy::Drop).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.dropped(), 0);

    let review = &set.annotations[0];
    assert_eq!(review.activity_label, "Build");
    assert_eq!(review.date, d(2024, 4, 16));
    assert_eq!(review.text, "review");
    assert_eq!(review.lane, 2);

    // Work package rows can carry milestones too.
    assert_eq!(set.annotations[1].lane, 3);
    assert_eq!(set.annotations[1].date, d(2024, 7, 16));
}

#[test]
fn incomplete_rows_are_dropped_silently() {
    let rows = vec![
        SpotRow { activity: Some("Design".into()), date: None, text: Some("kickoff".into()) },
        SpotRow::new("Design", "1", "  "),
        SpotRow::new("Test", "5", "go-live"),
    ];
    let set = normalize_annotations(&rows, &drawn(false), mode(), JoinPolicy::Strict).unwrap();
    assert_eq!(set.dropped_incomplete, 2);
    assert_eq!(set.len(), 1);
    assert_eq!(set.annotations[0].text, "go-live");
}

#[test]
fn unreadable_dates_are_counted() {
    let rows = vec![SpotRow::new("Design", "next spring", "x"), SpotRow::new("Design", "1", "y")];
    let set = normalize_annotations(&rows, &drawn(false), mode(), JoinPolicy::Drop).unwrap();
    assert_eq!(set.dropped_unparseable, 1);
    assert_eq!(set.len(), 1);
}

#[test]
fn unmatched_labels_follow_the_join_policy() {
    let rows = vec![SpotRow::new("Deploy", "3", "x"), SpotRow::new("Test", "5", "y")];

    let set = normalize_annotations(&rows, &drawn(false), mode(), JoinPolicy::Drop).unwrap();
    assert_eq!(set.dropped_unmatched, 1);
    assert_eq!(set.len(), 1);

    let err = normalize_annotations(&rows, &drawn(false), mode(), JoinPolicy::Strict).unwrap_err();
    assert_eq!(err, GanttError::UnmatchedReference { label: "Deploy".into() });
}

#[test]
fn hidden_work_packages_cannot_anchor_milestones() {
    let rows = vec![SpotRow::new("WP1", "1", "x")];
    let set = normalize_annotations(&rows, &drawn(true), mode(), JoinPolicy::Drop).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.dropped_unmatched, 1);
}

#[test]
fn exact_mode_keeps_the_literal_day() {
    let entries = vec![TimelineEntry::activity("WP", "Ship", d(2024, 3, 1), d(2024, 3, 20)).unwrap()];
    let rows = vec![SpotRow::new("Ship", "2024-03-07", "cut")];
    let set = normalize_annotations(&rows, &entries, TimeMode::ExactDate, JoinPolicy::Drop).unwrap();
    assert_eq!(set.annotations[0].date, d(2024, 3, 7));

    let set = normalize_annotations(&rows, &entries, TimeMode::CalendarMonth, JoinPolicy::Drop).unwrap();
    assert_eq!(set.annotations[0].date, d(2024, 3, 16));
}

#[test]
fn duplicate_labels_use_the_first_row() {
    let entries = vec![
        TimelineEntry::activity("A", "Review", d(2024, 1, 1), d(2024, 1, 31)).unwrap(),
        TimelineEntry::activity("B", "Review", d(2024, 2, 1), d(2024, 2, 29)).unwrap(),
    ];
    let rows = vec![SpotRow::new("Review", "2024-02", "x")];
    let set = normalize_annotations(&rows, &entries, TimeMode::CalendarMonth, JoinPolicy::Strict).unwrap();
    assert_eq!(set.annotations[0].lane, 0);
}
