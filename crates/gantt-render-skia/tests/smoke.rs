// File: crates/gantt-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use gantt_core::{GanttConfig, GanttPlan, RawRow, SpotRow, TimeMode};
use gantt_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};

fn plan() -> GanttPlan {
    let rows = vec![
        RawRow::new("WP1", "Design", "0", "2"),
        RawRow::new("WP1", "Build", "2", "6"),
        RawRow::new("WP2", "Evaluate", "5", "9"),
    ];
    let spots = vec![SpotRow::new("Build", "4", "Prototype")];
    let config = GanttConfig::new(TimeMode::RelativeMonth { project_start: "2024-01".parse().unwrap() });
    GanttPlan::build(&rows, &spots, &config).expect("plan")
}

#[test]
fn render_smoke_png() {
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/gantt_smoke.png");

    render_to_png(&plan(), &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&plan(), &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn too_small_surface_is_an_error() {
    let mut opts = RenderOptions::default();
    opts.width = 30;
    opts.draw_labels = false;
    assert!(render_to_png_bytes(&plan(), &opts).is_err());
}

#[test]
fn write_failure_names_the_path() {
    let blocker = std::path::PathBuf::from("target/test_out/not_a_dir");
    std::fs::create_dir_all("target/test_out").expect("out dir");
    std::fs::write(&blocker, b"file").expect("blocker file");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let err = render_to_png(&plan(), &opts, blocker.join("chart.png")).expect_err("parent is a file");
    assert!(format!("{err:#}").contains("not_a_dir"), "unexpected error: {err:#}");
}
