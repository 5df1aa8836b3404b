// File: crates/gantt-cli/src/main.rs
// Summary: CLI that loads a project CSV (plus optional milestones) and renders a Gantt chart PNG.

mod input;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use gantt_core::{AxisLabelMode, AxisPosition, GanttConfig, GanttPlan, JoinPolicy, LayoutOptions, TimeMode};
use gantt_render_skia::{render_to_png, RenderOptions, Theme};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LabelArg {
    Both,
    MonthNumber,
    CalendarLabel,
    None,
}

impl From<LabelArg> for AxisLabelMode {
    fn from(v: LabelArg) -> Self {
        match v {
            LabelArg::Both => AxisLabelMode::Both,
            LabelArg::MonthNumber => AxisLabelMode::MonthNumber,
            LabelArg::CalendarLabel => AxisLabelMode::CalendarLabel,
            LabelArg::None => AxisLabelMode::None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisArg {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Print,
}

impl From<ThemeArg> for Theme {
    fn from(v: ThemeArg) -> Self {
        match v {
            ThemeArg::Light => Theme::light(),
            ThemeArg::Dark => Theme::dark(),
            ThemeArg::Print => Theme::print(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gantt", version, about = "Render a Gantt chart from a project table")]
struct Cli {
    /// Project CSV: work package, activity, start, end (by column position)
    input: PathBuf,

    /// Milestone CSV: activity, date, text
    #[arg(long, value_name = "CSV")]
    spots: Option<PathBuf>,

    /// Start/end columns hold year-months or dates instead of month offsets
    #[arg(long)]
    by_date: bool,

    /// Use dates exactly instead of rounding to whole months (needs --by-date)
    #[arg(long)]
    exact_date: bool,

    /// First month of the project, for month offsets
    #[arg(long, value_name = "YYYY-MM")]
    project_start: Option<String>,

    /// Layout options in TOML; flags below override it
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Label every n-th month
    #[arg(long, value_name = "MONTHS")]
    stride: Option<u32>,

    /// Draw quarter lines
    #[arg(long)]
    quarters: bool,

    /// Do not draw year lines
    #[arg(long)]
    no_years: bool,

    /// Only draw activities
    #[arg(long)]
    hide_work_packages: bool,

    #[arg(long, value_enum)]
    labels: Option<LabelArg>,

    #[arg(long, value_enum)]
    axis: Option<AxisArg>,

    /// Fail on milestones whose activity is not drawn
    #[arg(long)]
    strict_spots: bool,

    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    #[arg(long, default_value_t = 1200)]
    width: i32,

    /// 0 sizes the image to the number of rows
    #[arg(long, default_value_t = 0)]
    height: i32,

    /// Output PNG (default target/out/gantt_<input stem>.png)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn layout(&self) -> Result<LayoutOptions> {
        let mut layout = match &self.config {
            Some(path) => input::load_layout(path)?,
            None => LayoutOptions::default(),
        };
        if let Some(stride) = self.stride {
            layout.tick_stride_months = stride;
        }
        if self.quarters {
            layout.mark_quarters = true;
        }
        if self.no_years {
            layout.mark_years = false;
        }
        if self.hide_work_packages {
            layout.hide_work_packages = true;
        }
        if let Some(labels) = self.labels {
            layout.axis_label_mode = labels.into();
        }
        if let Some(axis) = self.axis {
            layout.axis_position = match axis {
                AxisArg::Top => AxisPosition::Top,
                AxisArg::Bottom => AxisPosition::Bottom,
            };
        }
        Ok(layout)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = TimeMode::from_flags(cli.by_date, cli.exact_date, cli.project_start.as_deref())?;
    let join = if cli.strict_spots { JoinPolicy::Strict } else { JoinPolicy::Drop };
    let config = GanttConfig::new(mode).with_layout(cli.layout()?).with_join(join);

    let rows = input::load_project_csv(&cli.input)
        .with_context(|| format!("failed to load project table '{}'", cli.input.display()))?;
    let spots = match &cli.spots {
        Some(path) => input::load_spots_csv(path)
            .with_context(|| format!("failed to load milestone table '{}'", path.display()))?,
        None => Vec::new(),
    };

    let plan = GanttPlan::build(&rows, &spots, &config)
        .with_context(|| format!("cannot plan chart for '{}'", cli.input.display()))?;
    tracing::info!(
        start = %plan.span().start,
        end = %plan.span().end,
        rows = plan.lane_count(),
        "timeline normalized"
    );

    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        theme: cli.theme.into(),
        ..RenderOptions::default()
    };
    let out = cli.out.clone().unwrap_or_else(|| input::default_output(&cli.input));
    render_to_png(&plan, &opts, &out).with_context(|| format!("failed to render chart to '{}'", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
