// File: crates/gantt-render-skia/src/renderer.rs
// Summary: Headless Gantt rendering onto Skia CPU raster surfaces (PNG and RGBA export).

use anyhow::{anyhow, Context, Result};
use gantt_core::{AxisPosition, EntryKind, GanttPlan};
use skia_safe as skia;

use crate::scale::{DateScale, LaneScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, AXIS_HEIGHT, ROW_HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    /// Surface height; 0 derives it from the number of rows.
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub row_height: f32,
    pub font_size: f32,
    /// Row, tick and milestone text. Off in pixel snapshots to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: 0,
            insets: Insets::default(),
            theme: Theme::default(),
            row_height: ROW_HEIGHT,
            font_size: 13.0,
            draw_labels: true,
        }
    }
}

/// Pixel placement of the plot for one render.
struct Frame {
    width: i32,
    height: i32,
    label_right: f32,
    plot_left: f32,
    plot_right: f32,
    plot_top: f32,
    plot_bottom: f32,
    axis_center: f32,
}

/// Largest gutter the row labels may claim, as a share of the surface width.
const MAX_LABEL_SHARE: f32 = 0.4;

fn frame(plan: &GanttPlan, opts: &RenderOptions, shaper: &TextShaper) -> Frame {
    let ins = opts.insets;
    let lanes = plan.lane_count().max(1) as f32;

    let label_w = if opts.draw_labels {
        let widest = plan
            .rows
            .iter()
            .map(|r| shaper.measure_width(r.label(), opts.font_size, r.is_work_package()))
            .fold(0.0f32, f32::max);
        (widest + 16.0).min(opts.width as f32 * MAX_LABEL_SHARE)
    } else {
        0.0
    };

    let height = if opts.height > 0 {
        opts.height
    } else {
        (ins.vsum() as f32 + AXIS_HEIGHT + lanes * opts.row_height).ceil() as i32
    };

    let label_right = ins.left as f32 + label_w;
    let (plot_top, plot_bottom, axis_center) = match plan.layout.axis_position {
        AxisPosition::Top => {
            let top = ins.top as f32 + AXIS_HEIGHT;
            (top, height as f32 - ins.bottom as f32, ins.top as f32 + AXIS_HEIGHT * 0.5)
        }
        AxisPosition::Bottom => {
            let bottom = height as f32 - ins.bottom as f32 - AXIS_HEIGHT;
            (ins.top as f32, bottom, bottom + AXIS_HEIGHT * 0.5)
        }
    };

    Frame {
        width: opts.width,
        height,
        label_right,
        plot_left: label_right,
        plot_right: (opts.width - ins.right as i32) as f32,
        plot_top,
        plot_bottom,
        axis_center,
    }
}

/// Render the plan and return the raster surface.
fn render_surface(plan: &GanttPlan, opts: &RenderOptions) -> Result<skia::Surface> {
    let shaper = TextShaper::new();
    let f = frame(plan, opts, &shaper);
    if f.plot_right <= f.plot_left || f.plot_bottom <= f.plot_top {
        return Err(anyhow!("surface {}x{} is too small for {} rows", f.width, f.height, plan.lane_count()));
    }
    tracing::debug!(width = f.width, height = f.height, rows = plan.lane_count(), "rendering gantt chart");

    let mut surface = skia::surfaces::raster_n32_premul((f.width, f.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let xs = DateScale::new(f.plot_left, f.plot_right, plan.axis.window());
    let row_h = (f.plot_bottom - f.plot_top) / plan.lane_count().max(1) as f32;
    let ys = LaneScale::new(f.plot_top, row_h);

    if plan.layout.show_background_bands {
        draw_bands(canvas, plan, &f, &xs, theme);
    }
    draw_marks(canvas, plan, &f, &xs, theme);
    draw_bars(canvas, plan, &xs, &ys, theme);
    draw_spots(canvas, plan, &xs, &ys, theme);
    draw_axis_line(canvas, plan, &f, theme);

    if opts.draw_labels {
        draw_row_labels(canvas, plan, &f, &ys, opts, &shaper);
        draw_tick_labels(canvas, plan, &f, &xs, opts, &shaper);
        draw_spot_labels(canvas, plan, &xs, &ys, opts, &shaper);
    }
    Ok(surface)
}

/// Encode the rendered chart as PNG bytes.
pub fn render_to_png_bytes(plan: &GanttPlan, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = render_surface(plan, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(plan: &GanttPlan, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(plan, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render into an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
pub fn render_to_rgba8(plan: &GanttPlan, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(plan, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow!("reading back surface pixels failed"));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

// ---- helpers ----------------------------------------------------------------

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_bands(canvas: &skia::Canvas, plan: &GanttPlan, f: &Frame, xs: &DateScale, theme: &Theme) {
    let paint = fill(theme.band);
    for band in &plan.axis.bands {
        let rect = skia::Rect::from_ltrb(xs.to_px(band.start), f.plot_top, xs.to_px(band.end), f.plot_bottom);
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_marks(canvas: &skia::Canvas, plan: &GanttPlan, f: &Frame, xs: &DateScale, theme: &Theme) {
    // Years after quarters so they stay visible where both fall.
    let quarter = stroke(theme.quarter_line, 1.0);
    for &d in &plan.axis.quarter_marks {
        let x = xs.to_px(d);
        canvas.draw_line((x, f.plot_top), (x, f.plot_bottom), &quarter);
    }
    let year = stroke(theme.year_line, 2.0);
    for &d in &plan.axis.year_marks {
        let x = xs.to_px(d);
        canvas.draw_line((x, f.plot_top), (x, f.plot_bottom), &year);
    }
}

fn draw_bars(canvas: &skia::Canvas, plan: &GanttPlan, xs: &DateScale, ys: &LaneScale, theme: &Theme) {
    let wp = fill(Theme::faded(theme.wp_bar, theme.wp_alpha));
    let act = fill(Theme::faded(theme.activity_bar, theme.activity_alpha));
    for (lane, row) in plan.rows.iter().enumerate() {
        let (paint, thickness) = match row.kind() {
            EntryKind::WorkPackage => (&wp, 0.7),
            EntryKind::Activity => (&act, 0.45),
        };
        let (top, bottom) = ys.bar(lane, thickness);
        let left = xs.to_px(row.start());
        let right = xs.end_of_day_px(row.end()).max(left + 1.0);
        canvas.draw_rect(skia::Rect::from_ltrb(left, top, right, bottom), paint);
    }
}

fn draw_spots(canvas: &skia::Canvas, plan: &GanttPlan, xs: &DateScale, ys: &LaneScale, theme: &Theme) {
    let paint = fill(theme.spot);
    let r = ys.row_height * 0.3;
    for spot in &plan.annotations.annotations {
        let x = xs.to_px(spot.date);
        let y = ys.center(spot.lane);
        let mut diamond = skia::Path::new();
        diamond.move_to((x, y - r));
        diamond.line_to((x + r, y));
        diamond.line_to((x, y + r));
        diamond.line_to((x - r, y));
        diamond.close();
        canvas.draw_path(&diamond, &paint);
    }
}

fn draw_axis_line(canvas: &skia::Canvas, plan: &GanttPlan, f: &Frame, theme: &Theme) {
    let paint = stroke(theme.axis_line, 1.5);
    let y = match plan.layout.axis_position {
        AxisPosition::Top => f.plot_top,
        AxisPosition::Bottom => f.plot_bottom,
    };
    canvas.draw_line((f.plot_left, y), (f.plot_right, y), &paint);
}

fn draw_row_labels(canvas: &skia::Canvas, plan: &GanttPlan, f: &Frame, ys: &LaneScale, opts: &RenderOptions, shaper: &TextShaper) {
    let x = opts.insets.left as f32;
    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(0.0, 0.0, f.label_right, f.height as f32), None, None);
    for (lane, row) in plan.rows.iter().enumerate() {
        let bold = row.is_work_package();
        // Activities are indented under their work package unless packages are hidden.
        let indent = if bold || plan.layout.hide_work_packages { 0.0 } else { 12.0 };
        shaper.draw_left(canvas, row.label(), x + indent, ys.center(lane), opts.font_size, opts.theme.label, bold);
    }
    canvas.restore();
}

fn draw_tick_labels(canvas: &skia::Canvas, plan: &GanttPlan, f: &Frame, xs: &DateScale, opts: &RenderOptions, shaper: &TextShaper) {
    let size = opts.font_size * 0.85;
    for tick in &plan.axis.ticks {
        let Some(text) = tick.text(plan.layout.axis_label_mode) else { continue };
        shaper.draw_centered(canvas, &text, xs.to_px(tick.date), f.axis_center, size, opts.theme.label);
    }
}

fn draw_spot_labels(canvas: &skia::Canvas, plan: &GanttPlan, xs: &DateScale, ys: &LaneScale, opts: &RenderOptions, shaper: &TextShaper) {
    let size = opts.font_size * 0.85;
    let offset = ys.row_height * 0.3 + 4.0;
    for spot in &plan.annotations.annotations {
        let x = xs.to_px(spot.date) + offset;
        shaper.draw_left(canvas, &spot.text, x, ys.center(spot.lane), size, opts.theme.spot_label, false);
    }
}
