// File: crates/gantt-render-skia/src/theme.rs
// Summary: Color palettes for Gantt rendering, passed explicitly through RenderOptions.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Fill of every other month band.
    pub band: skia::Color,
    pub wp_bar: skia::Color,
    pub activity_bar: skia::Color,
    /// Opacity of work-package bars, 0..=1.
    pub wp_alpha: f32,
    /// Opacity of activity bars, 0..=1.
    pub activity_alpha: f32,
    pub spot: skia::Color,
    pub spot_label: skia::Color,
    pub quarter_line: skia::Color,
    pub year_line: skia::Color,
    pub axis_line: skia::Color,
    pub label: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            band: skia::Color::from_argb(255, 238, 240, 244),
            wp_bar: skia::Color::from_argb(255, 0x1f, 0x78, 0xb4),
            activity_bar: skia::Color::from_argb(255, 0xa6, 0xce, 0xe3),
            wp_alpha: 1.0,
            activity_alpha: 1.0,
            spot: skia::Color::from_argb(255, 0xe3, 0x1a, 0x1c),
            spot_label: skia::Color::from_argb(255, 60, 20, 20),
            quarter_line: skia::Color::from_argb(255, 200, 200, 210),
            year_line: skia::Color::from_argb(255, 120, 120, 130),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            label: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            band: skia::Color::from_argb(255, 30, 30, 36),
            wp_bar: skia::Color::from_argb(255, 64, 160, 255),
            activity_bar: skia::Color::from_argb(255, 96, 156, 255),
            wp_alpha: 1.0,
            activity_alpha: 0.7,
            spot: skia::Color::from_argb(255, 255, 230, 70),
            spot_label: skia::Color::from_argb(255, 235, 235, 245),
            quarter_line: skia::Color::from_argb(255, 55, 55, 62),
            year_line: skia::Color::from_argb(255, 150, 150, 160),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            label: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    /// Grayscale palette for printed reports.
    pub fn print() -> Self {
        Self {
            name: "print",
            background: skia::Color::from_argb(255, 255, 255, 255),
            band: skia::Color::from_argb(255, 242, 242, 242),
            wp_bar: skia::Color::from_argb(255, 40, 40, 40),
            activity_bar: skia::Color::from_argb(255, 150, 150, 150),
            wp_alpha: 1.0,
            activity_alpha: 1.0,
            spot: skia::Color::from_argb(255, 0, 0, 0),
            spot_label: skia::Color::from_argb(255, 0, 0, 0),
            quarter_line: skia::Color::from_argb(255, 210, 210, 210),
            year_line: skia::Color::from_argb(255, 90, 90, 90),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            label: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    /// `color` with its alpha scaled by `alpha`.
    pub fn faded(color: skia::Color, alpha: f32) -> skia::Color {
        let a = (f32::from(color.a()) * alpha.clamp(0.0, 1.0)).round() as u8;
        color.with_a(a)
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
