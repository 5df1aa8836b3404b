// File: crates/gantt-render-skia/src/text.rs
// Summary: Text shaper for row and tick labels using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Lay out `text`; embedded newlines start new lines.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool, align: TextAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, bold, TextAlign::Left);
        p.longest_line()
    }

    /// Draw with the left edge at `x`, vertically centered on `cy`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color, bold: bool) {
        let mut p = self.layout(text, size, color, bold, TextAlign::Left);
        let h = p.height();
        p.paint(canvas, (x, cy - h * 0.5));
    }

    /// Draw horizontally centered on `cx`, vertically centered on `cy`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, false, TextAlign::Center);
        // Re-layout to the measured width so centering is relative to the text itself.
        let w = p.max_intrinsic_width().ceil() + 1.0;
        p.layout(w);
        let h = p.height();
        p.paint(canvas, (cx - w * 0.5, cy - h * 0.5));
    }
}
