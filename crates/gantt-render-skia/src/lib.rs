// File: crates/gantt-render-skia/src/lib.rs
// Summary: Skia renderer crate; draws a planned Gantt chart to PNG bytes, files or RGBA buffers.

pub mod renderer;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use renderer::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use scale::{DateScale, LaneScale};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::Insets;
