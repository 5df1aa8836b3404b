// File: crates/gantt-render-skia/src/types.rs
// Summary: Shared sizing constants and margins for the raster surface.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1200;
/// Default height of one timeline row in pixels.
pub const ROW_HEIGHT: f32 = 28.0;
/// Height reserved for month tick labels.
pub const AXIS_HEIGHT: f32 = 44.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(16, 24, 16, 16)
    }
}
