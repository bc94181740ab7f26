// File: crates/chart-core/src/types.rs
// Summary: Shared colors and margins.

/// Fill of the background column bars (`#4a4a4a`).
pub const BAR_FILL: Rgb = Rgb::new(0x4a, 0x4a, 0x4a);

/// Opaque 8-bit color; renderers convert to their own color type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Chart margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on top, left and right; nothing below the plot.
    pub const fn open_bottom(margin: f32) -> Self {
        Self::new(margin, margin, margin, 0.0)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}
