// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia backend for chart-core; charts are rasterized on the CPU to RGBA8 buffers or PNG.

pub mod render;
pub mod text;
pub mod theme;

use chart_core::{ChartBackend, Scene};
use tracing::debug;

pub use render::{RenderOptions, SkiaChart, LEGEND_HEIGHT};
pub use text::{Anchor, Face, Ink, TextShaper};
pub use theme::Theme;

/// Creates [`SkiaChart`] handles; drawing happens when the host asks a handle for a frame.
#[derive(Debug, Default)]
pub struct SkiaBackend {
    updates: u64,
}

impl SkiaBackend {
    pub fn new() -> Self { Self::default() }

    /// Chart updates pushed so far, across all handles.
    pub fn updates(&self) -> u64 { self.updates }
}

impl ChartBackend for SkiaBackend {
    type Handle = SkiaChart;

    fn create_chart(&mut self, scene: &Scene<'_>) -> chart_core::Result<SkiaChart> {
        debug!(series = scene.series.as_slice().len(), "creating skia chart");
        Ok(SkiaChart::new(scene))
    }

    fn update_chart(&mut self, handle: &mut SkiaChart, scene: &Scene<'_>) -> chart_core::Result<()> {
        self.updates += 1;
        handle.apply(scene);
        Ok(())
    }

    fn update_background(&mut self, handle: &mut SkiaChart, scene: &Scene<'_>) -> chart_core::Result<()> {
        handle.set_background(scene);
        Ok(())
    }
}
