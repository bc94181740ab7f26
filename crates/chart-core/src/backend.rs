// File: crates/chart-core/src/backend.rs
// Summary: Rendering collaborator seam: create a chart handle once, then push updates into it.

use std::time::{Duration, Instant};

use crate::chart::LineChartModel;
use crate::error::Result;
use crate::layout::BackgroundTransition;
use crate::legend::Legend;
use crate::series::SeriesSet;

/// Borrowed snapshot of everything a backend needs to draw one frame.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub model: &'a LineChartModel,
    pub series: &'a SeriesSet,
    pub background: &'a BackgroundTransition,
    pub legend: &'a Legend,
    /// When this snapshot was taken; transitions are timed from here.
    pub at: Instant,
}

pub trait ChartBackend {
    type Handle;

    /// Build the chart once, at construction time.
    fn create_chart(&mut self, scene: &Scene<'_>) -> Result<Self::Handle>;

    /// Redraw lines from the current series data and model options.
    fn update_chart(&mut self, handle: &mut Self::Handle, scene: &Scene<'_>) -> Result<()>;

    /// Resize the background bars and axis labels.
    fn update_background(&mut self, handle: &mut Self::Handle, scene: &Scene<'_>) -> Result<()>;
}

/// What a [`RecordingBackend`] saw on one chart update.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateRecord {
    pub points: usize,
    pub last_x: Option<f64>,
    pub fill_opacity: Vec<f32>,
    pub duration: Duration,
}

/// Headless backend that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub created: usize,
    pub updates: Vec<UpdateRecord>,
    pub background_widths: Vec<f32>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(scene: &Scene<'_>) -> UpdateRecord {
        let first = scene.series.iter().next();
        UpdateRecord {
            points: first.map_or(0, |s| s.len()),
            last_x: first.and_then(|s| s.points().last()).map(|p| p.0),
            fill_opacity: scene.series.iter().map(|s| s.style.fill_opacity).collect(),
            duration: scene.model.duration,
        }
    }
}

impl ChartBackend for RecordingBackend {
    /// Index of the chart in creation order.
    type Handle = usize;

    fn create_chart(&mut self, _scene: &Scene<'_>) -> Result<usize> {
        self.created += 1;
        Ok(self.created - 1)
    }

    fn update_chart(&mut self, _handle: &mut usize, scene: &Scene<'_>) -> Result<()> {
        self.updates.push(Self::record(scene));
        Ok(())
    }

    fn update_background(&mut self, _handle: &mut usize, scene: &Scene<'_>) -> Result<()> {
        self.background_widths.push(scene.background.target().svg_width);
        Ok(())
    }
}
