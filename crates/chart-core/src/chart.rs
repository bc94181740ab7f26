// File: crates/chart-core/src/chart.rs
// Summary: Line chart object model (margins, axes, interaction options) handed to rendering backends.

use std::time::Duration;

use crate::axis::{Axis, Ticks};
use crate::config::ChartConfig;
use crate::geometry::{Rect, Size};
use crate::scale::LinearScale;
use crate::series::{SeriesId, SeriesSet};
use crate::types::Insets;

#[derive(Clone, Debug)]
pub struct LineChartModel {
    pub insets: Insets,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// The component draws its own legend.
    pub show_legend: bool,
    pub tooltips: bool,
    /// Vertical hover line with per-series markers.
    pub interactive_guideline: bool,
    pub point_size: f32,
    /// Transition applied by the backend on the next update.
    pub duration: Duration,
}

impl LineChartModel {
    pub fn from_config(config: &ChartConfig) -> Self {
        let x_axis = Axis::new(config.x_label.clone(), 0.0, config.max_x)
            .with_ticks(Ticks::Values(vec![0.0]))
            .hide_max_min();
        let y_axis = Axis::new(config.y_label.clone(), config.y_domain.0, config.y_domain.1)
            .with_ticks(Ticks::Count(config.y_ticks))
            .hide_max_min();
        Self {
            insets: Insets::open_bottom(config.margin),
            x_axis,
            y_axis,
            show_legend: false,
            tooltips: false,
            interactive_guideline: config.interactive_guideline,
            point_size: config.point_size,
            duration: Duration::ZERO,
        }
    }

    /// Plot area inside a surface of `size`.
    pub fn plot_rect(&self, size: Size) -> Rect {
        Rect::from_ltwh(
            self.insets.left,
            self.insets.top,
            (size.width - self.insets.hsum()).max(1.0),
            (size.height - self.insets.vsum()).max(1.0),
        )
    }

    pub fn x_scale(&self, size: Size) -> LinearScale {
        let r = self.plot_rect(size);
        LinearScale::new((self.x_axis.min, self.x_axis.max), (r.left, r.right()))
    }

    pub fn y_scale(&self, size: Size) -> LinearScale {
        let r = self.plot_rect(size);
        LinearScale::new((self.y_axis.min, self.y_axis.max), (r.bottom(), r.top))
    }

    /// Nearest sampled point of every non-empty series to data-space `x`.
    /// `None` when the guideline is disabled or nothing has been sampled.
    pub fn guideline_at(&self, x: f64, series: &SeriesSet) -> Option<Guideline> {
        if !self.interactive_guideline {
            return None;
        }
        let points: Vec<_> = series.iter().filter_map(|s| s.nearest(x).map(|p| (s.id(), p))).collect();
        let snapped = points.first().map(|(_, p)| p.0)?;
        Some(Guideline { x: snapped, points })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Guideline {
    /// Sample x the guideline snapped to.
    pub x: f64,
    pub points: Vec<(SeriesId, (f64, f64))>,
}
