// File: crates/chart-core/src/config.rs
// Summary: Chart configuration with JSON loading; defaults reproduce the dashboard widget.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Tunables for sampling, animation and layout.
///
/// Every field has a default, so a partial JSON document (or `{}`) is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Last sampled cursor value; also the upper x-domain bound.
    pub max_x: f64,
    /// Cursor advance per timer tick.
    pub x_step: f64,
    /// Number of fine steps between redraws.
    pub draw_every: u32,
    pub margin: f32,
    /// Background transition length, and the line transition once the animation stops.
    pub resize_duration_ms: u64,
    pub terminal_fill_opacity: f32,
    pub y_domain: (f64, f64),
    pub x_label: String,
    pub y_label: String,
    pub y_ticks: usize,
    pub point_size: f32,
    pub interactive_guideline: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_x: 14.0,
            x_step: 0.125,
            draw_every: 4,
            margin: 20.0,
            resize_duration_ms: 500,
            terminal_fill_opacity: 0.11,
            y_domain: (-1.01, 3.0),
            x_label: "TIME".to_string(),
            y_label: "REVENUE".to_string(),
            y_ticks: 10,
            point_size: 5.0,
            interactive_guideline: true,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_x.is_finite() && self.max_x > 0.0) {
            return Err(ChartError::InvalidConfig(format!("max_x must be positive, got {}", self.max_x)));
        }
        if !(self.x_step.is_finite() && self.x_step > 0.0) {
            return Err(ChartError::InvalidConfig(format!("x_step must be positive, got {}", self.x_step)));
        }
        if self.draw_every == 0 {
            return Err(ChartError::InvalidConfig("draw_every must be at least 1".into()));
        }
        let (lo, hi) = self.y_domain;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ChartError::InvalidConfig(format!("y_domain must be increasing, got [{lo}, {hi}]")));
        }
        if self.columns() == 0 {
            return Err(ChartError::InvalidConfig("max_x too small for a single background column".into()));
        }
        if !(self.margin >= 0.0) {
            return Err(ChartError::InvalidConfig(format!("margin must be non-negative, got {}", self.margin)));
        }
        Ok(())
    }

    /// Background column count; one column per two x units.
    pub fn columns(&self) -> usize {
        (self.max_x / 2.0) as usize
    }

    pub fn draw_step(&self) -> f64 {
        self.x_step * self.draw_every as f64
    }

    /// Cursor value at which the animation stops.
    pub fn stop_at(&self) -> f64 {
        self.max_x + 1.0
    }

    /// Timer period: the full sweep is paced to ~400 ms worth of redraws.
    pub fn tick_interval(&self) -> Duration {
        let redraws = (self.max_x / self.x_step) / self.draw_every as f64;
        Duration::from_millis((400.0 / redraws).round().max(1.0) as u64)
    }

    pub fn resize_duration(&self) -> Duration {
        Duration::from_millis(self.resize_duration_ms)
    }
}
