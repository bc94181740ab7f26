// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, fixed domains and tick placement.

use crate::grid::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// Explicit tick positions.
    Values(Vec<f64>),
    /// Roughly this many round-valued ticks across the domain.
    Count(usize),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
    /// Adds ticks at the exact domain endpoints.
    pub show_max_min: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Ticks::Count(5), show_max_min: true }
    }

    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn hide_max_min(mut self) -> Self {
        self.show_max_min = false;
        self
    }

    /// Tick positions inside the domain, in ascending order.
    pub fn tick_values(&self) -> Vec<f64> {
        let mut values = match &self.ticks {
            Ticks::Values(v) => v.clone(),
            Ticks::Count(n) => nice_ticks(self.min, self.max, *n),
        };
        values.retain(|v| *v >= self.min && *v <= self.max);
        if self.show_max_min {
            values.push(self.min);
            values.push(self.max);
        }
        values.sort_by(f64::total_cmp);
        values.dedup();
        values
    }
}
